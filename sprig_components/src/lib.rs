#![allow(missing_docs)]

mod link;

pub use link::Link;
