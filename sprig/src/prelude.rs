pub use crate::html::{Element, Html, a, button, div, el, h1, p};
pub use crate::{Callback, Event, HeadlessRoot, Signal, View, action, signal};

#[cfg(target_arch = "wasm32")]
pub use crate::dom::{Mount, mount};
