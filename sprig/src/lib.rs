//! Sprig: a small reactive view runtime.
//!
//! Components implement [`View`] and describe their output as an [`Html`]
//! tree. State lives in [`Signal`]s; mounting a view runs its render inside an
//! effect, so any signal read during render schedules a synchronous re-render
//! when it changes. The same tree renders to markup on the server, into an
//! in-memory [`HeadlessRoot`] for tests and into the DOM in the browser.

#![allow(missing_docs)]

use std::rc::Rc;

pub mod action;
pub mod event;
pub mod headless;
pub mod html;
pub mod prelude;
pub mod signal;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use event::{Callback, Event, Listener};
pub use headless::HeadlessRoot;
pub use html::{Element, Html};
pub use signal::Signal;

#[cfg(target_arch = "wasm32")]
pub use {js_sys, wasm_bindgen, web_sys};

/// Trait that defines the view layer for components
///
/// Components must implement this trait to provide their rendering logic.
pub trait View {
    /// Render the component to an [`Html`] tree
    fn render(&self) -> Html;
}

impl View for Box<dyn View> {
    fn render(&self) -> Html {
        self.as_ref().render()
    }
}

impl View for Html {
    fn render(&self) -> Html {
        self.clone()
    }
}

impl View for Rc<dyn View> {
    fn render(&self) -> Html {
        self.as_ref().render()
    }
}

/// Errors raised while mounting or driving a view tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no <{tag}> element in the rendered tree")]
    ElementNotFound { tag: String },

    #[error("no global document object")]
    NoDocument,

    #[error("mount target '{0}' not found")]
    MissingRoot(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Dom(format!("{value:?}"))
    }
}
