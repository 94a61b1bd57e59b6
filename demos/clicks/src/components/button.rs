use sprig::prelude::*;

/// The "Click me" control.
///
/// Holds nothing but the callback it was given; without one, clicking it does
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct Button {
    onclick: Callback,
}

impl Button {
    pub fn new(onclick: impl Into<Callback>) -> Self {
        Self {
            onclick: onclick.into(),
        }
    }
}

impl View for Button {
    fn render(&self) -> Html {
        button()
            .on("click", self.onclick.clone())
            .text("Click me")
            .into()
    }
}
