use sprig::prelude::*;

/// Shown for locations without a page.
#[derive(Debug, Default)]
pub struct NotFound;

impl View for NotFound {
    fn render(&self) -> Html {
        div()
            .child(h1().text("404"))
            .child(p().text("This page could not be found."))
            .into()
    }
}
