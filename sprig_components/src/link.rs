use sprig::prelude::*;

/// Anchor that asks the router to navigate instead of reloading the page.
///
/// The rendered `<a href>` stays a plain link, so the markup still works
/// before the client takes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    href: String,
    text: String,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl View for Link {
    fn render(&self) -> Html {
        let href = self.href.clone();

        a().attr("href", &self.href)
            .on_event("click", move |event| {
                event.prevent_default();
                log::debug!("link clicked: {href}");
                sprig_router::navigate(&href);
            })
            .text(&self.text)
            .into()
    }
}
