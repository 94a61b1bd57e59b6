use sprig::prelude::*;
use sprig_components::Link;

/// Navigation destinations, in display order: (label, path).
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Twist", "/twist"),
    ("Resources", "/resources"),
];

/// Application shell: the navigation bar above the active page.
pub struct Layout {
    page: Box<dyn View>,
}

impl std::fmt::Debug for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layout").field("page", &"<dyn View>").finish()
    }
}

impl Layout {
    pub fn new(page: Box<dyn View>) -> Self {
        Self { page }
    }
}

impl View for Layout {
    fn render(&self) -> Html {
        let links = NAV_LINKS
            .iter()
            .map(|(label, href)| Link::new(*href, *label).render());

        div()
            .child(
                div()
                    .attr("style", "display: flex; gap: 12px")
                    .children(links),
            )
            .child(self.page.render())
            .into()
    }
}
