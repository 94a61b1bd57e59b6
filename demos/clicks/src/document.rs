//! Full HTML documents for server rendering.

use sprig::prelude::*;
use sprig_router::Routes;

use crate::layout::Layout;
use crate::pages::NotFound;

/// Id of the element the browser client mounts into.
pub const ROOT_ID: &str = "app";

/// Module produced by wasm-bindgen for the `client` binary.
pub const CLIENT_MODULE: &str = "/pkg/client.js";

/// A rendered document and whether the location matched a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub found: bool,
    pub html: String,
}

/// Render the shell and page for `location` as a complete document.
pub fn render_document(routes: &Routes, location: &str) -> RenderedDocument {
    let found = routes.resolve(location).is_some();
    let page = routes
        .view_for(location)
        .unwrap_or_else(|| Box::new(NotFound));

    let body = Layout::new(page).render();

    RenderedDocument {
        found,
        html: format!("<!DOCTYPE html>{}", document(body)),
    }
}

fn document(body: Html) -> Element {
    let bootstrap = format!("import init from '{CLIENT_MODULE}'; init();");

    el("html")
        .attr("lang", "en")
        .child(
            el("head")
                .child(el("meta").attr("charset", "UTF-8"))
                .child(
                    el("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1.0"),
                )
                .child(el("title").text("Hello")),
        )
        .child(
            el("body")
                .child(div().attr("id", ROOT_ID).child(body))
                .child(el("script").attr("type", "module").raw(bootstrap)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_document() {
        let rendered = render_document(&crate::routes().unwrap(), "/");

        assert!(rendered.found);
        assert!(rendered.html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(rendered.html.contains("<div id=\"app\"><div><div style=\"display: flex; gap: 12px\">"));
        assert!(rendered.html.contains("<p>Clicks: 0</p>"));
        assert!(rendered.html.contains(
            "<script type=\"module\">import init from '/pkg/client.js'; init();</script>"
        ));
    }

    #[test]
    fn unknown_location_renders_not_found_inside_shell() {
        let rendered = render_document(&crate::routes().unwrap(), "/twist");

        assert!(!rendered.found);
        assert!(rendered.html.contains("<a href=\"/twist\">Twist</a>"));
        assert!(rendered.html.contains("<h1>404</h1>"));
    }
}
