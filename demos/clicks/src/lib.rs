//! Clicks demo
//!
//! A single page with a heading, a click counter and a button, wrapped in a
//! layout with three navigation links. The library exposes the components and
//! the route table for both the server binary and the browser client.

#![allow(missing_docs)]

pub mod components;
pub mod document;
pub mod layout;
pub mod pages;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

use pages::{Home, NotFound};
use sprig::View;
use sprig_router::{Params, RouteError, Routes};

/// The application's pages. Every location without a page renders
/// [`NotFound`].
pub fn routes() -> Result<Routes, RouteError> {
    let routes = Routes::new()
        .page("/", |_: &Params| -> Box<dyn View> { Box::new(Home::new()) })?
        .fallback(|_: &Params| -> Box<dyn View> { Box::new(NotFound) });

    Ok(routes)
}

/// Mount the application into the server-rendered root and follow
/// navigation from then on.
#[cfg(target_arch = "wasm32")]
pub fn start() -> Result<(), Box<dyn std::error::Error>> {
    use layout::Layout;
    use sprig_router::ClientRouter;

    let target = sprig::dom::root_element(document::ROOT_ID)?;
    let router = ClientRouter::new(routes()?, target, |page| {
        Box::new(Layout::new(page)) as Box<dyn View>
    });

    // Subscriptions made by `start` keep the router alive.
    router.start()?;

    Ok(())
}
