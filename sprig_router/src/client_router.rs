use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use sprig::dom::{self, Mount};
use sprig::{Error, Html, View};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::{Routes, navigation};

type Layout = Box<dyn Fn(Box<dyn View>) -> Box<dyn View>>;

#[derive(Default)]
struct Slots {
    current: Option<Mount>,
    // Kept alive until the next navigation: the link listener that asked for
    // this one belongs to it.
    retired: Option<Mount>,
}

/// Keeps the mounted page in sync with the browser location.
pub struct ClientRouter {
    routes: Routes,
    layout: Layout,
    target: web_sys::Element,
    slots: RefCell<Slots>,
}

impl fmt::Debug for ClientRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRouter")
            .field("routes", &self.routes)
            .field("target", &self.target.id())
            .finish()
    }
}

impl ClientRouter {
    /// `layout` wraps every resolved page before it is mounted into `target`.
    pub fn new<L>(routes: Routes, target: web_sys::Element, layout: L) -> Self
    where
        L: Fn(Box<dyn View>) -> Box<dyn View> + 'static,
    {
        Self {
            routes,
            layout: Box::new(layout),
            target,
            slots: RefCell::new(Slots::default()),
        }
    }

    /// Mount the page for the current location, then follow navigation
    /// requests and history traversal for the lifetime of the page.
    pub fn start(self) -> Result<Rc<Self>, Error> {
        let router = Rc::new(self);
        let window = web_sys::window().ok_or(Error::NoDocument)?;

        let pathname = window.location().pathname()?;
        router.show(&pathname)?;

        navigation::subscribe({
            let router = Rc::clone(&router);
            move |path| {
                if let Err(err) = router.push(path) {
                    log::error!("navigation to {path} failed: {err}");
                }
            }
        });

        let on_popstate = {
            let router = Rc::clone(&router);
            Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let pathname = web_sys::window()
                    .ok_or(Error::NoDocument)
                    .and_then(|window| Ok(window.location().pathname()?));

                if let Err(err) = pathname.and_then(|pathname| router.show(&pathname)) {
                    log::error!("history traversal failed: {err}");
                }
            }) as Box<dyn Fn(web_sys::Event)>)
        };

        window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())?;
        on_popstate.forget(); // The listener lives as long as the page

        Ok(router)
    }

    fn push(&self, path: &str) -> Result<(), Error> {
        let window = web_sys::window().ok_or(Error::NoDocument)?;
        window
            .history()?
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))?;

        self.show(path)
    }

    /// Mount a fresh page for `location`, replacing the current one.
    pub fn show(&self, location: &str) -> Result<(), Error> {
        log::info!("showing {location}");

        let page = self
            .routes
            .view_for(location)
            .unwrap_or_else(|| Box::new(Html::Empty));
        let mount = dom::mount(&self.target, (self.layout)(page))?;

        let mut slots = self.slots.borrow_mut();
        if let Some(previous) = slots.current.replace(mount) {
            previous.unmount();
            slots.retired = Some(previous);
        }

        Ok(())
    }
}
