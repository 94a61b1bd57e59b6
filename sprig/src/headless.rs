//! In-memory mount target.
//!
//! A [`HeadlessRoot`] keeps the latest rendered tree of a view and re-renders
//! it through the same effect machinery the DOM mount uses, so component
//! behavior can be driven and observed without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::Event;
use crate::html::Html;
use crate::signal::{self, EffectId};
use crate::{Error, View};

#[derive(Default)]
struct Snapshot {
    tree: Html,
    renders: usize,
}

pub struct HeadlessRoot {
    snapshot: Rc<RefCell<Snapshot>>,
    effect: EffectId,
}

impl std::fmt::Debug for HeadlessRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessRoot")
            .field("renders", &self.renders())
            .field("effect", &self.effect)
            .finish()
    }
}

impl HeadlessRoot {
    /// Render `view` once and keep re-rendering it whenever a signal it read
    /// changes.
    pub fn mount<V: View + 'static>(view: V) -> Self {
        let snapshot = Rc::new(RefCell::new(Snapshot::default()));

        let effect = {
            let snapshot = Rc::clone(&snapshot);
            signal::effect(move || {
                let tree = view.render();
                let mut snapshot = snapshot.borrow_mut();
                snapshot.tree = tree;
                snapshot.renders += 1;
            })
        };

        log::debug!("headless root mounted as {effect:?}");

        Self { snapshot, effect }
    }

    pub fn markup(&self) -> String {
        self.snapshot.borrow().tree.to_string()
    }

    pub fn text(&self) -> String {
        self.snapshot.borrow().tree.text_content()
    }

    /// Number of renders since mount, the initial one included.
    pub fn renders(&self) -> usize {
        self.snapshot.borrow().renders
    }

    /// Run `f` against the current tree.
    pub fn with_tree<R>(&self, f: impl FnOnce(&Html) -> R) -> R {
        f(&self.snapshot.borrow().tree)
    }

    /// Deliver a `kind` event to the first `tag` element of the current tree.
    ///
    /// An element without listeners for `kind` accepts the event and nothing
    /// happens.
    pub fn dispatch(&self, tag: &str, kind: &str) -> Result<Event, Error> {
        // Listeners are cloned out first: running them may re-render and
        // replace the tree.
        let listeners = {
            let snapshot = self.snapshot.borrow();
            let element = snapshot.tree.find(tag).ok_or_else(|| Error::ElementNotFound {
                tag: tag.to_owned(),
            })?;
            element.listeners_for(kind)
        };

        let event = Event::new(kind);
        for listener in listeners {
            listener(&event);
        }

        Ok(event)
    }

    pub fn click(&self, tag: &str) -> Result<Event, Error> {
        self.dispatch(tag, "click")
    }

    pub fn unmount(self) {
        // Drop disposes the effect.
    }
}

impl Drop for HeadlessRoot {
    fn drop(&mut self) {
        signal::dispose(self.effect);
    }
}
