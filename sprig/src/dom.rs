//! Browser mount target (wasm32 only).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::event::Event;
use crate::html::Html;
use crate::signal::{self, EffectId};
use crate::{Error, View};

type DomListener = Closure<dyn Fn(web_sys::Event)>;

#[derive(Default)]
struct Listeners {
    live: Vec<DomListener>,
    // Previous generation. A listener may be the one whose signal update
    // triggered the current render, so it is freed one render later.
    retired: Vec<DomListener>,
}

/// A view mounted into a DOM element.
pub struct Mount {
    effect: EffectId,
    _listeners: Rc<RefCell<Listeners>>,
}

impl std::fmt::Debug for Mount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mount").field("effect", &self.effect).finish()
    }
}

impl Mount {
    /// Stop re-rendering. Listeners stay allocated until the mount is dropped.
    pub fn unmount(&self) {
        signal::dispose(self.effect);
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        signal::dispose(self.effect);
    }
}

/// Find the element with `id` in the current document.
pub fn root_element(id: &str) -> Result<web_sys::Element, Error> {
    let document = document()?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingRoot(id.to_owned()))
}

fn document() -> Result<web_sys::Document, Error> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(Error::NoDocument)
}

/// Mount `view` into `target`, replacing its children on every render.
pub fn mount<V: View + 'static>(target: &web_sys::Element, view: V) -> Result<Mount, Error> {
    let document = document()?;
    let listeners = Rc::new(RefCell::new(Listeners::default()));

    let effect = {
        let target = target.clone();
        let listeners = Rc::clone(&listeners);

        signal::effect(move || {
            let html = view.render();
            let mut fresh = Vec::new();

            target.set_inner_html("");
            if let Err(err) = append(&document, &html, &target, &mut fresh) {
                log::error!("render failed: {err}");
            }

            let mut listeners = listeners.borrow_mut();
            let previous = std::mem::replace(&mut listeners.live, fresh);
            listeners.retired = previous;
        })
    };

    log::debug!("mounted {effect:?} into <{}>", target.tag_name());

    Ok(Mount {
        effect,
        _listeners: listeners,
    })
}

fn append(
    document: &web_sys::Document,
    html: &Html,
    parent: &web_sys::Node,
    listeners: &mut Vec<DomListener>,
) -> Result<(), Error> {
    match html {
        Html::Empty => {}
        Html::Text(text) | Html::Raw(text) => {
            parent.append_child(&document.create_text_node(text))?;
        }
        Html::Element(element) => {
            let node = document.create_element(element.tag())?;

            for (name, value) in element.attributes() {
                node.set_attribute(name, value)?;
            }

            for (kind, listener) in element.listeners() {
                let listener = Rc::clone(listener);
                let closure = Closure::wrap(Box::new(move |dom_event: web_sys::Event| {
                    let event = Event::new(dom_event.type_());
                    listener(&event);
                    if event.default_prevented() {
                        dom_event.prevent_default();
                    }
                }) as Box<dyn Fn(web_sys::Event)>);

                node.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
                listeners.push(closure);
            }

            for child in element.child_nodes() {
                append(document, child, &node, listeners)?;
            }

            parent.append_child(&node)?;
        }
        Html::Fragment(nodes) => {
            for node in nodes {
                append(document, node, parent, listeners)?;
            }
        }
    }

    Ok(())
}
