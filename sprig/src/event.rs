use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A user input event delivered to element listeners.
///
/// On wasm32 the DOM event is translated into this type before listeners run,
/// and `prevent_default` is forwarded back to the browser afterwards.
#[derive(Debug)]
pub struct Event {
    kind: String,
    default_prevented: Cell<bool>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            default_prevented: Cell::new(false),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Element-level listener attached with [`crate::Element::on_event`].
pub type Listener = Rc<dyn Fn(&Event)>;

/// Zero-argument notification handed from a parent to a child component.
///
/// The child only knows how to `emit`; whatever state the parent wants to
/// change stays captured inside the closure. An empty callback is valid and
/// emitting it does nothing.
#[derive(Clone, Default)]
pub struct Callback {
    handler: Option<Rc<dyn Fn()>>,
}

impl Callback {
    pub fn new<F: Fn() + 'static>(f: F) -> Self {
        Self {
            handler: Some(Rc::new(f)),
        }
    }

    pub fn noop() -> Self {
        Self::default()
    }

    pub fn emit(&self) {
        if let Some(handler) = &self.handler {
            handler();
        }
    }

    pub fn is_noop(&self) -> bool {
        self.handler.is_none()
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Callback::new(f)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            f.write_str("Callback(<noop>)")
        } else {
            f.write_str("Callback(<fn>)")
        }
    }
}
