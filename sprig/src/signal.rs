use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

/// Handle to a registered effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EffectId(usize);

#[derive(Default)]
struct Runtime {
    effects: HashMap<EffectId, Rc<dyn Fn()>>,
    next_id: usize,
    // Innermost running effect is last.
    tracking: Vec<EffectId>,
}

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::default());
}

fn current_effect() -> Option<EffectId> {
    RUNTIME.with(|rt| rt.borrow().tracking.last().copied())
}

/// A reactive signal holding a value of type T.
///
/// Clones share the same value. Reading through [`Signal::get`] while an
/// effect runs subscribes that effect; [`Signal::set`] and
/// [`Signal::update`] re-run every live subscriber before returning.
pub struct Signal<T: 'static> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<BTreeSet<EffectId>>>,
}

impl<T: 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T: 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(BTreeSet::new())),
        }
    }

    /// Borrow the value, subscribing the running effect.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.track();
        f(&self.value.borrow())
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn update<F: FnOnce(&T) -> T>(&self, f: F) {
        let new_value = f(&self.value.borrow());
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Number of live effects subscribed to this signal.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|id| is_active(**id))
            .count()
    }

    fn track(&self) {
        if let Some(id) = current_effect() {
            self.subscribers.borrow_mut().insert(id);
        }
    }

    fn notify(&self) {
        let subscribers: Vec<EffectId> = self.subscribers.borrow().iter().copied().collect();

        for id in subscribers {
            if !run_effect(id) {
                self.subscribers.borrow_mut().remove(&id);
            }
        }
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn get(&self) -> T {
        self.track();
        self.value.borrow().clone()
    }

    /// Read the value without subscribing the running effect.
    pub fn get_untracked(&self) -> T {
        self.value.borrow().clone()
    }

    /// Signal that follows `f` applied to this one.
    pub fn derive<U: 'static, F: Fn(&T) -> U + 'static>(&self, f: F) -> Signal<U> {
        let derived = Signal::new(f(&self.value.borrow()));
        let source = self.clone();
        let target = derived.clone();

        effect(move || {
            let value = source.with(&f);
            target.set(value);
        });

        derived
    }
}

impl<T: Default + 'static> Default for Signal<T> {
    fn default() -> Self {
        Signal::new(T::default())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl<T: fmt::Display + 'static> fmt::Display for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| fmt::Display::fmt(value, f))
    }
}

/// Register an effect and run it once, subscribing it to every signal it
/// reads. It re-runs whenever one of those signals changes, until disposed.
pub fn effect<F: Fn() + 'static>(f: F) -> EffectId {
    let id = RUNTIME.with(|rt| {
        let mut rt = rt.borrow_mut();
        rt.next_id += 1;
        let id = EffectId(rt.next_id);
        rt.effects.insert(id, Rc::new(f));
        id
    });

    run_effect(id);

    id
}

/// Remove an effect. Signals drop the stale subscription on their next notify.
pub fn dispose(id: EffectId) {
    let removed = RUNTIME.with(|rt| rt.borrow_mut().effects.remove(&id));

    // Dropped outside the borrow: the closure may own signals or mounts.
    drop(removed);
}

pub fn is_active(id: EffectId) -> bool {
    RUNTIME.with(|rt| rt.borrow().effects.contains_key(&id))
}

/// Run an effect with tracking. Returns false if it was disposed.
fn run_effect(id: EffectId) -> bool {
    let Some(f) = RUNTIME.with(|rt| rt.borrow().effects.get(&id).cloned()) else {
        return false;
    };

    RUNTIME.with(|rt| rt.borrow_mut().tracking.push(id));
    f();
    RUNTIME.with(|rt| rt.borrow_mut().tracking.pop());

    true
}

/// Macro for ergonomic signal creation: signal!(value)
#[macro_export]
macro_rules! signal {
    ($val:expr) => {
        $crate::signal::Signal::new($val)
    };
}
