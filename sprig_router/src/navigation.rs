//! Navigation requests.
//!
//! Links publish the path they point to; whoever owns the current location
//! (the browser [`crate::ClientRouter`], or a test) subscribes. Delivery is
//! synchronous and per thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Subscriber = Rc<dyn Fn(&str)>;

thread_local! {
    static SUBSCRIBERS: RefCell<Vec<(SubscriptionId, Subscriber)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<usize> = const { Cell::new(0) };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

pub fn subscribe<F: Fn(&str) + 'static>(f: F) -> SubscriptionId {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        SubscriptionId(id)
    });

    SUBSCRIBERS.with(|subscribers| subscribers.borrow_mut().push((id, Rc::new(f))));

    id
}

pub fn unsubscribe(id: SubscriptionId) {
    SUBSCRIBERS.with(|subscribers| {
        subscribers
            .borrow_mut()
            .retain(|(subscription, _)| *subscription != id)
    });
}

/// Ask the current location owner to move to `path`.
pub fn navigate(path: &str) {
    let subscribers: Vec<Subscriber> = SUBSCRIBERS.with(|subscribers| {
        subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect()
    });

    if subscribers.is_empty() {
        log::debug!("navigation to {path} has no subscriber");
    }

    for subscriber in subscribers {
        subscriber(path);
    }
}
