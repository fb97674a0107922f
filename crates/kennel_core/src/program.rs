//! Minimal unidirectional runtime: synchronous dispatch, asynchronous
//! effects. Effects come out of the pure update function rather than out
//! of actions, which keeps all state in one place while the surrounding
//! application grows.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// An effect: an opaque task that receives a dispatch handle and may use
/// it zero or more times, at any later point, including synchronously.
pub type Task<A> = Box<dyn FnOnce(Dispatch<A>)>;

/// Cloneable handle for feeding actions back into a running program.
///
/// Holds only a weak link; once the program is dropped, sends become
/// no-ops instead of keeping the runtime alive.
pub struct Dispatch<A> {
    send: Rc<dyn Fn(A)>,
}

impl<A> Clone for Dispatch<A> {
    fn clone(&self) -> Self {
        Self {
            send: Rc::clone(&self.send),
        }
    }
}

impl<A> Dispatch<A> {
    pub fn send(&self, action: A) {
        (self.send)(action)
    }
}

struct Subscriber {
    id: u64,
    callback: Rc<dyn Fn()>,
}

struct Inner<A, S> {
    state: RefCell<S>,
    update: Box<dyn Fn(A, &S) -> (S, Vec<Task<A>>)>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_subscriber: Cell<u64>,
}

/// State machine handling incoming actions and their effects.
///
/// Single-threaded by construction: every transition is serialized
/// through [`Program::dispatch`], so no locking is involved anywhere.
pub struct Program<A, S> {
    inner: Rc<Inner<A, S>>,
}

impl<A, S> Clone for Program<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, S> Program<A, S>
where
    A: 'static,
    S: PartialEq + 'static,
{
    /// Creates the state machine and runs the initial effects in order.
    pub fn run(
        init: (S, Vec<Task<A>>),
        update: impl Fn(A, &S) -> (S, Vec<Task<A>>) + 'static,
    ) -> Self {
        let (state, effects) = init;
        let program = Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                update: Box::new(update),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(0),
            }),
        };
        program.execute(effects);
        program
    }

    /// Applies one action: computes the transition, runs this dispatch's
    /// effects in list order, then notifies subscribers, but only when
    /// the state value actually changed.
    pub fn dispatch(&self, action: A) {
        let (next, effects) = {
            let current = self.inner.state.borrow();
            (self.inner.update)(action, &current)
        };

        let changed = {
            let mut current = self.inner.state.borrow_mut();
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        };

        // No borrow is held past this point, so a task dispatching again
        // synchronously nests cleanly.
        self.execute(effects);

        if changed {
            self.notify();
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> S
    where
        S: Clone,
    {
        self.inner.state.borrow().clone()
    }

    /// A handle that effects (or anything else) can use to dispatch.
    pub fn dispatcher(&self) -> Dispatch<A> {
        let weak = Rc::downgrade(&self.inner);
        Dispatch {
            send: Rc::new(move |action| {
                if let Some(inner) = weak.upgrade() {
                    Program { inner }.dispatch(action);
                }
            }),
        }
    }

    /// Registers a callback invoked after every state-changing dispatch.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let id = self.inner.next_subscriber.get();
        self.inner.next_subscriber.set(id + 1);
        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Rc::new(callback),
        });

        let weak = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.subscribers.borrow_mut().retain(|s| s.id != id);
                }
            }),
        }
    }

    fn execute(&self, effects: Vec<Task<A>>) {
        for task in effects {
            task(self.dispatcher());
        }
    }

    fn notify(&self) {
        // Snapshot first: a callback may subscribe or unsubscribe while
        // notification is in flight. Anyone removed mid-notification is
        // skipped, not called with a stale registration.
        let snapshot: Vec<(u64, Rc<dyn Fn()>)> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|s| (s.id, Rc::clone(&s.callback)))
            .collect();

        for (id, callback) in snapshot {
            let still_subscribed = self.inner.subscribers.borrow().iter().any(|s| s.id == id);
            if still_subscribed {
                callback();
            }
        }
    }
}

/// Deregistration token returned by [`Program::subscribe`].
pub struct Subscription {
    cancel: Box<dyn Fn()>,
}

impl Subscription {
    /// Removes the callback. Idempotent: extra calls are no-ops.
    pub fn unsubscribe(&self) {
        (self.cancel)()
    }
}
