//! Trailing-edge debounce: a burst of calls collapses into one action that
//! runs `wait_ms` after the last call of the burst.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use super::timing;

/// Ticket bookkeeping. Each call supersedes every earlier ticket.
#[derive(Debug, Default, Clone)]
pub struct DebounceState {
    latest: u64,
}

impl DebounceState {
    pub fn schedule(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn should_fire(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: u64,
    state: Rc<RefCell<DebounceState>>,
}

impl Debouncer {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            state: Rc::new(RefCell::new(DebounceState::default())),
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Register a call. The returned future must be spawned; it resolves to
    /// `true` if it ran `action`, `false` if a newer call superseded it.
    pub fn call<F>(&self, action: F) -> impl Future<Output = bool> + 'static
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.state.borrow_mut().schedule();
        let state = Rc::clone(&self.state);
        let wait_ms = self.wait_ms;
        async move {
            timing::sleep_ms(wait_ms).await;
            if state.borrow().should_fire(ticket) {
                action();
                true
            } else {
                false
            }
        }
    }
}
