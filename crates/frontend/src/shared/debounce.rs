use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs the most recent call once no new call arrived for `wait_ms`.
///
/// Each call replaces the pending `Timeout`; dropping it clears the
/// previous browser timer.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        // A fired timeout stays stored until the next call replaces it,
        // so the running callback is never dropped from inside itself.
        let timeout = Timeout::new(self.wait_ms, f);
        *self.pending.borrow_mut() = Some(timeout);
    }
}
