//! Deferred work: idle-time tasks and trailing-edge debouncing.

use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{IdleRequestOptions, Window};

/// A task queued with `requestIdleCallback`, or a timer where that is missing.
///
/// Dropping the handle cancels the task if it has not run yet.
pub enum IdleTask {
    Idle {
        window: Window,
        id: u32,
        _callback: Closure<dyn FnMut()>,
    },
    Timer(Timeout),
}

impl IdleTask {
    /// Run `task` when the browser is idle, at the latest after `timeout_ms`.
    /// Without idle callbacks it runs after `fallback_ms`.
    pub fn schedule(
        window: &Window,
        timeout_ms: u32,
        fallback_ms: u32,
        task: impl FnOnce() + 'static,
    ) -> Self {
        let task = Rc::new(RefCell::new(Some(task)));

        if crate::dom::supports(window, "requestIdleCallback") {
            let pending = task.clone();
            let callback: Closure<dyn FnMut()> = Closure::once(move || {
                if let Some(task) = pending.borrow_mut().take() {
                    task();
                }
            });

            let options = IdleRequestOptions::new();
            options.set_timeout(timeout_ms);

            match window.request_idle_callback_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(id) => {
                    return IdleTask::Idle {
                        window: window.clone(),
                        id,
                        _callback: callback,
                    };
                }
                Err(err) => {
                    log::debug!("requestIdleCallback failed, using a timer: {err:?}");
                }
            }
        }

        IdleTask::Timer(Timeout::new(fallback_ms, move || {
            if let Some(task) = task.borrow_mut().take() {
                task();
            }
        }))
    }
}

impl Drop for IdleTask {
    fn drop(&mut self) {
        if let IdleTask::Idle { window, id, .. } = self {
            window.cancel_idle_callback(*id);
        }
    }
}

/// Trailing-edge debouncer: only the last call within the quiet period runs.
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    /// Schedule `f`, replacing (and cancelling) any pending call.
    pub fn call(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        // Dropping the previous `Timeout` clears it.
        self.pending.replace(Some(timeout));
    }

    /// Cancel the pending call, if any.
    pub fn cancel(&self) {
        self.pending.replace(None);
    }
}
