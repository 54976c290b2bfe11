use gloo_timers::callback::Timeout;

/// One-shot callback that can be cancelled before it runs.
///
/// Dropping the task cancels it as well.
pub struct DeferredTask {
    timeout: Option<Timeout>,
}

impl DeferredTask {
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Self {
        Self {
            timeout: Some(Timeout::new(delay_ms, callback)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.timeout.take() {
            timeout.cancel();
        }
    }
}
