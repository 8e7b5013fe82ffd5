/// A running periodic callback that can be stopped.
pub trait TickHandle {
    fn cancel(self);
}

/// Holds at most one live ticker. Replacing or cancelling always stops the
/// previous one.
#[derive(Debug)]
pub struct TickerSlot<H: TickHandle> {
    handle: Option<H>,
}

impl<H: TickHandle> Default for TickerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: TickHandle> TickerSlot<H> {
    pub fn install(&mut self, handle: H) {
        self.cancel();
        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Ticker double that records how many times it was cancelled.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FakeTicker {
        pub cancels: Rc<Cell<usize>>,
    }

    impl TickHandle for FakeTicker {
        fn cancel(self) {
            self.cancels.set(self.cancels.get() + 1);
        }
    }

    #[test]
    fn install_cancels_previous_handle() {
        let first = FakeTicker::default();
        let second = FakeTicker::default();
        let mut slot = TickerSlot::default();

        slot.install(first.clone());
        slot.install(second.clone());
        assert_eq!(first.cancels.get(), 1);
        assert_eq!(second.cancels.get(), 0);

        slot.cancel();
        slot.cancel();
        assert_eq!(second.cancels.get(), 1);
        assert!(!slot.is_active());
    }
}
