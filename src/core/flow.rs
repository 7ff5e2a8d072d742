use std::ops::ControlFlow;

/// The signal every step returns to its caller.
///
/// `Stop` is not an error. It is the only way a pipeline ends early (the
/// equivalent of `break`), and it carries no payload. Whoever receives
/// `Stop` must not call into the step that returned it again and must
/// hand the signal on to its own caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    #[default]
    Continue,
    Stop,
}

impl Flow {
    pub fn is_continue(self) -> bool {
        self == Flow::Continue
    }

    pub fn is_stop(self) -> bool {
        self == Flow::Stop
    }

    /// Returns `Stop` if either signal is `Stop`.
    pub fn and(self, other: Flow) -> Flow {
        if self.is_stop() {
            self
        } else {
            other
        }
    }
}

impl From<bool> for Flow {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Flow::Continue
        } else {
            Flow::Stop
        }
    }
}

impl From<Flow> for bool {
    fn from(flow: Flow) -> Self {
        flow.is_continue()
    }
}

impl<B> From<ControlFlow<B>> for Flow {
    fn from(flow: ControlFlow<B>) -> Self {
        match flow {
            ControlFlow::Continue(()) => Flow::Continue,
            ControlFlow::Break(_) => Flow::Stop,
        }
    }
}

impl From<Flow> for ControlFlow<()> {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Continue => ControlFlow::Continue(()),
            Flow::Stop => ControlFlow::Break(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_round_trip() {
        assert_eq!(Flow::from(true), Flow::Continue);
        assert_eq!(Flow::from(false), Flow::Stop);
        assert!(bool::from(Flow::Continue));
        assert!(!bool::from(Flow::Stop));
    }

    #[test]
    fn defaults_to_continue() {
        assert_eq!(Flow::default(), Flow::Continue);
    }

    #[test]
    fn and_prefers_stop() {
        assert_eq!(Flow::Continue.and(Flow::Continue), Flow::Continue);
        assert_eq!(Flow::Continue.and(Flow::Stop), Flow::Stop);
        assert_eq!(Flow::Stop.and(Flow::Continue), Flow::Stop);
    }

    #[test]
    fn from_control_flow() {
        assert_eq!(Flow::from(ControlFlow::<u8>::Break(3)), Flow::Stop);
        assert_eq!(Flow::from(ControlFlow::<u8>::Continue(())), Flow::Continue);
    }
}
