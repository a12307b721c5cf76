//! Event-driven state machine for the client checkout flow.
//!
//! The flow is single-threaded: one widget session per intent, enforced by
//! the transitions themselves — `Begin` is only legal from `Idle`, so a
//! second start while an order is being created or collected is an
//! [`InvalidTransition`], not a second widget.
//!
//! ```text
//! idle → loading → processing → success
//!          │            │     ↘ failed → idle (retry)
//!          ↓            ↓
//!        failed       idle (widget dismissed)
//! ```

use serde::Serialize;
use thiserror::Error;

/// States of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutState {
    /// Waiting for parameters and the gateway client script.
    Idle,
    /// Order creation in flight.
    Loading,
    /// Widget open; suspended until completion or dismissal.
    Processing,
    /// Payment verified and registration forwarded. Terminal.
    Success,
    /// Order creation or verification failed; retry re-enters the flow.
    Failed,
}

/// Events that drive the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutEvent {
    /// Parameters ready; start creating the order.
    Begin,
    /// Order creation succeeded; open the widget.
    OrderCreated,
    /// Order creation failed.
    OrderFailed,
    /// User dismissed the widget without paying.
    WidgetDismissed,
    /// Completion handler verified the payment.
    Verified,
    /// Completion handler could not verify the payment.
    VerificationFailed,
    /// User-triggered retry from the failed state.
    Retry,
}

/// Rejected state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid checkout transition: {event:?} in state {state:?}")]
pub struct InvalidTransition {
    pub state: CheckoutState,
    pub event: CheckoutEvent,
}

impl CheckoutState {
    /// Apply an event, returning the next state.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] for any pairing not in the diagram.
    pub fn apply(self, event: CheckoutEvent) -> Result<CheckoutState, InvalidTransition> {
        use CheckoutEvent::*;
        use CheckoutState::*;

        match (self, event) {
            (Idle, Begin) => Ok(Loading),
            (Loading, OrderCreated) => Ok(Processing),
            (Loading, OrderFailed) => Ok(Failed),
            (Processing, WidgetDismissed) => Ok(Idle),
            (Processing, Verified) => Ok(Success),
            (Processing, VerificationFailed) => Ok(Failed),
            (Failed, Retry) => Ok(Idle),
            (state, event) => Err(InvalidTransition { state, event }),
        }
    }

    /// Success is the only terminal state; everything else can still move.
    pub fn is_terminal(self) -> bool {
        matches!(self, CheckoutState::Success)
    }
}

/// A checkout flow instance: current state plus the last error message.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    state: CheckoutState,
    error: Option<String>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            state: CheckoutState::Idle,
            error: None,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Last failure message, kept across the failed state for display.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply an event, recording a failure message where one applies.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] without changing state.
    pub fn handle(
        &mut self,
        event: CheckoutEvent,
        error: Option<String>,
    ) -> Result<CheckoutState, InvalidTransition> {
        let next = self.state.apply(event)?;
        self.state = next;
        self.error = match next {
            CheckoutState::Failed => error,
            CheckoutState::Success | CheckoutState::Loading => None,
            _ => self.error.take(),
        };
        Ok(next)
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CheckoutEvent::*;
    use CheckoutState::*;

    #[test]
    fn happy_path_reaches_success() {
        let mut flow = CheckoutFlow::new();
        flow.handle(Begin, None).unwrap();
        flow.handle(OrderCreated, None).unwrap();
        let state = flow.handle(Verified, None).unwrap();
        assert_eq!(state, Success);
        assert!(state.is_terminal());
        assert!(flow.error().is_none());
    }

    #[test]
    fn dismissal_returns_to_idle() {
        let mut flow = CheckoutFlow::new();
        flow.handle(Begin, None).unwrap();
        flow.handle(OrderCreated, None).unwrap();
        assert_eq!(flow.handle(WidgetDismissed, None).unwrap(), Idle);
    }

    #[test]
    fn failure_records_message_and_retry_clears_state() {
        let mut flow = CheckoutFlow::new();
        flow.handle(Begin, None).unwrap();
        flow.handle(OrderFailed, Some("gateway down".to_string()))
            .unwrap();
        assert_eq!(flow.state(), Failed);
        assert_eq!(flow.error(), Some("gateway down"));

        assert_eq!(flow.handle(Retry, None).unwrap(), Idle);
        // Re-entering loading discards the stale message.
        flow.handle(Begin, None).unwrap();
        assert!(flow.error().is_none());
    }

    #[test]
    fn begin_is_rejected_mid_flight() {
        let mut flow = CheckoutFlow::new();
        flow.handle(Begin, None).unwrap();
        let err = flow.handle(Begin, None).unwrap_err();
        assert_eq!(err.state, Loading);
        assert_eq!(flow.state(), Loading);

        flow.handle(OrderCreated, None).unwrap();
        assert!(flow.handle(Begin, None).is_err());
    }

    #[test]
    fn success_is_terminal() {
        let mut flow = CheckoutFlow::new();
        flow.handle(Begin, None).unwrap();
        flow.handle(OrderCreated, None).unwrap();
        flow.handle(Verified, None).unwrap();
        for event in [Begin, OrderCreated, OrderFailed, WidgetDismissed, Verified, Retry] {
            assert!(flow.handle(event, None).is_err());
        }
    }

    #[test]
    fn every_undeclared_pairing_is_rejected() {
        let states = [Idle, Loading, Processing, Success, Failed];
        let events = [
            Begin,
            OrderCreated,
            OrderFailed,
            WidgetDismissed,
            Verified,
            VerificationFailed,
            Retry,
        ];
        let allowed = [
            (Idle, Begin),
            (Loading, OrderCreated),
            (Loading, OrderFailed),
            (Processing, WidgetDismissed),
            (Processing, Verified),
            (Processing, VerificationFailed),
            (Failed, Retry),
        ];

        for state in states {
            for event in events {
                let outcome = state.apply(event);
                if allowed.contains(&(state, event)) {
                    assert!(outcome.is_ok(), "{state:?} on {event:?} should be legal");
                } else {
                    assert!(outcome.is_err(), "{state:?} on {event:?} should be rejected");
                }
            }
        }
    }
}
