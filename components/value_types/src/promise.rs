//! Promise payloads.
//!
//! A promise is a settle-once state machine. Settling an already settled
//! promise is a no-op.

use crate::value::Value;

/// The settlement state of a promise.
#[derive(Debug, Clone, PartialEq)]
pub enum PromiseState {
    /// Not yet settled.
    Pending,
    /// Settled with a value.
    Fulfilled(Value),
    /// Settled with a rejection reason.
    Rejected(Value),
}

/// Internal promise data.
///
/// # Examples
///
/// ```
/// use value_types::{PromiseData, PromiseState, Value};
///
/// let mut p = PromiseData::new();
/// assert!(matches!(p.state(), PromiseState::Pending));
///
/// p.fulfill(Value::number(1.0));
/// assert!(matches!(p.state(), PromiseState::Fulfilled(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PromiseData {
    state: PromiseState,
}

impl PromiseData {
    /// Create a pending promise.
    pub fn new() -> Self {
        PromiseData {
            state: PromiseState::Pending,
        }
    }

    /// The current state.
    pub fn state(&self) -> &PromiseState {
        &self.state
    }

    /// Fulfill with a value, if still pending.
    pub fn fulfill(&mut self, value: Value) {
        if matches!(self.state, PromiseState::Pending) {
            self.state = PromiseState::Fulfilled(value);
        }
    }

    /// Reject with a reason, if still pending.
    pub fn reject(&mut self, reason: Value) {
        if matches!(self.state, PromiseState::Pending) {
            self.state = PromiseState::Rejected(reason);
        }
    }
}

impl Default for PromiseData {
    fn default() -> Self {
        PromiseData::new()
    }
}
