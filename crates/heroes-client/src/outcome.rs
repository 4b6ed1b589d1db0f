//! The result type every data-access call normalizes to.

use crate::error::HeroError;

/// What a data-access call produced.
///
/// Either the decoded payload, or the operation's fallback value together
/// with the error that forced it. Callers that only want "something usable"
/// call [`Outcome::into_value`] and never branch on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The request succeeded and the payload was decoded.
    Success(T),
    /// The request failed; `fallback` stands in for the payload.
    Failure {
        /// Pre-declared value returned in place of the payload.
        fallback: T,
        /// Why the request failed.
        reason: HeroError,
    },
}

impl<T> Outcome<T> {
    /// Whether the request succeeded.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the request failed and the fallback was used.
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the payload or the fallback.
    pub const fn value(&self) -> &T {
        match self {
            Self::Success(value) | Self::Failure { fallback: value, .. } => value,
        }
    }

    /// Take the payload or the fallback.
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) | Self::Failure { fallback: value, .. } => value,
        }
    }

    /// The failure reason, if there was one.
    pub const fn reason(&self) -> Option<&HeroError> {
        match self {
            Self::Success(_) => None,
            Self::Failure { reason, .. } => Some(reason),
        }
    }

    /// Convert to a `Result`, dropping the fallback on failure.
    pub fn into_result(self) -> Result<T, HeroError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure { reason, .. } => Err(reason),
        }
    }

    /// Apply `f` to the payload or the fallback, keeping the failure reason.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure { fallback, reason } => Outcome::Failure {
                fallback: f(fallback),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed() -> Outcome<Vec<u8>> {
        Outcome::Failure {
            fallback: Vec::new(),
            reason: HeroError::Transport(String::from("connection refused")),
        }
    }

    #[test]
    fn success_accessors() {
        let outcome = Outcome::Success(vec![1_u8, 2]);
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), &vec![1, 2]);
        assert!(outcome.reason().is_none());
        assert_eq!(outcome.into_result(), Ok(vec![1, 2]));
    }

    #[test]
    fn failure_yields_fallback() {
        let outcome = failed();
        assert!(outcome.is_failure());
        assert!(outcome.value().is_empty());
        assert!(matches!(outcome.reason(), Some(HeroError::Transport(_))));
        assert!(outcome.into_value().is_empty());
    }

    #[test]
    fn map_keeps_reason() {
        let mapped = failed().map(|v| v.len());
        assert_eq!(mapped.value(), &0);
        assert!(mapped.is_failure());
    }
}
