//! SessionStatus enum for tracking lifecycle of practice sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a practice session.
///
/// Completed and Abandoned are terminal: no further messages are
/// accepted or scored once a session reaches either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Active,
    Completed,
    Abandoned,
}

impl SessionStatus {
    /// Returns true if the session can accept new messages.
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Active)
    }

    /// Returns true if the session has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Abandoned)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Active -> Completed
    /// - Active -> Abandoned
    pub fn can_transition_to(&self, target: &SessionStatus) -> bool {
        use SessionStatus::*;
        matches!((self, target), (Active, Completed) | (Active, Abandoned))
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Active => "Active",
            SessionStatus::Completed => "Completed",
            SessionStatus::Abandoned => "Abandoned",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(SessionStatus::default(), SessionStatus::Active);
    }

    #[test]
    fn active_is_not_terminal() {
        assert!(SessionStatus::Active.is_active());
        assert!(!SessionStatus::Active.is_terminal());
    }

    #[test]
    fn completed_and_abandoned_are_terminal() {
        assert!(SessionStatus::Completed.is_terminal());
        assert!(SessionStatus::Abandoned.is_terminal());
    }

    #[test]
    fn active_can_transition_to_terminal_states() {
        assert!(SessionStatus::Active.can_transition_to(&SessionStatus::Completed));
        assert!(SessionStatus::Active.can_transition_to(&SessionStatus::Abandoned));
    }

    #[test]
    fn terminal_states_are_final() {
        for terminal in [SessionStatus::Completed, SessionStatus::Abandoned] {
            assert!(!terminal.can_transition_to(&SessionStatus::Active));
            assert!(!terminal.can_transition_to(&SessionStatus::Completed));
            assert!(!terminal.can_transition_to(&SessionStatus::Abandoned));
        }
    }

    #[test]
    fn active_cannot_transition_to_active() {
        assert!(!SessionStatus::Active.can_transition_to(&SessionStatus::Active));
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::Abandoned).unwrap(),
            "\"abandoned\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let status: SessionStatus = serde_json::from_str("\"abandoned\"").unwrap();
        assert_eq!(status, SessionStatus::Abandoned);
    }
}
