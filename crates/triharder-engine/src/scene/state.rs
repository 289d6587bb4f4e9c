use core::fmt;

use crate::outcome::Outcome;

use super::{SceneError, SceneResult};

/// Lifecycle state of a scene.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SceneState {
    /// Never activated, or deactivated.
    #[default]
    Inactive,
    Active,
}

impl fmt::Display for SceneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
        })
    }
}

/// State machine helper embedded in concrete scenes.
///
/// Transition rules:
/// - `activate`: Inactive -> Active, only if the activation body succeeds
/// - `deactivate`: Active -> Inactive, only if the deactivation body succeeds
/// - every other operation requires Active and never changes the state
///
/// Out-of-order calls are reported as `InvalidStateTransition`; the body is not
/// run in that case.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Lifecycle {
    state: SceneState,
}

impl Lifecycle {
    #[inline]
    pub const fn new() -> Self {
        Self { state: SceneState::Inactive }
    }

    #[inline]
    pub const fn state(&self) -> SceneState {
        self.state
    }

    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SceneState::Active)
    }

    /// Succeeds only while Active; `operation` names the caller in the error.
    pub fn guard_active(&self, operation: &str) -> SceneResult {
        if self.is_active() {
            Outcome::success(())
        } else {
            Outcome::failure(SceneError::invalid_transition_for(operation, self.state))
        }
    }

    /// Runs `body` and moves to Active if it succeeds.
    pub fn activate_with<F>(&mut self, body: F) -> SceneResult
    where
        F: FnOnce() -> SceneResult,
    {
        if self.is_active() {
            return Outcome::failure(SceneError::invalid_transition_for("activate", self.state));
        }

        let outcome = body();
        if outcome.is_success() {
            self.state = SceneState::Active;
        }
        outcome
    }

    /// Runs `body` and moves to Inactive if it succeeds.
    pub fn deactivate_with<F>(&mut self, body: F) -> SceneResult
    where
        F: FnOnce() -> SceneResult,
    {
        if !self.is_active() {
            return Outcome::failure(SceneError::invalid_transition_for("deactivate", self.state));
        }

        let outcome = body();
        if outcome.is_success() {
            self.state = SceneState::Inactive;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        let lc = Lifecycle::new();
        assert_eq!(lc.state(), SceneState::Inactive);
        assert_eq!(Lifecycle::default(), lc);
    }

    #[test]
    fn guard_rejects_inactive() {
        let lc = Lifecycle::new();
        let err = lc.guard_active("update").unwrap_error();
        assert!(matches!(err, SceneError::InvalidStateTransition(_)));
    }

    #[test]
    fn failed_activation_keeps_inactive() {
        let mut lc = Lifecycle::new();
        let out = lc.activate_with(|| Outcome::failure(SceneError::VertexLayout));

        assert_eq!(out, Outcome::failure(SceneError::VertexLayout));
        assert_eq!(lc.state(), SceneState::Inactive);
    }

    #[test]
    fn activate_then_deactivate() {
        let mut lc = Lifecycle::new();
        assert!(lc.activate_with(|| Outcome::success(())).is_success());
        assert!(lc.guard_active("draw").is_success());
        assert!(lc.deactivate_with(|| Outcome::success(())).is_success());
        assert_eq!(lc.state(), SceneState::Inactive);
    }

    #[test]
    fn double_activate_is_rejected_without_running_body() {
        let mut lc = Lifecycle::new();
        let _ = lc.activate_with(|| Outcome::success(()));

        let mut ran = false;
        let out = lc.activate_with(|| {
            ran = true;
            Outcome::success(())
        });

        assert!(out.is_failure());
        assert!(!ran);
        assert!(lc.is_active());
    }

    #[test]
    fn deactivate_while_inactive_is_rejected() {
        let mut lc = Lifecycle::new();
        let err = lc.deactivate_with(|| Outcome::success(())).unwrap_error();
        assert_eq!(err.describe(), "cannot deactivate a scene that is inactive");
    }

    #[test]
    fn failed_deactivation_keeps_active() {
        let mut lc = Lifecycle::new();
        let _ = lc.activate_with(|| Outcome::success(()));
        let out = lc.deactivate_with(|| Outcome::failure(SceneError::generic("busy")));

        assert!(out.is_failure());
        assert!(lc.is_active());
    }
}
