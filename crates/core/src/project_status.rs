//! Project status values and the assignee-driven auto-transition.
//!
//! A project moves `available -> in_progress` when someone is assigned and
//! back to `available` when the assignee is cleared. `waiting` and
//! `completed` are only ever set explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Available,
    InProgress,
    Waiting,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Available,
        ProjectStatus::InProgress,
        ProjectStatus::Waiting,
        ProjectStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Available => "available",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Waiting => "waiting",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("Unknown project status: '{s}'")))
    }
}

/// Compute the status a project should have after an update.
///
/// * `current` - status stored before the update.
/// * `requested` - status explicitly present in the update, if any. An
///   explicit status always wins.
/// * `assignee_name` - new assignee name when the update touches it.
///   An empty or whitespace-only name clears the assignee.
pub fn derive_status(
    current: ProjectStatus,
    requested: Option<ProjectStatus>,
    assignee_name: Option<&str>,
) -> ProjectStatus {
    if let Some(explicit) = requested {
        return explicit;
    }

    let Some(name) = assignee_name else {
        return current;
    };

    match (current, name.trim().is_empty()) {
        (ProjectStatus::Available, false) => ProjectStatus::InProgress,
        (ProjectStatus::InProgress, true) => ProjectStatus::Available,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_available_project_starts_it() {
        let next = derive_status(ProjectStatus::Available, None, Some("Jane"));
        assert_eq!(next, ProjectStatus::InProgress);
    }

    #[test]
    fn clearing_assignee_makes_project_available_again() {
        let next = derive_status(ProjectStatus::InProgress, None, Some(""));
        assert_eq!(next, ProjectStatus::Available);

        let next = derive_status(ProjectStatus::InProgress, None, Some("   "));
        assert_eq!(next, ProjectStatus::Available);
    }

    #[test]
    fn waiting_and_completed_are_never_overridden() {
        for status in [ProjectStatus::Waiting, ProjectStatus::Completed] {
            assert_eq!(derive_status(status, None, Some("Jane")), status);
            assert_eq!(derive_status(status, None, Some("")), status);
        }
    }

    #[test]
    fn explicit_status_wins_over_assignee_change() {
        let next = derive_status(
            ProjectStatus::Available,
            Some(ProjectStatus::Completed),
            Some("Jane"),
        );
        assert_eq!(next, ProjectStatus::Completed);
    }

    #[test]
    fn untouched_assignee_keeps_status() {
        assert_eq!(
            derive_status(ProjectStatus::InProgress, None, None),
            ProjectStatus::InProgress
        );
    }

    #[test]
    fn parse_round_trips_every_status() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), status);
        }
        assert!("done".parse::<ProjectStatus>().is_err());
    }
}
