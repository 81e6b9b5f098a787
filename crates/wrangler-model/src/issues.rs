//! Functional-dependency and side-cardinality issues found in an event log.

use serde::{Deserialize, Serialize};

use crate::records::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyIssueKind {
    /// A `match_id` appears with more than one `match_name`.
    MatchName,
    /// A `team_id` appears with more than one `team_name`.
    TeamName,
    /// A `player_id` appears with more than one `player_name`.
    PlayerName,
    /// A `(player_id, match_id)` pair appears with more than one `team_id`.
    PlayerTeam,
    /// A match does not have exactly one home team.
    HomeSide,
    /// A match does not have exactly one away team.
    AwaySide,
}

impl DependencyIssueKind {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Home => Self::HomeSide,
            Side::Away => Self::AwaySide,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MatchName => "match_name",
            Self::TeamName => "team_name",
            Self::PlayerName => "player_name",
            Self::PlayerTeam => "player_team",
            Self::HomeSide => "home_side",
            Self::AwaySide => "away_side",
        }
    }
}

/// A single offending key and the distinct values seen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyIssue {
    pub kind: DependencyIssueKind,
    /// Offending key, e.g. `"12"` or `"player 10, match 3"`.
    pub key: String,
    /// Distinct values observed, in first-seen order. Empty for a missing side.
    pub values: Vec<String>,
}

impl DependencyIssue {
    pub fn message(&self) -> String {
        match self.kind {
            DependencyIssueKind::HomeSide | DependencyIssueKind::AwaySide
                if self.values.is_empty() =>
            {
                format!("{} has no team on this side", self.key)
            }
            _ => format!(
                "{} maps to {} distinct values: {}",
                self.key,
                self.values.len(),
                self.values.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReport {
    pub issues: Vec<DependencyIssue>,
}

impl DependencyReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, kind: DependencyIssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    /// Offending keys for one kind of issue.
    pub fn keys(&self, kind: DependencyIssueKind) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|issue| issue.kind == kind)
            .map(|issue| issue.key.as_str())
            .collect()
    }
}
