//! Input and output record types.
//!
//! Field declaration order on every output record is the column order of the
//! emitted table. [`Table::COLUMNS`] spells the same order out for consumers
//! that need it without serializing.

use serde::{Deserialize, Serialize};

/// Columns the input event log must provide.
pub const EVENT_COLUMNS: &[&str] = &[
    "match_id",
    "match_name",
    "team_id",
    "team_name",
    "player_id",
    "player_name",
    "is_home",
    "goals_scored",
    "minutes_played",
];

/// A named output table with a fixed column order.
pub trait Table {
    /// File stem used when the table is written out (e.g. `"matches"`).
    const NAME: &'static str;
    /// Column names in output order.
    const COLUMNS: &'static [&'static str];
}

/// One player's participation in one match for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub match_id: i64,
    pub match_name: String,
    pub team_id: i64,
    pub team_name: String,
    pub player_id: i64,
    pub player_name: String,
    pub is_home: bool,
    pub goals_scored: i64,
    pub minutes_played: i64,
}

impl EventRecord {
    pub fn side(&self) -> Side {
        Side::from_is_home(self.is_home)
    }
}

/// Home or away side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Both sides in output column order.
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    pub fn from_is_home(is_home: bool) -> Self {
        if is_home { Side::Home } else { Side::Away }
    }

    pub fn is_home(self) -> bool {
        matches!(self, Side::Home)
    }

    /// Column prefix, e.g. `home` in `home_team_id`.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row per distinct match, with home and away data pivoted into columns.
///
/// A side with no participating rows leaves its team and goal columns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: i64,
    pub match_name: String,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub home_goals: Option<i64>,
    pub away_goals: Option<i64>,
}

impl MatchRecord {
    pub fn team_id(&self, side: Side) -> Option<i64> {
        match side {
            Side::Home => self.home_team_id,
            Side::Away => self.away_team_id,
        }
    }

    pub fn goals(&self, side: Side) -> Option<i64> {
        match side {
            Side::Home => self.home_goals,
            Side::Away => self.away_goals,
        }
    }
}

impl Table for MatchRecord {
    const NAME: &'static str = "matches";
    const COLUMNS: &'static [&'static str] = &[
        "match_id",
        "match_name",
        "home_team_id",
        "away_team_id",
        "home_goals",
        "away_goals",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: i64,
    pub team_name: String,
}

impl Table for TeamRecord {
    const NAME: &'static str = "teams";
    const COLUMNS: &'static [&'static str] = &["team_id", "team_name"];
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: i64,
    pub team_id: i64,
    pub player_name: String,
}

impl Table for PlayerRecord {
    const NAME: &'static str = "players";
    const COLUMNS: &'static [&'static str] = &["player_id", "team_id", "player_name"];
}

/// Per-player per-match aggregate.
///
/// `frac_total_goals` is `NaN` when the match had no goals at all; it is
/// written as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRecord {
    pub stat_id: usize,
    pub player_id: i64,
    pub match_id: i64,
    pub goals_scored: i64,
    pub minutes_played: i64,
    pub frac_minutes_played: f64,
    pub frac_total_goals: f64,
}

impl Table for StatRecord {
    const NAME: &'static str = "stats";
    const COLUMNS: &'static [&'static str] = &[
        "stat_id",
        "player_id",
        "match_id",
        "goals_scored",
        "minutes_played",
        "frac_minutes_played",
        "frac_total_goals",
    ];
}
