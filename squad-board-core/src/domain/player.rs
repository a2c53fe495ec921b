use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a player record.
///
/// Server-assigned identifiers are positive. Before the remote store has
/// confirmed an insert, the client tracks the row under a negative
/// placeholder id that is unique only within the local session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    pub fn new(value: i64) -> Self {
        PlayerId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Whether this id is a client-side placeholder awaiting confirmation.
    pub fn is_placeholder(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team assignment - every player is on exactly one of these at all times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Unassigned,
    TeamA,
    TeamB,
}

/// Failed to parse a team from its wire name
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown team: {0}")]
pub struct TeamParseError(pub String);

impl Team {
    /// All teams, in display order
    pub const ALL: [Team; 3] = [Team::Unassigned, Team::TeamA, Team::TeamB];

    /// Wire name, also used as the drop-zone id in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Unassigned => "unassigned",
            Team::TeamA => "team_a",
            Team::TeamB => "team_b",
        }
    }

    /// Human-readable column label
    pub fn label(&self) -> &'static str {
        match self {
            Team::Unassigned => "Unassigned",
            Team::TeamA => "Team A",
            Team::TeamB => "Team B",
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        // New players always start out unassigned
        Team::Unassigned
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = TeamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unassigned" => Ok(Team::Unassigned),
            "team_a" => Ok(Team::TeamA),
            "team_b" => Ok(Team::TeamB),
            other => Err(TeamParseError(other.to_string())),
        }
    }
}

/// One player record, matching the remote table row format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    #[serde(default)]
    team: Team,
    created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(id: PlayerId, name: String, team: Team, created_at: DateTime<Utc>) -> Self {
        Player {
            id,
            name,
            team,
            created_at,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_placeholder()
    }

    pub(crate) fn set_team(&mut self, team: Team) {
        self.team = team;
    }

    pub(crate) fn confirm_identity(&mut self, id: PlayerId, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }
}
