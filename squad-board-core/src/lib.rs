pub mod domain;

pub use domain::{Player, PlayerId, Roster, RosterError, Team, TeamParseError};
