mod player;
mod roster;

pub use player::{Player, PlayerId, Team, TeamParseError};
pub use roster::{Roster, RosterError};
