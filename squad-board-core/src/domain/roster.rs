use crate::domain::{Player, PlayerId, Team};
use chrono::{DateTime, Utc};

/// Errors that can occur when mutating the roster
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Squad is limited to {cap} players")]
    Full { cap: usize },

    #[error("Player name is required")]
    EmptyName,

    #[error("Player not found: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Player {0} is already confirmed")]
    AlreadyConfirmed(PlayerId),
}

/// In-memory roster state: the full player list plus the client-side
/// bookkeeping for optimistic mutations.
///
/// Every operation here is a pure state transition. Network calls and the
/// pending → confirmed | reverted flow live in the store crate; the roster
/// only knows how to apply a transition and how to undo it.
///
/// Ordering invariant: players are kept newest-first (creation time
/// descending, matching the remote store's default ordering). Optimistic
/// placeholders go to the front.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
    cap: usize,
    next_placeholder_id: i64,
}

impl Roster {
    /// Default roster capacity (two teams of seven)
    pub const DEFAULT_CAP: usize = 14;

    pub fn new() -> Self {
        Self::with_cap(Self::DEFAULT_CAP)
    }

    /// Create a roster with a non-default capacity, e.g. 16 for two
    /// teams of eight.
    pub fn with_cap(cap: usize) -> Self {
        Roster {
            players: Vec::new(),
            cap,
            next_placeholder_id: -1,
        }
    }

    // ===== Queries =====

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_in(&self, team: Team) -> Vec<&Player> {
        self.players.iter().filter(|p| p.team() == team).collect()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.cap
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Header label, e.g. `3/14`
    pub fn count_label(&self) -> String {
        format!("{}/{}", self.players.len(), self.cap)
    }

    /// Resolve a drag-over / drop identifier to a candidate target team.
    ///
    /// The identifier is either a drop-zone id (a team wire name) or the id
    /// of another player's card, in which case the candidate is that
    /// player's current team. Anything else resolves to `None` and the
    /// hover or drop is ignored.
    pub fn resolve_drop_target(&self, over_id: &str) -> Option<Team> {
        if let Ok(team) = over_id.parse::<Team>() {
            return Some(team);
        }

        let id = over_id.parse::<i64>().ok().map(PlayerId::new)?;
        self.get(id).map(|p| p.team())
    }

    // ===== Optimistic transitions =====

    /// Validate and apply the optimistic half of an add: a placeholder
    /// player with a session-local negative id, prepended to the list.
    ///
    /// Rejected locally (callers must not issue a network call) when the
    /// roster is at capacity or the name is empty after trimming.
    pub fn add_placeholder(&mut self, name: &str) -> Result<PlayerId, RosterError> {
        if self.is_full() {
            return Err(RosterError::Full { cap: self.cap });
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }

        let id = PlayerId::new(self.next_placeholder_id);
        self.next_placeholder_id -= 1;

        tracing::debug!(%id, name, "adding placeholder player");
        self.players
            .insert(0, Player::new(id, name.to_string(), Team::Unassigned, Utc::now()));

        Ok(id)
    }

    /// Swap a placeholder's identity for the server-assigned one. The
    /// player keeps its position in the list.
    pub fn confirm_insert(
        &mut self,
        placeholder: PlayerId,
        id: PlayerId,
        created_at: DateTime<Utc>,
    ) -> Result<(), RosterError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == placeholder)
            .ok_or(RosterError::UnknownPlayer(placeholder))?;

        if !player.is_placeholder() {
            return Err(RosterError::AlreadyConfirmed(placeholder));
        }

        player.confirm_identity(id, created_at);
        Ok(())
    }

    /// Remove a player, returning the removed record so callers can report
    /// on it or restore it.
    pub fn remove(&mut self, id: PlayerId) -> Result<Player, RosterError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id() == id)
            .ok_or(RosterError::UnknownPlayer(id))?;

        Ok(self.players.remove(index))
    }

    /// Move a player to a team. Returns `Ok(false)` when the player is
    /// already on that team; callers skip the network call in that case.
    pub fn assign_team(&mut self, id: PlayerId, team: Team) -> Result<bool, RosterError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(RosterError::UnknownPlayer(id))?;

        if player.team() == team {
            return Ok(false);
        }

        player.set_team(team);
        Ok(true)
    }

    /// Replace the whole list with the authoritative server state, used to
    /// resynchronize after a failed write. Server ordering is trusted.
    pub fn replace_all(&mut self, players: Vec<Player>) {
        self.players = players;
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn confirmed(id: i64, name: &str, team: Team) -> Player {
        Player::new(
            PlayerId::new(id),
            name.to_string(),
            team,
            DateTime::from_timestamp(1_700_000_000 + id, 0).unwrap(),
        )
    }

    fn roster_with(players: Vec<Player>) -> Roster {
        let mut roster = Roster::new();
        roster.replace_all(players);
        roster
    }

    #[test]
    fn test_add_placeholder_prepends_unassigned() {
        let mut roster = roster_with(vec![confirmed(1, "Ali", Team::TeamA)]);

        let id = roster.add_placeholder("Mehmet").unwrap();

        assert_eq!(roster.len(), 2);
        let added = roster.players()[0].clone();
        assert_eq!(added.id(), id);
        assert_eq!(added.name(), "Mehmet");
        assert_eq!(added.team(), Team::Unassigned);
        assert!(added.is_placeholder());
    }

    #[test]
    fn test_add_placeholder_trims_name() {
        let mut roster = Roster::new();
        roster.add_placeholder("  Mehmet  ").unwrap();
        assert_eq!(roster.players()[0].name(), "Mehmet");
    }

    #[test]
    fn test_add_rejected_when_full() {
        let mut roster = roster_with(
            (1..=14)
                .map(|i| confirmed(i, &format!("Player {i}"), Team::Unassigned))
                .collect(),
        );

        let before = roster.clone();
        let result = roster.add_placeholder("Ahmet");

        assert_eq!(result, Err(RosterError::Full { cap: 14 }));
        assert_eq!(roster, before);
        assert_eq!(roster.len(), 14);
    }

    #[test]
    fn test_add_rejected_for_blank_names() {
        let mut roster = Roster::new();

        assert_eq!(roster.add_placeholder(""), Err(RosterError::EmptyName));
        assert_eq!(roster.add_placeholder("   "), Err(RosterError::EmptyName));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_placeholder_ids_are_session_unique() {
        let mut roster = Roster::new();
        let a = roster.add_placeholder("A").unwrap();
        let b = roster.add_placeholder("B").unwrap();

        assert_ne!(a, b);
        assert!(a.is_placeholder());
        assert!(b.is_placeholder());
    }

    #[test]
    fn test_confirm_insert_swaps_identity_in_place() {
        let mut roster = roster_with(vec![confirmed(1, "Ali", Team::TeamA)]);
        let placeholder = roster.add_placeholder("Mehmet").unwrap();

        let created_at = DateTime::from_timestamp(1_700_000_099, 0).unwrap();
        roster
            .confirm_insert(placeholder, PlayerId::new(42), created_at)
            .unwrap();

        let player = roster.players()[0].clone();
        assert_eq!(player.id(), PlayerId::new(42));
        assert_eq!(player.created_at(), created_at);
        assert_eq!(player.name(), "Mehmet");
        assert!(!player.is_placeholder());
    }

    #[test]
    fn test_confirm_insert_unknown_placeholder() {
        let mut roster = Roster::new();
        let result = roster.confirm_insert(
            PlayerId::new(-9),
            PlayerId::new(1),
            Utc::now(),
        );
        assert_eq!(result, Err(RosterError::UnknownPlayer(PlayerId::new(-9))));
    }

    #[test]
    fn test_confirm_insert_rejects_confirmed_player() {
        let mut roster = roster_with(vec![confirmed(5, "Ali", Team::TeamA)]);
        let result = roster.confirm_insert(PlayerId::new(5), PlayerId::new(6), Utc::now());
        assert_eq!(result, Err(RosterError::AlreadyConfirmed(PlayerId::new(5))));
    }

    #[test]
    fn test_remove_returns_player() {
        let mut roster = roster_with(vec![
            confirmed(2, "Veli", Team::TeamB),
            confirmed(1, "Ali", Team::TeamA),
        ]);

        let removed = roster.remove(PlayerId::new(2)).unwrap();

        assert_eq!(removed.name(), "Veli");
        assert_eq!(roster.len(), 1);
        assert!(roster.get(PlayerId::new(2)).is_none());
    }

    #[test]
    fn test_remove_unknown_player() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.remove(PlayerId::new(7)),
            Err(RosterError::UnknownPlayer(PlayerId::new(7)))
        );
    }

    #[test]
    fn test_assign_team_mutates() {
        let mut roster = roster_with(vec![confirmed(1, "Ali", Team::Unassigned)]);

        let changed = roster.assign_team(PlayerId::new(1), Team::TeamA).unwrap();

        assert!(changed);
        assert_eq!(roster.get(PlayerId::new(1)).unwrap().team(), Team::TeamA);
    }

    #[test]
    fn test_assign_same_team_is_noop() {
        let mut roster = roster_with(vec![confirmed(1, "Ali", Team::TeamA)]);
        let before = roster.clone();

        let changed = roster.assign_team(PlayerId::new(1), Team::TeamA).unwrap();

        assert!(!changed);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_assign_unknown_player() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.assign_team(PlayerId::new(3), Team::TeamB),
            Err(RosterError::UnknownPlayer(PlayerId::new(3)))
        );
    }

    #[test]
    fn test_resolve_drop_zone_ids() {
        let roster = Roster::new();

        assert_eq!(roster.resolve_drop_target("unassigned"), Some(Team::Unassigned));
        assert_eq!(roster.resolve_drop_target("team_a"), Some(Team::TeamA));
        assert_eq!(roster.resolve_drop_target("team_b"), Some(Team::TeamB));
    }

    #[test]
    fn test_resolve_sibling_card_to_its_team() {
        // Dropping on another player's card targets that card's team,
        // never a literal "player" team.
        let roster = roster_with(vec![confirmed(9, "Ali", Team::TeamB)]);
        assert_eq!(roster.resolve_drop_target("9"), Some(Team::TeamB));
    }

    #[test]
    fn test_resolve_placeholder_card() {
        let mut roster = Roster::new();
        let id = roster.add_placeholder("Mehmet").unwrap();
        assert_eq!(
            roster.resolve_drop_target(&id.to_string()),
            Some(Team::Unassigned)
        );
    }

    #[test]
    fn test_resolve_unknown_ids() {
        let roster = roster_with(vec![confirmed(1, "Ali", Team::TeamA)]);

        assert_eq!(roster.resolve_drop_target("99"), None);
        assert_eq!(roster.resolve_drop_target("team_c"), None);
        assert_eq!(roster.resolve_drop_target(""), None);
    }

    #[test]
    fn test_partition_by_team() {
        let roster = roster_with(vec![
            confirmed(3, "Can", Team::Unassigned),
            confirmed(2, "Veli", Team::TeamB),
            confirmed(1, "Ali", Team::TeamB),
        ]);

        assert_eq!(roster.players_in(Team::Unassigned).len(), 1);
        assert_eq!(roster.players_in(Team::TeamA).len(), 0);
        assert_eq!(roster.players_in(Team::TeamB).len(), 2);
    }

    #[test]
    fn test_count_label() {
        let mut roster = Roster::new();
        assert_eq!(roster.count_label(), "0/14");

        roster.add_placeholder("Mehmet").unwrap();
        assert_eq!(roster.count_label(), "1/14");
    }

    #[test]
    fn test_custom_cap_variant() {
        let mut roster = Roster::with_cap(16);
        for i in 0..16 {
            roster.add_placeholder(&format!("Player {i}")).unwrap();
        }

        assert!(roster.is_full());
        assert_eq!(roster.count_label(), "16/16");
        assert_eq!(
            roster.add_placeholder("One more"),
            Err(RosterError::Full { cap: 16 })
        );
    }

    #[test]
    fn test_replace_all_resynchronizes() {
        let mut roster = Roster::new();
        roster.add_placeholder("Optimistic").unwrap();

        let authoritative = vec![confirmed(2, "Veli", Team::TeamA), confirmed(1, "Ali", Team::TeamB)];
        roster.replace_all(authoritative.clone());

        assert_eq!(roster.players(), authoritative.as_slice());
    }
}
