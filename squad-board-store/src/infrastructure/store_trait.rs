use crate::error::Result;
use async_trait::async_trait;
use squad_board_core::{Player, PlayerId, Team};

/// The four-operation contract against the remote player table
/// (allows an in-memory store in tests).
///
/// All operations are single-record round-trips; there is no batching and
/// no transaction discipline. `?Send` because the browser's futures are
/// not `Send`.
#[async_trait(?Send)]
pub trait PlayerStore {
    /// All players, ordered by creation time descending.
    async fn list(&self) -> Result<Vec<Player>>;

    /// Create one player with team `unassigned`; returns the stored row
    /// with the server-assigned id and timestamp.
    async fn insert(&self, name: &str) -> Result<Player>;

    /// Set the team assignment for one player.
    async fn update_team(&self, id: PlayerId, team: Team) -> Result<()>;

    /// Remove one player.
    async fn delete(&self, id: PlayerId) -> Result<()>;
}
