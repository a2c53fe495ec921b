use crate::error::StoreError;
use crate::infrastructure::PlayerStore;
use squad_board_core::{Player, PlayerId, Roster, RosterError, Team};
use std::cell::RefCell;

/// What went wrong with a roster operation, in user-facing terms.
///
/// Validation errors never reached the store; store errors mean the
/// optimistic mutation has already been rolled back (add) or the roster
/// resynchronized from the store (delete, reassign).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] RosterError),

    #[error("Failed to load players")]
    Load(#[source] StoreError),

    #[error("Failed to add player")]
    Add(#[source] StoreError),

    #[error("Failed to remove player")]
    Remove(#[source] StoreError),

    #[error("Failed to move player")]
    Move(#[source] StoreError),
}

/// Owns the roster state and a player store, and runs every operation as
/// an explicit pending → confirmed | reverted transition: the local
/// mutation is applied first, the store call follows, and a failure either
/// undoes the specific mutation (add) or refetches the authoritative list
/// (delete, reassign).
///
/// `RefCell` borrows are taken and released around each store call, never
/// across an `await`, so overlapping UI-triggered operations cannot panic.
/// In-flight calls are not cancelled; late responses are applied in order
/// of resolution.
pub struct RosterService<S> {
    roster: RefCell<Roster>,
    store: S,
    observer: RefCell<Option<Box<dyn Fn(Roster)>>>,
}

impl<S: PlayerStore> RosterService<S> {
    pub fn new(store: S) -> Self {
        Self::with_cap(store, Roster::DEFAULT_CAP)
    }

    pub fn with_cap(store: S, cap: usize) -> Self {
        Self {
            roster: RefCell::new(Roster::with_cap(cap)),
            store,
            observer: RefCell::new(None),
        }
    }

    /// Register a callback invoked with a fresh snapshot after every
    /// local state change, optimistic or authoritative. The UI mirrors
    /// these snapshots into its render state.
    pub fn set_observer(&self, observer: impl Fn(Roster) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    fn notify(&self) {
        let snapshot = self.roster.borrow().clone();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(snapshot);
        }
    }

    /// Snapshot of the current roster state.
    pub fn roster(&self) -> Roster {
        self.roster.borrow().clone()
    }

    /// See [`Roster::resolve_drop_target`].
    pub fn resolve_drop_target(&self, over_id: &str) -> Option<Team> {
        self.roster.borrow().resolve_drop_target(over_id)
    }

    /// Replace local state with the authoritative list from the store.
    /// On failure the roster stays as last known.
    pub async fn refresh(&self) -> Result<(), ServiceError> {
        let players = self.store.list().await.map_err(ServiceError::Load)?;
        self.roster.borrow_mut().replace_all(players);
        self.notify();
        Ok(())
    }

    /// Add a player. Capacity and name validation happen locally and
    /// reject without a store call; otherwise a placeholder is shown
    /// immediately and swapped for the server identity on success.
    pub async fn add_player(&self, name: &str) -> Result<Player, ServiceError> {
        let placeholder = self.roster.borrow_mut().add_placeholder(name)?;
        self.notify();

        match self.store.insert(name.trim()).await {
            Ok(stored) => {
                tracing::debug!(%placeholder, id = %stored.id(), "insert confirmed");
                let confirmed = self.roster.borrow_mut().confirm_insert(
                    placeholder,
                    stored.id(),
                    stored.created_at(),
                );
                match confirmed {
                    Ok(()) => self.notify(),
                    // The placeholder was removed while the insert was in
                    // flight; the stored row only exists remotely, so pull
                    // the authoritative list instead of reporting an error.
                    Err(err) => {
                        tracing::warn!(%placeholder, %err, "placeholder gone, resynchronizing");
                        let _ = self.refresh().await;
                    }
                }
                Ok(stored)
            }
            Err(err) => {
                tracing::warn!(%placeholder, %err, "insert failed, removing placeholder");
                let _ = self.roster.borrow_mut().remove(placeholder);
                self.notify();
                Err(ServiceError::Add(err))
            }
        }
    }

    /// Delete a player. Removed locally right away; a failed delete
    /// refetches the list so the player reappears.
    pub async fn delete_player(&self, id: PlayerId) -> Result<(), ServiceError> {
        self.roster.borrow_mut().remove(id)?;
        self.notify();

        match self.store.delete(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(%id, %err, "delete failed, resynchronizing");
                let _ = self.refresh().await;
                Err(ServiceError::Remove(err))
            }
        }
    }

    /// Move a player to a team. A same-team drop is a no-op and issues no
    /// store call. A failed update refetches the list, restoring the
    /// pre-drag assignment.
    pub async fn assign_team(&self, id: PlayerId, team: Team) -> Result<(), ServiceError> {
        let changed = self.roster.borrow_mut().assign_team(id, team)?;
        if !changed {
            tracing::debug!(%id, %team, "player already on target team");
            return Ok(());
        }
        self.notify();

        match self.store.update_team(id, team).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(%id, %team, %err, "reassign failed, resynchronizing");
                let _ = self.refresh().await;
                Err(ServiceError::Move(err))
            }
        }
    }
}
