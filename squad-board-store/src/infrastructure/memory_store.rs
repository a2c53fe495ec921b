use crate::error::{Result, StoreError};
use crate::infrastructure::PlayerStore;
use async_trait::async_trait;
use chrono::DateTime;
use futures::channel::oneshot;
use squad_board_core::{Player, PlayerId, Team};
use std::sync::{Arc, Mutex};

/// Per-operation request counters, so tests can assert that a rejected
/// operation never reached the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub insert: usize,
    pub update: usize,
    pub delete: usize,
}

#[derive(Default)]
struct Failures {
    list: bool,
    insert: bool,
    update: bool,
    delete: bool,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Player>,
    next_id: i64,
    calls: CallCounts,
    fail: Failures,
    insert_gate: Option<oneshot::Receiver<()>>,
}

/// In-memory player table that simulates the remote store, with failure
/// injection. Clones share state, so a test can hold one handle while the
/// service under test holds another.
#[derive(Clone, Default)]
pub struct MemoryPlayerStore {
    inner: Arc<Mutex<Inner>>,
}

const CREATED_AT_EPOCH: i64 = 1_700_000_000;

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_identity(inner: &mut Inner) -> (PlayerId, DateTime<chrono::Utc>) {
        inner.next_id += 1;
        let id = inner.next_id;
        // Synthetic timestamps: one second apart, so creation order and
        // timestamp order always agree.
        let created_at = DateTime::from_timestamp(CREATED_AT_EPOCH + id, 0)
            .unwrap_or_default();
        (PlayerId::new(id), created_at)
    }

    /// Insert a row directly, bypassing counters and failure flags.
    pub fn seed(&self, name: &str, team: Team) -> Player {
        let mut inner = self.inner.lock().unwrap();
        let (id, created_at) = Self::next_identity(&mut inner);
        let player = Player::new(id, name.to_string(), team, created_at);
        inner.rows.push(player.clone());
        player
    }

    /// Park the next insert until the returned sender fires, so a test can
    /// interleave other operations while an insert is in flight.
    pub fn hold_insert(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.inner.lock().unwrap().insert_gate = Some(gate);
        release
    }

    pub fn fail_list(&self, fail: bool) {
        self.inner.lock().unwrap().fail.list = fail;
    }

    pub fn fail_insert(&self, fail: bool) {
        self.inner.lock().unwrap().fail.insert = fail;
    }

    pub fn fail_update(&self, fail: bool) {
        self.inner.lock().unwrap().fail.update = fail;
    }

    pub fn fail_delete(&self, fail: bool) {
        self.inner.lock().unwrap().fail.delete = fail;
    }

    pub fn counts(&self) -> CallCounts {
        self.inner.lock().unwrap().calls
    }

    /// Current table contents in storage order.
    pub fn rows(&self) -> Vec<Player> {
        self.inner.lock().unwrap().rows.clone()
    }
}

#[async_trait(?Send)]
impl PlayerStore for MemoryPlayerStore {
    async fn list(&self) -> Result<Vec<Player>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.list += 1;

        if inner.fail.list {
            return Err(StoreError::Transport("simulated list failure".to_string()));
        }

        let mut players = inner.rows.clone();
        players.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then(b.id().cmp(&a.id()))
        });
        Ok(players)
    }

    async fn insert(&self, name: &str) -> Result<Player> {
        let gate = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.insert += 1;

            if inner.fail.insert {
                return Err(StoreError::Transport(
                    "simulated insert failure".to_string(),
                ));
            }
            inner.insert_gate.take()
        };
        // The lock is released while parked
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let mut inner = self.inner.lock().unwrap();
        let (id, created_at) = Self::next_identity(&mut inner);
        let player = Player::new(id, name.to_string(), Team::Unassigned, created_at);
        inner.rows.push(player.clone());
        Ok(player)
    }

    async fn update_team(&self, id: PlayerId, team: Team) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.update += 1;

        if inner.fail.update {
            return Err(StoreError::Transport(
                "simulated update failure".to_string(),
            ));
        }

        let index = inner
            .rows
            .iter()
            .position(|p| p.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        let row = inner.rows.remove(index);
        let updated = Player::new(row.id(), row.name().to_string(), team, row.created_at());
        inner.rows.insert(index, updated);
        Ok(())
    }

    async fn delete(&self, id: PlayerId) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.delete += 1;

        if inner.fail.delete {
            return Err(StoreError::Transport(
                "simulated delete failure".to_string(),
            ));
        }

        let index = inner
            .rows
            .iter()
            .position(|p| p.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        inner.rows.remove(index);
        Ok(())
    }
}
