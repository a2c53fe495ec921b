use squad_board_core::{Player, Team};
use squad_board_store::{MemoryPlayerStore, RosterService};
use std::future::Future;

/// A service wired to a shared in-memory store, so tests can inject
/// failures and inspect the table while exercising the service.
pub struct ServiceFixture {
    pub store: MemoryPlayerStore,
    pub service: RosterService<MemoryPlayerStore>,
}

impl ServiceFixture {
    pub fn new() -> Self {
        let store = MemoryPlayerStore::new();
        let service = RosterService::new(store.clone());
        Self { store, service }
    }

    /// Seed the remote table and load it into the roster.
    pub fn with_players(players: &[(&str, Team)]) -> Self {
        let fixture = Self::new();
        for (name, team) in players {
            fixture.store.seed(name, *team);
        }
        run(fixture.service.refresh()).expect("initial refresh");
        fixture
    }

    /// Look up a seeded player's record by name.
    pub fn player(&self, name: &str) -> Player {
        self.service
            .roster()
            .players()
            .iter()
            .find(|p| p.name() == name)
            .cloned()
            .unwrap_or_else(|| panic!("player {name} not in roster"))
    }
}

/// Every future in this crate is `?Send`; a plain single-threaded executor
/// is all the tests need.
pub fn run<F: Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}
