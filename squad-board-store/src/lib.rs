//! Record store access and optimistic-update orchestration for Squad Board.
//!
//! The [`PlayerStore`] trait is the four-operation contract against the
//! remote player table; [`RestPlayerStore`] speaks PostgREST conventions
//! over HTTP, [`MemoryPlayerStore`] backs tests. [`RosterService`] layers
//! the optimistic pending → confirmed | reverted flow on top.

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;

pub use application::{RosterService, ServiceError};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use infrastructure::{CallCounts, MemoryPlayerStore, PlayerStore, RestPlayerStore};
