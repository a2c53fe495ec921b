//! # Squad Board Yew Components
//!
//! Yew UI for the drag-and-drop team picker: a provider owning the roster
//! service, a context hook, and the board components.

pub mod app;
pub mod components;
pub mod drag;
pub mod hooks;
pub mod pages;
pub mod providers;

// Re-exports for convenience
pub use app::App;
pub use components::{AddPlayerForm, DragOverlay, ErrorBanner, PlayerCard, TeamColumn};
pub use hooks::{use_roster, RosterContext};
pub use pages::BoardScreen;
pub use providers::{RosterProvider, RosterProviderProps};
