use crate::drag::DragState;
use squad_board_core::{Player, PlayerId, Roster, Team};
use yew::prelude::*;

/// Board state and actions, provided by
/// [`RosterProvider`](crate::providers::RosterProvider).
#[derive(Clone, Debug)]
pub struct RosterContext {
    pub roster: Roster,
    pub error: Option<String>,
    /// True while an add is awaiting confirmation from the store.
    pub add_pending: bool,
    pub drag: Option<DragState>,
    /// Team currently hovered during an active drag.
    pub hover_team: Option<Team>,

    pub add_player: Callback<String>,
    pub delete_player: Callback<PlayerId>,
    pub on_pointer_down: Callback<PointerEvent>,
    pub on_pointer_move: Callback<PointerEvent>,
    pub on_pointer_up: Callback<PointerEvent>,
    pub on_pointer_cancel: Callback<PointerEvent>,
}

impl RosterContext {
    /// The player being dragged, once the drag has activated.
    pub fn active_player(&self) -> Option<&Player> {
        let drag = self.drag.as_ref().filter(|d| d.active)?;
        self.roster.get(drag.player_id)
    }
}

// Callbacks are stable for the provider's lifetime; comparing the data
// fields is what decides re-renders.
impl PartialEq for RosterContext {
    fn eq(&self, other: &Self) -> bool {
        self.roster == other.roster
            && self.error == other.error
            && self.add_pending == other.add_pending
            && self.drag == other.drag
            && self.hover_team == other.hover_team
    }
}

#[hook]
pub fn use_roster() -> RosterContext {
    use_context::<RosterContext>().expect("use_roster must be used within a RosterProvider")
}
