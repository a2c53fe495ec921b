//! Provider owning the roster service and the pointer-drag lifecycle.

use crate::drag::{self, DragState};
use crate::hooks::RosterContext;
use squad_board_core::{PlayerId, Roster, Team};
use squad_board_store::{RestPlayerStore, RosterService, StoreConfig};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RosterProviderProps {
    /// Maximum roster size.
    #[prop_or(Roster::DEFAULT_CAP)]
    pub cap: usize,
    #[prop_or_default]
    pub children: Children,
}

/// Holds the [`RosterService`] for the app, mirrors its snapshots into
/// render state, and translates pointer events into drag state and team
/// assignments. Children consume the result through
/// [`use_roster`](crate::hooks::use_roster).
#[function_component(RosterProvider)]
pub fn roster_provider(props: &RosterProviderProps) -> Html {
    let service = use_memo(props.cap, |cap| {
        RosterService::with_cap(RestPlayerStore::new(StoreConfig::new()), *cap)
    });

    let roster = use_state(|| Roster::with_cap(props.cap));
    let error = use_state(|| Option::<String>::None);
    let add_pending = use_state(|| false);
    // The authoritative drag lives in a ref so fast pointer-move streams
    // never read a stale render's copy; the state handle mirrors it for
    // rendering.
    let drag_ref = use_mut_ref(|| Option::<DragState>::None);
    let drag = use_state(|| Option::<DragState>::None);
    let hover_team = use_state(|| Option::<Team>::None);

    {
        let service = service.clone();
        let roster = roster.clone();
        let error = error.clone();
        use_effect_with(props.cap, move |_| {
            {
                let roster = roster.clone();
                service.set_observer(move |snapshot| roster.set(snapshot));
            }
            spawn_local(async move {
                if let Err(err) = service.refresh().await {
                    tracing::error!(%err, "initial load failed");
                    error.set(Some(err.to_string()));
                }
            });
        });
    }

    let add_player = {
        let service = service.clone();
        let error = error.clone();
        let add_pending = add_pending.clone();
        Callback::from(move |name: String| {
            let service = service.clone();
            let error = error.clone();
            let add_pending = add_pending.clone();
            error.set(None);
            add_pending.set(true);
            spawn_local(async move {
                if let Err(err) = service.add_player(&name).await {
                    error.set(Some(err.to_string()));
                }
                add_pending.set(false);
            });
        })
    };

    let delete_player = {
        let service = service.clone();
        let error = error.clone();
        Callback::from(move |id: PlayerId| {
            let service = service.clone();
            let error = error.clone();
            error.set(None);
            spawn_local(async move {
                if let Err(err) = service.delete_player(id).await {
                    error.set(Some(err.to_string()));
                }
            });
        })
    };

    let on_pointer_down = {
        let service = service.clone();
        let drag_ref = drag_ref.clone();
        let drag = drag.clone();
        Callback::from(move |event: PointerEvent| {
            if drag_ref.borrow().is_some() {
                return;
            }
            let Some(player_id) = drag::drag_source(event.target()) else {
                return;
            };
            if service.roster().get(player_id).is_none() {
                return;
            }

            event.prevent_default();
            drag::capture_pointer(event.target(), event.pointer_id());
            let state = DragState::begin(
                event.pointer_id(),
                player_id,
                event.client_x() as f64,
                event.client_y() as f64,
            );
            *drag_ref.borrow_mut() = Some(state.clone());
            drag.set(Some(state));
        })
    };

    let on_pointer_move = {
        let service = service.clone();
        let drag_ref = drag_ref.clone();
        let drag = drag.clone();
        let hover_team = hover_team.clone();
        Callback::from(move |event: PointerEvent| {
            let Some(state) = drag_ref.borrow().clone() else {
                return;
            };
            if state.pointer_id != event.pointer_id() {
                return;
            }

            event.prevent_default();
            let was_active = state.active;
            let next = state.moved_to(event.client_x() as f64, event.client_y() as f64);
            if next.active && !was_active {
                drag::lock_body_scroll(true);
            }

            let hover = if next.active {
                drag::over_id_at(next.current_x, next.current_y)
                    .and_then(|over_id| service.resolve_drop_target(&over_id))
            } else {
                None
            };

            *drag_ref.borrow_mut() = Some(next.clone());
            drag.set(Some(next));
            hover_team.set(hover);
        })
    };

    let on_pointer_up = {
        let service = service.clone();
        let error = error.clone();
        let drag_ref = drag_ref.clone();
        let drag = drag.clone();
        let hover_team = hover_team.clone();
        Callback::from(move |event: PointerEvent| {
            let matches = drag_ref
                .borrow()
                .as_ref()
                .is_some_and(|s| s.pointer_id == event.pointer_id());
            if !matches {
                return;
            }
            let Some(state) = drag_ref.borrow_mut().take() else {
                return;
            };

            drag::release_pointer(event.target(), event.pointer_id());
            drag::lock_body_scroll(false);
            drag.set(None);
            hover_team.set(None);

            // A press that never activated is a click, not a drop.
            if !state.active {
                return;
            }

            let x = event.client_x() as f64;
            let y = event.client_y() as f64;
            let Some(team) = drag::over_id_at(x, y)
                .and_then(|over_id| service.resolve_drop_target(&over_id))
            else {
                return;
            };

            let service = service.clone();
            let error = error.clone();
            error.set(None);
            spawn_local(async move {
                if let Err(err) = service.assign_team(state.player_id, team).await {
                    error.set(Some(err.to_string()));
                }
            });
        })
    };

    let on_pointer_cancel = {
        let drag_ref = drag_ref.clone();
        let drag = drag.clone();
        let hover_team = hover_team.clone();
        Callback::from(move |event: PointerEvent| {
            let matches = drag_ref
                .borrow()
                .as_ref()
                .is_some_and(|s| s.pointer_id == event.pointer_id());
            if !matches {
                return;
            }
            // Abort: discard the drag without touching any assignment.
            *drag_ref.borrow_mut() = None;
            drag::release_pointer(event.target(), event.pointer_id());
            drag::lock_body_scroll(false);
            drag.set(None);
            hover_team.set(None);
        })
    };

    let context = RosterContext {
        roster: (*roster).clone(),
        error: (*error).clone(),
        add_pending: *add_pending,
        drag: (*drag).clone(),
        hover_team: *hover_team,
        add_player,
        delete_player,
        on_pointer_down,
        on_pointer_move,
        on_pointer_up,
        on_pointer_cancel,
    };

    html! {
        <ContextProvider<RosterContext> context={context}>
            { props.children.clone() }
        </ContextProvider<RosterContext>>
    }
}
