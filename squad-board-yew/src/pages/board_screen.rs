use crate::components::{AddPlayerForm, DragOverlay, ErrorBanner, TeamColumn};
use crate::hooks::use_roster;
use gloo_timers::callback::Timeout;
use squad_board_core::Team;
use yew::prelude::*;

/// The board: header with count and share link, add form, one column per
/// team, and the drag overlay. Pointer handlers sit on the container so a
/// drag keeps tracking even when the pointer leaves the source card.
#[function_component(BoardScreen)]
pub fn board_screen() -> Html {
    let ctx = use_roster();
    let copied = use_state(|| false);

    let copy_link = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                if let Ok(href) = window.location().href() {
                    let clipboard = window.navigator().clipboard();
                    wasm_bindgen_futures::spawn_local(async move {
                        let _ =
                            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&href)).await;
                    });
                }
            }
            copied.set(true);
            let copied = copied.clone();
            Timeout::new(2000, move || copied.set(false)).forget();
        })
    };

    let dragged = ctx.drag.as_ref().filter(|d| d.active).map(|d| d.player_id);
    let overlay_player = ctx.active_player().cloned();
    let overlay_position = ctx
        .drag
        .as_ref()
        .filter(|d| d.active)
        .map(|d| (d.current_x, d.current_y));

    html! {
        <div
            class="squad-board"
            onpointerdown={ctx.on_pointer_down.clone()}
            onpointermove={ctx.on_pointer_move.clone()}
            onpointerup={ctx.on_pointer_up.clone()}
            onpointercancel={ctx.on_pointer_cancel.clone()}
        >
            <header class="squad-board__header">
                <div>
                    <h1 class="squad-board__title">{ "Squad Board" }</h1>
                    <p class="squad-board__subtitle">{ "Drag players onto a team" }</p>
                </div>
                <div class="squad-board__toolbar" data-no-drag="true">
                    <span class="squad-board__count">{ ctx.roster.count_label() }</span>
                    <button
                        class="squad-board__share"
                        type="button"
                        onclick={copy_link}
                        title="Copy board link"
                    >
                        { if *copied { "Copied!" } else { "Share" } }
                    </button>
                </div>
            </header>

            <ErrorBanner message={ctx.error.clone()} />

            <AddPlayerForm
                on_add={ctx.add_player.clone()}
                pending={ctx.add_pending}
                at_cap={ctx.roster.is_full()}
            />

            <div class="squad-board__columns">
                { for Team::ALL.iter().map(|team| html! {
                    <TeamColumn
                        key={team.as_str()}
                        team={*team}
                        players={ctx.roster.players_in(*team).into_iter().cloned().collect::<Vec<_>>()}
                        on_delete={ctx.delete_player.clone()}
                        highlighted={ctx.hover_team == Some(*team)}
                        dragged={dragged}
                    />
                }) }
            </div>

            <DragOverlay player={overlay_player} position={overlay_position} />
        </div>
    }
}
