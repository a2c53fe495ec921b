use crate::components::PlayerCard;
use squad_board_core::Player;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DragOverlayProps {
    #[prop_or_default]
    pub player: Option<Player>,
    /// Pointer position in client coordinates.
    #[prop_or_default]
    pub position: Option<(f64, f64)>,
}

/// Floating copy of the dragged card, offset from the pointer. The
/// overlay is `pointer-events: none` in CSS so hit testing under the
/// pointer still reaches the columns.
#[function_component(DragOverlay)]
pub fn drag_overlay(props: &DragOverlayProps) -> Html {
    let (Some(player), Some((x, y))) = (&props.player, props.position) else {
        return html! {};
    };

    let style = format!("transform: translate3d({}px, {}px, 0);", x + 8.0, y + 8.0);

    html! {
        <div class="squad-drag-overlay" {style}>
            <PlayerCard
                player={player.clone()}
                overlay=true
                on_delete={Callback::noop()}
            />
        </div>
    }
}
