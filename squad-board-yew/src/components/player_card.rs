use squad_board_core::{Player, PlayerId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerCardProps {
    pub player: Player,
    pub on_delete: Callback<PlayerId>,
    /// Position within the column, 1-based.
    #[prop_or_default]
    pub index: Option<usize>,
    /// The card is the origin of an active drag.
    #[prop_or_default]
    pub dragging: bool,
    /// Rendered inside the drag overlay; carries no drag attributes.
    #[prop_or_default]
    pub overlay: bool,
}

#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let player = &props.player;

    let classes = classes!(
        "squad-card",
        props.dragging.then_some("squad-card--dragging"),
        props.overlay.then_some("squad-card--overlay"),
        player.is_placeholder().then_some("squad-card--pending"),
    );

    let ondelete = {
        let on_delete = props.on_delete.clone();
        let id = player.id();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_delete.emit(id);
        })
    };

    html! {
        <div
            class={classes}
            data-player-id={(!props.overlay).then(|| player.id().to_string())}
        >
            if let Some(index) = props.index {
                <span class="squad-card__index">{ index }</span>
            }
            <span class="squad-card__name">{ player.name() }</span>
            if player.is_placeholder() {
                <span class="squad-card__pending">{ "Saving…" }</span>
            }
            <button
                class="squad-card__delete"
                type="button"
                data-no-drag="true"
                aria-label={format!("Remove {}", player.name())}
                onclick={ondelete}
            >
                { "Remove" }
            </button>
        </div>
    }
}
