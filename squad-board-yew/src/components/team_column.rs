use crate::components::PlayerCard;
use squad_board_core::{Player, PlayerId, Team};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TeamColumnProps {
    pub team: Team,
    pub players: Vec<Player>,
    pub on_delete: Callback<PlayerId>,
    /// An active drag is hovering this column.
    #[prop_or_default]
    pub highlighted: bool,
    /// The player currently being dragged, if any.
    #[prop_or_default]
    pub dragged: Option<PlayerId>,
}

/// One drop zone: header with a live count, then the team's cards in
/// roster order. The whole column accepts drops via `data-drop-zone`.
#[function_component(TeamColumn)]
pub fn team_column(props: &TeamColumnProps) -> Html {
    let classes = classes!(
        "squad-column",
        props.highlighted.then_some("squad-column--over"),
    );

    let count = props.players.len();
    let count_label = if count == 1 {
        "1 player".to_string()
    } else {
        format!("{count} players")
    };

    html! {
        <section class={classes} data-drop-zone={props.team.as_str()}>
            <header class="squad-column__header">
                <h2 class="squad-column__title">{ props.team.label() }</h2>
                <span class="squad-column__count">{ count_label }</span>
            </header>
            <div class="squad-column__cards">
                if props.players.is_empty() {
                    <p class="squad-column__empty">
                        if props.highlighted {
                            { "Release to drop here" }
                        } else {
                            { "Drag players here" }
                        }
                    </p>
                } else {
                    { for props.players.iter().enumerate().map(|(i, player)| html! {
                        <PlayerCard
                            key={player.id().to_string()}
                            player={player.clone()}
                            index={Some(i + 1)}
                            dragging={props.dragged == Some(player.id())}
                            on_delete={props.on_delete.clone()}
                        />
                    }) }
                }
            </div>
        </section>
    }
}
