use crate::pages::BoardScreen;
use crate::providers::RosterProvider;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="squad-app">
            <RosterProvider>
                <BoardScreen />
            </RosterProvider>
        </div>
    }
}
