use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddPlayerFormProps {
    pub on_add: Callback<String>,
    /// True while a previous add is still awaiting the store.
    #[prop_or_default]
    pub pending: bool,
    #[prop_or_default]
    pub at_cap: bool,
}

/// Name input plus submit button. The input refocuses once a pending add
/// settles, so players can be typed in one after another.
#[function_component(AddPlayerForm)]
pub fn add_player_form(props: &AddPlayerFormProps) -> Html {
    let name = use_state(String::new);
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(props.pending, move |pending| {
            if !*pending {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        });
    }

    let oninput = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                name.set(input.value());
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_add.emit((*name).clone());
            name.set(String::new());
        })
    };

    let disabled = props.pending || props.at_cap;
    let button_label = if props.pending {
        "Adding…"
    } else if props.at_cap {
        "Squad full"
    } else {
        "Add"
    };

    html! {
        <form class="squad-add-form" data-no-drag="true" {onsubmit}>
            <input
                ref={input_ref}
                class="squad-add-form__input"
                type="text"
                placeholder="Player name"
                value={(*name).clone()}
                {oninput}
                disabled={disabled}
            />
            <button
                class="squad-add-form__submit"
                type="submit"
                disabled={disabled}
            >
                { button_label }
            </button>
        </form>
    }
}
