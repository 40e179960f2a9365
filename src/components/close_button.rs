use leptos::prelude::*;

use crate::lexicon;

/// Button that asks the host to close the view
#[component]
pub fn CloseButton(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <button
            id=lexicon::CLOSE_BUTTON_ID
            class="close-button"
            on:click=move |_| on_close.run(())
        >
            {lexicon::CLOSE_BUTTON}
        </button>
    }
}
