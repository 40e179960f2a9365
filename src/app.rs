//! Stock List App
//!
//! Root component: list container plus close button.

use leptos::prelude::*;

use crate::bridge::TelegramBridge;
use crate::components::{CloseButton, ItemList};
use crate::lexicon;
use crate::render::ListContent;
use crate::session::ListSession;

#[component]
pub fn App() -> impl IntoView {
    let bridge = TelegramBridge;
    let session = ListSession::new(bridge);
    let (content, set_content) = signal(ListContent::default());

    // Startup pass on mount
    Effect::new(move |_| {
        let launch_param = bridge.launch_param();
        set_content.update(|c| session.start(launch_param.as_deref(), c));
    });

    let on_close = Callback::new(move |_: ()| session.close());

    view! {
        <main class="app-layout">
            <h1>{lexicon::TITLE}</h1>
            <ItemList content=content />
            <CloseButton on_close=on_close />
        </main>
    }
}
