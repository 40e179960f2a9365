//! Item List Component
//!
//! Renders the list container: one row per item, or a notice.

use leptos::prelude::*;

use crate::lexicon;
use crate::render::ListContent;

#[component]
pub fn ItemList(content: ReadSignal<ListContent>) -> impl IntoView {
    let row_count = move || content.with(|c| c.rows().len());
    let has_rows = move || content.with(ListContent::has_rows);

    view! {
        <div id=lexicon::LIST_CONTAINER_ID class="list-container">
            {move || content.with(|c| match c.notice() {
                Some(notice) => view! { <p class="list-notice">{notice.text()}</p> }.into_any(),
                None => c
                    .rows()
                    .iter()
                    .map(|row| {
                        view! {
                            <div class="list-item">
                                <div class="article">{row.article_text()}</div>
                                <div class="quantity">{row.quantity_text()}</div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any(),
            })}
        </div>
        <Show when=has_rows>
            <p class="item-count">{move || format!("{}: {}", lexicon::ROW_COUNT_LABEL, row_count())}</p>
        </Show>
    }
}
