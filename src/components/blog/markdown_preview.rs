use crate::markdown::render_preview;
use leptos::html;
use leptos::prelude::*;

/// Rendered preview pane; re-rendered whenever `content` changes.
#[component]
pub fn MarkdownPreview(
    #[prop(into)] content: Signal<String>,
    node_ref: NodeRef<html::Div>,
    on_scroll: Callback<()>,
) -> impl IntoView {
    let html = Memo::new(move |_| content.with(|md| render_preview(md)));

    view! {
        <div
            data-name="MarkdownPreview"
            class="prose prose-sm dark:prose-invert h-full max-w-none overflow-y-auto p-4"
            inner_html=move || html.get()
            on:scroll=move |_| on_scroll.run(())
            node_ref=node_ref
        />
    }
}
