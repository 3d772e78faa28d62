use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Raw markdown pane.
#[component]
pub fn MarkdownEditor(
    content: RwSignal<String>,
    node_ref: NodeRef<html::Textarea>,
    on_scroll: Callback<()>,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        if let Some(el) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            content.set(el.value());
        }
    };

    view! {
        <textarea
            data-name="MarkdownEditor"
            class="h-full w-full resize-none overflow-y-auto bg-transparent p-4 font-mono text-sm leading-relaxed outline-none"
            placeholder="마크다운으로 글을 작성하세요..."
            spellcheck="false"
            prop:value=move || content.get()
            on:input=on_input
            on:scroll=move |_| on_scroll.run(())
            node_ref=node_ref
        />
    }
}
