use crate::components::blog::{
    CategorySelector, Footer, HeaderBar, MarkdownEditor, MarkdownPreview, ToolbarButtons,
};
use crate::components::ui::{
    Alert, AlertDescription, AlertTone, Button, ButtonSize, Input, Spinner,
};
use crate::models::Draft;
use crate::scroll_sync::{use_scroll_sync, Pane};
use crate::session::HeaderChrome;
use crate::state::AppContext;
use crate::submit::{submit_draft, Acknowledgment};
use crate::toolbar::{apply_to_textarea, ToolbarAction};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Header, routed page, footer. Looks the session up once when mounted.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;
    let header = app_state.0.header;

    Effect::new(move |_| {
        let api_client = api_client.get_untracked();
        spawn_local(async move {
            let chrome = HeaderChrome::from_lookup(api_client.get_session().await);
            tracing::debug!(member = chrome.is_member(), "session resolved");
            header.set(chrome);
        });
    });

    view! {
        <div class="flex min-h-screen flex-col bg-background">
            <HeaderBar />
            <main class="flex-1">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
pub fn BlogEditorPage() -> impl IntoView {
    let api_client = expect_context::<AppContext>().0.api_client;

    let category: RwSignal<String> = RwSignal::new(String::new());
    let title: RwSignal<String> = RwSignal::new(String::new());
    let content: RwSignal<String> = RwSignal::new(String::new());
    let sync_enabled: RwSignal<bool> = RwSignal::new(false);
    let submitting: RwSignal<bool> = RwSignal::new(false);
    let ack: RwSignal<Option<Acknowledgment>> = RwSignal::new(None);

    let editor_ref: NodeRef<html::Textarea> = NodeRef::new();
    let preview_ref: NodeRef<html::Div> = NodeRef::new();
    let sync = use_scroll_sync(editor_ref, preview_ref, sync_enabled.into());

    let on_category = Callback::new(move |label: String| category.set(label));

    let on_action = Callback::new(move |action: ToolbarAction| {
        // Degrades to a no-op before the textarea is mounted.
        if let Some(el) = editor_ref.get_untracked() {
            content.set(apply_to_textarea(&el, &action));
        }
    });

    let on_submit = move |_| {
        let draft = Draft {
            title: title.get_untracked(),
            category: category.get_untracked(),
            content: content.get_untracked(),
        };
        let api_client = api_client.get_untracked();

        submitting.set(true);
        ack.set(None);

        spawn_local(async move {
            let outcome = submit_draft(&api_client, &draft).await;
            ack.set(Some(outcome));
            submitting.set(false);
        });
    };

    view! {
        <div class="container mx-auto p-4">
            <h1 class="mb-4 text-2xl font-bold">"블로그 글 작성/수정"</h1>

            <div class="mb-4">
                <CategorySelector on_change=on_category />
            </div>

            <Input
                id="title"
                placeholder="제목을 입력하세요..."
                bind_value=title
                class="mb-4 h-auto rounded-none border-0 border-b p-2 text-3xl font-bold shadow-none md:text-3xl"
            />

            <div class="overflow-hidden rounded-md border">
                <ToolbarButtons on_action=on_action />
                <div class="flex h-[60vh] divide-x">
                    <div class="w-1/2">
                        <MarkdownEditor
                            content=content
                            node_ref=editor_ref
                            on_scroll=Callback::new(move |_| sync.on_scroll(Pane::Editor))
                        />
                    </div>
                    <div class="w-1/2">
                        <MarkdownPreview
                            content=content
                            node_ref=preview_ref
                            on_scroll=Callback::new(move |_| sync.on_scroll(Pane::Preview))
                        />
                    </div>
                </div>
            </div>

            {move || {
                ack.get().map(|a| {
                    let tone = if a.is_success() { AlertTone::Success } else { AlertTone::Destructive };
                    view! {
                        <Alert tone=tone class="mt-4">
                            <AlertDescription>{a.message()}</AlertDescription>
                        </Alert>
                    }
                })
            }}

            <div class="mt-4 flex items-center justify-between">
                <Button size=ButtonSize::Default on:click=on_submit>
                    <Show when=move || submitting.get()>
                        <Spinner />
                    </Show>
                    "글 작성 완료"
                </Button>

                <div class="flex items-center">
                    <label class="inline-flex cursor-pointer items-center">
                        <input
                            type="checkbox"
                            class="size-4 rounded border-input accent-primary"
                            prop:checked=move || sync_enabled.get()
                            on:change=move |ev| sync_enabled.set(event_target_checked(&ev))
                        />
                        <span class="ml-2 text-sm text-muted-foreground">"스크롤 동기화"</span>
                    </label>
                    <span class="ml-1 rounded-full bg-primary/10 px-1.5 py-0.5 text-xs font-semibold text-primary">
                        "Beta"
                    </span>
                </div>
            </div>
        </div>
    }
}
