use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::session::login_href;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const EDITOR_PATH: &str = "/blog/editor";

#[component]
pub fn HeaderBar() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let header = app_state.0.header;
    let pathname = use_location().pathname;

    view! {
        <header data-name="HeaderBar" class="sticky top-0 z-40 border-b bg-background/95 backdrop-blur">
            <div class="mx-auto flex h-14 max-w-6xl items-center justify-between px-4">
                <a href="/" class="text-sm font-semibold text-foreground">"Blog"</a>
                {move || {
                    let chrome = header.get();
                    match chrome.avatar_src() {
                        Some(src) => {
                            let on_editor = pathname.get() == EDITOR_PATH;
                            view! {
                                <div class="flex items-center gap-3">
                                    <Button
                                        variant=ButtonVariant::Outline
                                        size=ButtonSize::Sm
                                        attr:aria-current=move || if on_editor { Some("page") } else { None }
                                        href=EDITOR_PATH.to_string()
                                    >
                                        "글쓰기"
                                    </Button>
                                    <img
                                        src=src.to_string()
                                        alt=chrome.avatar_alt().to_string()
                                        class="size-8 rounded-full border object-cover"
                                    />
                                </div>
                            }
                            .into_any()
                        }
                        None => view! {
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Sm
                                href=login_href(&pathname.get())
                            >
                                "로그인"
                            </Button>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </header>
    }
}
