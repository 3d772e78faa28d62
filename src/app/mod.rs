use crate::config::EnvConfig;
use crate::pages::{BlogEditorPage, RootLayout};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App(config: EnvConfig) -> impl IntoView {
    provide_context(AppContext(AppState::new(&config)));

    // Router hooks in the layout need the <Router> context, so the layout sits inside it.
    view! {
        <Router>
            <RootLayout>
                <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                    <Route path=path!("blog/editor") view=BlogEditorPage />
                    <Route path=path!("") view=BlogEditorPage />
                </Routes>
            </RootLayout>
        </Router>
    }
}
