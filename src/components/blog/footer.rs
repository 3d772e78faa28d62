use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-name="Footer" class="border-t py-6 text-center text-xs text-muted-foreground">
            "© Blog. All rights reserved."
        </footer>
    }
}
