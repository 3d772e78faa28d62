use super::ControlsDropdown;
use crate::category::{category_label, find_category, CATEGORIES};
use leptos::prelude::*;

/// Main category and subcategory pickers. Emits the combined label on every change.
#[component]
pub fn CategorySelector(on_change: Callback<String>) -> impl IntoView {
    let main = RwSignal::new(String::new());
    let sub = RwSignal::new(String::new());

    let main_options = Signal::derive(|| CATEGORIES.iter().map(|c| c.name.to_string()).collect());
    let sub_options = Signal::derive(move || {
        main.with(|m| {
            find_category(m)
                .map(|c| c.subcategories.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default()
        })
    });

    let on_main = Callback::new(move |name: String| {
        if main.get_untracked() != name {
            sub.set(String::new());
        }
        on_change.run(category_label(&name, None));
        main.set(name);
    });

    let on_sub = Callback::new(move |name: String| {
        on_change.run(category_label(&main.get_untracked(), Some(&name)));
        sub.set(name);
    });

    view! {
        <div data-name="CategorySelector" class="flex flex-wrap items-center gap-2">
            <ControlsDropdown
                options=main_options
                selected=main
                placeholder="카테고리 선택"
                on_select=on_main
                class="w-48"
            />
            <Show when=move || !main.with(String::is_empty)>
                <ControlsDropdown
                    options=sub_options
                    selected=sub
                    placeholder="하위 카테고리 선택"
                    on_select=on_sub
                    class="w-56"
                />
            </Show>
        </div>
    }
}
