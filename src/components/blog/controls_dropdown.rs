use icons::{Check, ChevronDown};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Corner rounding for the option at `index` in a list of `len` options.
pub(crate) fn option_class(index: usize, len: usize) -> &'static str {
    match (index == 0, index + 1 == len) {
        (true, true) => "rounded-md",
        (true, false) => "rounded-t-md",
        (false, true) => "rounded-b-md",
        (false, false) => "",
    }
}

/// Button-triggered option list. Closes on selection or on a mousedown outside it.
#[component]
pub fn ControlsDropdown(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] placeholder: String,
    on_select: Callback<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let root_ref: NodeRef<html::Div> = NodeRef::new();

    let outside = window_event_listener(ev::mousedown, move |ev: web_sys::MouseEvent| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            open.set(false);
        }
    });
    on_cleanup(move || outside.remove());

    let label = move || {
        let s = selected.get();
        if s.is_empty() {
            placeholder.clone()
        } else {
            s
        }
    };

    let chevron_class = move || {
        if open.get() {
            "inline-flex transition-transform duration-200 rotate-180"
        } else {
            "inline-flex transition-transform duration-200"
        }
    };

    let merged_class = tw_merge!("relative min-w-40", class);

    view! {
        <div data-name="ControlsDropdown" class=merged_class node_ref=root_ref>
            <button
                type="button"
                class="flex h-9 w-full items-center justify-between rounded-md border border-input bg-transparent px-3 text-sm shadow-xs hover:cursor-pointer"
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="truncate" class:text-muted-foreground=move || selected.get().is_empty()>
                    {label}
                </span>
                <span class=chevron_class>
                    <ChevronDown class="size-4 text-muted-foreground" />
                </span>
            </button>

            <Show when=move || open.get()>
                <ul
                    role="listbox"
                    class="absolute z-50 mt-1 w-full rounded-md border bg-popover text-popover-foreground shadow-md"
                >
                    {move || {
                        let opts = options.get();
                        let len = opts.len();
                        opts.into_iter()
                            .enumerate()
                            .map(|(i, opt)| {
                                let is_selected = selected.get() == opt;
                                let value = opt.clone();
                                let class = tw_merge!(
                                    "flex w-full items-center gap-2 px-3 py-1.5 text-sm cursor-pointer hover:bg-accent hover:text-accent-foreground",
                                    option_class(i, len),
                                );
                                view! {
                                    <li
                                        role="option"
                                        class=class
                                        aria-selected=is_selected.to_string()
                                        on:click=move |_| {
                                            open.set(false);
                                            on_select.run(value.clone());
                                        }
                                    >
                                        <span class="truncate">{opt}</span>
                                        <Show when=move || is_selected>
                                            <Check class="ml-auto size-4 text-muted-foreground" />
                                        </Show>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, "rounded-md")]
    #[case(0, 3, "rounded-t-md")]
    #[case(1, 3, "")]
    #[case(2, 3, "rounded-b-md")]
    fn test_option_class_rounds_outer_corners(
        #[case] index: usize,
        #[case] len: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(option_class(index, len), expected);
    }
}
