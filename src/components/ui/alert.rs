use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

#[component]
pub fn Alert(
    #[prop(into, optional)] tone: Signal<AlertTone>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let merged_class = move || {
        let alert = AlertClass { tone: tone.get() };
        alert.with_class(class.clone())
    };

    view! {
        <div data-name="Alert" role="alert" class=merged_class>
            {children()}
        </div>
    }
}

mod components {
    use super::*;
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

/* ========================================================== */
/*                       🧬 STRUCT 🧬                         */
/* ========================================================== */

#[derive(TwClass, Default)]
#[tw(class = "relative w-full rounded-lg border px-4 py-3 text-sm")]
pub struct AlertClass {
    tone: AlertTone,
}

#[derive(TwVariant)]
pub enum AlertTone {
    #[tw(default, class = "border-success/30 bg-success/10 text-success")]
    Success,
    #[tw(class = "border-destructive/30 bg-destructive/10 text-destructive")]
    Destructive,
}
