use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

clx! {Tooltip, div, "inline-block relative whitespace-nowrap group/tooltip"}

#[derive(Clone, Copy, Default, strum::AsRefStr)]
pub enum TooltipPosition {
    #[default]
    Top,
    Bottom,
}

/// Pure CSS tooltip; shown while the parent [`Tooltip`] is hovered.
#[component]
pub fn TooltipContent(
    #[prop(into, optional)] class: String,
    #[prop(default = TooltipPosition::default())] position: TooltipPosition,
    children: Children,
) -> impl IntoView {
    const SHARED: &str = "absolute left-1/2 -translate-x-1/2 opacity-0 transition-opacity duration-200 pointer-events-none group-hover/tooltip:opacity-100 z-50";

    let (content_position, arrow_position) = match position {
        TooltipPosition::Top => ("bottom-full mb-2", "bottom-full -mb-1 border-t-foreground/90"),
        TooltipPosition::Bottom => ("top-full mt-2", "top-full -mt-1 border-b-foreground/90"),
    };

    let content_class = tw_merge!(
        SHARED,
        "rounded px-2 py-1 text-xs shadow-lg text-background bg-foreground/90",
        content_position,
        class,
    );
    let arrow_class = tw_merge!(SHARED, "border-transparent border-4", arrow_position);

    view! {
        <div data-name="TooltipArrow" data-position=position.as_ref().to_string() class=arrow_class />
        <div data-name="TooltipContent" data-position=position.as_ref().to_string() class=content_class>
            {children()}
        </div>
    }
}
