use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Tooltip, TooltipContent, TooltipPosition,
};
use crate::toolbar::{ToolbarAction, TOOLBAR_BUTTONS};
use leptos::prelude::*;

#[component]
pub fn ToolbarButtons(on_action: Callback<ToolbarAction>) -> impl IntoView {
    view! {
        <div data-name="ToolbarButtons" role="toolbar" class="flex flex-wrap items-center gap-1 border-b px-2 py-1">
            {TOOLBAR_BUTTONS
                .iter()
                .map(|button| {
                    let action = button.action();
                    view! {
                        <Tooltip>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Toolbar
                                attr:title=button.hint
                                on:mousedown=|ev: web_sys::MouseEvent| ev.prevent_default()
                                on:click=move |_| on_action.run(action.clone())
                            >
                                {button.label}
                            </Button>
                            <TooltipContent position=TooltipPosition::Bottom>{button.hint}</TooltipContent>
                        </Tooltip>
                    }
                })
                .collect_view()}
        </div>
    }
}
