mod category_selector;
mod controls_dropdown;
mod footer;
mod header_bar;
mod markdown_editor;
mod markdown_preview;
mod toolbar_buttons;

pub use category_selector::CategorySelector;
pub use controls_dropdown::ControlsDropdown;
pub use footer::Footer;
pub use header_bar::HeaderBar;
pub use markdown_editor::MarkdownEditor;
pub use markdown_preview::MarkdownPreview;
pub use toolbar_buttons::ToolbarButtons;
