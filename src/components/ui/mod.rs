pub mod alert;
pub mod button;
pub mod input;
pub mod spinner;
pub mod tooltip;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
pub use input::*;
pub use spinner::*;
pub use tooltip::*;
