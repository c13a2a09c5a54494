pub mod input;

// Re-export component symbols so callers can `use crate::components::ui::Input`.
pub use input::*;
