//! Concrete component kinds.

mod field;
mod placeholder;
mod repeater;
mod section;
mod tabs;

pub use field::Field;
pub use placeholder::Placeholder;
pub use repeater::Repeater;
pub use section::Section;
pub use tabs::{Tab, Tabs};
