//! Scheduled item models shared by the calendar, cost and filter modules.

pub mod category;
pub mod item;
pub mod month;
pub mod span;

pub use category::Category;
pub use item::{ItemId, ItemKind, ScheduledItem};
pub use month::CalendarMonth;
pub use span::DateSpan;
