pub mod action;
pub mod counts;
pub mod event;

pub use action::Action;
pub use counts::OwnerCounts;
pub use event::{Event, TIMESTAMP_FORMAT};
