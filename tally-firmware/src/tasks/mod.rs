//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod button;
pub mod counter;

pub use button::button_task;
pub use counter::counter_task;
