//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod render;
pub mod tick;

pub use render::render_task;
pub use tick::tick_task;
