//! Frame timing and accounting.
//!
//! Intended usage:
//! - one `FrameClock` per window; `tick()` once per display callback
//! - one `FrameStats` per window; record whether each tick presented

mod frame_clock;
mod frame_stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_stats::{FrameOutcome, FrameReport, FrameStats};
