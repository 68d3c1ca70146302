//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they live here rather than in the core crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Wall time per simulated minute while auto-advance is on.
pub const AUTO_ADVANCE_STEP: Duration = Duration::from_millis(250);
