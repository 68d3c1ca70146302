//! Layout ratios and engine configuration constants.
//!
//! Every length on the face is derived from the panel width through the
//! ratios below, so the same face looks proportionally identical on a 144px
//! rectangular panel and a 180px round one. The derived values themselves
//! are computed once at start-up by [`DisplayMetrics`](crate::layout::DisplayMetrics).
//!
//! # Compile-Time Validation
//!
//! Ratio groups carry `const` assertions, so a nonsensical edit (e.g. a hand
//! thinner than its pivot dot) fails the build instead of the face.

// =============================================================================
// Tail (minute progress track)
// =============================================================================

/// The tail gap (margin between panel edge and tail track) is `width / 9`.
pub const TAIL_GAP_DIVISOR: u32 = 9;

/// The tail track is half as thick as its gap.
pub const TAIL_THICKNESS_DIVISOR: u32 = 2;

const _: () = assert!(TAIL_GAP_DIVISOR > 2 * TAIL_THICKNESS_DIVISOR);

// =============================================================================
// Hands
// =============================================================================

/// Hour hand back-length is `tail_gap * 3 / 4`.
pub const HOUR_BACK_NUM: u32 = 3;
/// See [`HOUR_BACK_NUM`].
pub const HOUR_BACK_DEN: u32 = 4;

/// Minute hand back-length is `hour_back_length * 3 / 2`.
pub const MINUTE_BACK_NUM: u32 = 3;
/// See [`MINUTE_BACK_NUM`].
pub const MINUTE_BACK_DEN: u32 = 2;

/// Minute hand stroke width in pixels.
pub const MINUTE_STROKE_WIDTH: u32 = 2;

/// Hour hand stroke width in pixels.
pub const HOUR_STROKE_WIDTH: u32 = 4;

/// Minute pivot dot radius, sized to cover the hour hand's stroke.
pub const MINUTE_DOT_RADIUS: u32 = HOUR_STROKE_WIDTH;

/// Hour pivot dot radius, one pixel wider than the minute dot so it shows as a ring.
pub const HOUR_DOT_RADIUS: u32 = MINUTE_DOT_RADIUS + 1;

const _: () = assert!(MINUTE_STROKE_WIDTH < HOUR_STROKE_WIDTH);
const _: () = assert!(MINUTE_DOT_RADIUS < HOUR_DOT_RADIUS);

// =============================================================================
// Date Label
// =============================================================================

/// Date label box width in pixels (two digits of a 20px numeric font).
pub const DATE_WIDTH: u32 = 30;

/// Date label box height in pixels.
pub const DATE_HEIGHT: u32 = 20;

/// Characters in the date label ("01".."31").
pub const DATE_LEN: usize = 2;

// =============================================================================
// Event Log
// =============================================================================

/// Maximum number of log entries kept by a face.
pub const LOG_ENTRIES: usize = 14;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;
