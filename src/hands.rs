//! Hand and pivot-dot generators.
//!
//! Each generator is a pure function of its angle, the layout and the style.
//! Both hands extend a short way backwards past the hub; the minute hand is
//! long enough to leave the panel on every side.

use crate::angle::{TrigAngle, polar};
use crate::layout::DisplayMetrics;
use crate::shape::Shape;
use crate::style::StyleRecord;

/// Hour hand: `hour_radius` forwards, `hour_back_length` backwards.
pub fn hour_hand(
    angle: TrigAngle,
    metrics: &DisplayMetrics,
    style: &StyleRecord,
) -> Shape {
    Shape::Line {
        start: polar(metrics.center, angle, -(metrics.hour_back_length as i32)),
        end: polar(metrics.center, angle, metrics.hour_radius as i32),
        width: metrics.hour_stroke_width,
        color: style.hour_color,
    }
}

/// Minute hand: reaches past the panel edge, `minute_back_length` backwards.
pub fn minute_hand(
    angle: TrigAngle,
    metrics: &DisplayMetrics,
    style: &StyleRecord,
) -> Shape {
    Shape::Line {
        start: polar(metrics.center, angle, -(metrics.minute_back_length as i32)),
        end: polar(metrics.center, angle, metrics.minute_radius as i32),
        width: metrics.minute_stroke_width,
        color: style.minute_color,
    }
}

/// Hour pivot dot. Static: it does not depend on the time.
pub const fn hour_dot(
    metrics: &DisplayMetrics,
    style: &StyleRecord,
) -> Shape {
    Shape::FilledCircle {
        center: metrics.center,
        radius: metrics.hour_dot_radius,
        color: style.hour_color,
    }
}

/// Minute pivot dot, drawn over the hour dot.
pub const fn minute_dot(
    metrics: &DisplayMetrics,
    style: &StyleRecord,
) -> Shape {
    Shape::FilledCircle {
        center: metrics.center,
        radius: metrics.minute_dot_radius,
        color: style.minute_color,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
