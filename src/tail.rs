//! Minute progress "tail": a track plus a sector that fills clockwise from
//! 12 o'clock to the minute hand.
//!
//! # Round Panels
//!
//! The track and sweep are both annular sectors fitted to the tail bounds,
//! `tail_thickness` pixels deep. The panel itself is circular so nothing else
//! is needed.
//!
//! # Rectangular Panels
//!
//! The track follows the rectangular outline of the tail bounds, so a circular
//! annulus would leave the corners empty. Instead:
//!
//! 1. The track is the whole tail box, filled.
//! 2. The sweep is a full pie sector on a square of side `tail width + tail
//!    height` centred on the tail, clipped to the tail box. Its circle covers
//!    every corner, so inside the box the sector edge runs straight out from
//!    the hub to the box edge.
//! 3. The mask paints the tail box inset by `tail_thickness` in the
//!    background color, leaving only a rectangular ring of the sweep visible.
//!
//! The visible ring therefore depends only on the tail box and thickness,
//! never on how oversized the sector is. Paint order must stay track, sweep,
//! mask.

use crate::angle::TrigAngle;
use crate::layout::{DisplayMetrics, DisplayShape};
use crate::shape::Shape;
use crate::style::StyleRecord;

/// Tail generator for one panel outline.
pub trait TailArc {
    /// Static track under the sweep. Changes only with style.
    fn track(
        &self,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Shape;

    /// Sector from 12 o'clock to `minute_angle`.
    fn sweep(
        &self,
        minute_angle: TrigAngle,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Shape;

    /// Overlay that trims the sweep into a ring, if the outline needs one.
    fn mask(
        &self,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Option<Shape>;

    /// All tail shapes bottom to top.
    fn render(
        &self,
        minute_angle: TrigAngle,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> [Option<Shape>; 3] {
        [
            Some(self.track(metrics, style)),
            Some(self.sweep(minute_angle, metrics, style)),
            self.mask(metrics, style),
        ]
    }
}

/// Native annulus on a circular panel.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundTail;

/// Oversized sector plus frame mask on a rectangular panel.
#[derive(Clone, Copy, Debug, Default)]
pub struct RectTail;

impl TailArc for RoundTail {
    fn track(
        &self,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Shape {
        let bounds = metrics.tail_bounds();
        Shape::RadialFill {
            bounds,
            inset: metrics.tail_thickness,
            start: TrigAngle::ZERO,
            end: TrigAngle::ZERO,
            full: true,
            clip: bounds,
            color: style.minute_tail_background_color,
        }
    }

    fn sweep(
        &self,
        minute_angle: TrigAngle,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Shape {
        let bounds = metrics.tail_bounds();
        Shape::RadialFill {
            bounds,
            inset: metrics.tail_thickness,
            start: TrigAngle::ZERO,
            end: minute_angle,
            full: false,
            clip: bounds,
            color: style.minute_color,
        }
    }

    fn mask(
        &self,
        _metrics: &DisplayMetrics,
        _style: &StyleRecord,
    ) -> Option<Shape> {
        None
    }
}

impl TailArc for RectTail {
    fn track(
        &self,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Shape {
        Shape::FilledRect {
            rect: metrics.tail_bounds(),
            color: style.minute_tail_background_color,
        }
    }

    fn sweep(
        &self,
        minute_angle: TrigAngle,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Shape {
        let fill = metrics.tail_fill_bounds();
        Shape::RadialFill {
            bounds: fill,
            inset: fill.size.height.div_ceil(2),
            start: TrigAngle::ZERO,
            end: minute_angle,
            full: false,
            clip: metrics.tail_bounds(),
            color: style.minute_color,
        }
    }

    fn mask(
        &self,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Option<Shape> {
        Some(Shape::FilledRect {
            rect: metrics.tail_mask_bounds(),
            color: style.background_color,
        })
    }
}

impl TailArc for DisplayShape {
    fn track(
        &self,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Shape {
        match self {
            Self::Round => RoundTail.track(metrics, style),
            Self::Rectangular => RectTail.track(metrics, style),
        }
    }

    fn sweep(
        &self,
        minute_angle: TrigAngle,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Shape {
        match self {
            Self::Round => RoundTail.sweep(minute_angle, metrics, style),
            Self::Rectangular => RectTail.sweep(minute_angle, metrics, style),
        }
    }

    fn mask(
        &self,
        metrics: &DisplayMetrics,
        style: &StyleRecord,
    ) -> Option<Shape> {
        match self {
            Self::Round => RoundTail.mask(metrics, style),
            Self::Rectangular => RectTail.mask(metrics, style),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
