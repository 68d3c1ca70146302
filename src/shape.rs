//! Drawable output of the generators.
//!
//! Shapes are plain values: generators build them, the render adapter (or any
//! other compositor) consumes them, and nothing keeps them between repaints.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

use crate::angle::TrigAngle;

/// A single draw command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    /// Stroked segment from `start` to `end`.
    Line {
        start: Point,
        end: Point,
        width: u32,
        color: Rgb888,
    },
    /// Filled circular sector or annular sector.
    ///
    /// The circle is the largest one centred in `bounds`. Only the outer
    /// `inset` pixels of its radius are filled, so an inset of at least the
    /// radius is a full pie slice. The fill sweeps clockwise from `start` to
    /// `end`; equal angles mean nothing is drawn, and a full turn is
    /// expressed with `end == start` plus `full == true`. Pixels outside
    /// `clip` are never touched.
    RadialFill {
        bounds: Rectangle,
        inset: u32,
        start: TrigAngle,
        end: TrigAngle,
        full: bool,
        clip: Rectangle,
        color: Rgb888,
    },
    /// Filled axis-aligned rectangle.
    FilledRect { rect: Rectangle, color: Rgb888 },
    /// Filled circle `2 * radius` pixels across, centred on `center`.
    /// A zero radius paints nothing.
    FilledCircle {
        center: Point,
        radius: u32,
        color: Rgb888,
    },
}

impl Shape {
    /// Fill color (stroke color for lines).
    pub const fn color(&self) -> Rgb888 {
        match *self {
            Self::Line { color, .. }
            | Self::RadialFill { color, .. }
            | Self::FilledRect { color, .. }
            | Self::FilledCircle { color, .. } => color,
        }
    }

    /// Clockwise sweep of a radial fill in fixed-point units; zero for other shapes.
    pub const fn sweep(&self) -> u32 {
        match *self {
            Self::RadialFill { full: true, .. } => crate::angle::TRIG_MAX_ANGLE,
            Self::RadialFill { start, end, .. } => {
                (end.raw() + crate::angle::TRIG_MAX_ANGLE - start.raw()) % crate::angle::TRIG_MAX_ANGLE
            }
            _ => 0,
        }
    }

    /// Whether the shape paints no pixels at all.
    pub const fn is_empty(&self) -> bool {
        match *self {
            Self::RadialFill { .. } => self.sweep() == 0,
            Self::Line { width, .. } => width == 0,
            Self::FilledRect { rect, .. } => rect.size.width == 0 || rect.size.height == 0,
            Self::FilledCircle { radius, .. } => radius == 0,
        }
    }
}
