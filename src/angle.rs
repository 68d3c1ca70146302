//! Fixed-point clock angles.
//!
//! A full turn is [`TRIG_MAX_ANGLE`] units, zero points at 12 o'clock and
//! angles grow clockwise. Integer angles keep the tick path free of floating
//! point; sine and cosine are only evaluated when a hand is projected, using
//! `micromath`'s software approximations so results are identical on hosts
//! with and without an FPU.

use embedded_graphics::prelude::Point;

/// Units in one full turn.
pub const TRIG_MAX_ANGLE: u32 = 0x1_0000;

/// Angle in `[0, TRIG_MAX_ANGLE)`, clockwise from 12 o'clock.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct TrigAngle(u32);

impl TrigAngle {
    /// 12 o'clock.
    pub const ZERO: Self = Self(0);

    /// Wrap any raw value into a single turn.
    #[inline]
    pub const fn new(raw: u32) -> Self { Self(raw % TRIG_MAX_ANGLE) }

    /// `numerator / denominator` of a full turn, truncated.
    ///
    /// `denominator` must be non-zero.
    #[inline]
    pub const fn from_fraction(
        numerator: u32,
        denominator: u32,
    ) -> Self {
        Self::new(((TRIG_MAX_ANGLE as u64 * numerator as u64) / denominator as u64) as u32)
    }

    /// Whole degrees, truncated (as used by `DEG_TO_TRIGANGLE`-style constants).
    #[inline]
    pub const fn from_degrees(degrees: u32) -> Self { Self::from_fraction(degrees % 360, 360) }

    /// Raw fixed-point value.
    #[inline]
    pub const fn raw(self) -> u32 { self.0 }

    #[inline]
    pub fn degrees(self) -> f32 { self.0 as f32 * 360.0 / TRIG_MAX_ANGLE as f32 }

    #[inline]
    pub fn radians(self) -> f32 { self.0 as f32 * core::f32::consts::TAU / TRIG_MAX_ANGLE as f32 }

    /// `(sin, cos)` of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f32, f32) {
        let r = self.radians();
        (micromath::F32(r).sin().0, micromath::F32(r).cos().0)
    }
}

/// Project `length` pixels from `center` along `angle`.
///
/// Screen Y grows downwards, so 12 o'clock is `(0, -length)`. A negative
/// length points the opposite way, which is how hand back-lengths are drawn.
pub fn polar(
    center: Point,
    angle: TrigAngle,
    length: i32,
) -> Point {
    let (sin, cos) = angle.sin_cos();
    let len = length as f32;
    Point::new(center.x + round(sin * len), center.y - round(cos * len))
}

#[inline]
fn round(v: f32) -> i32 { if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 } }

// =============================================================================
// Unit Tests
// =============================================================================
