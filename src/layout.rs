//! Proportional layout derived from the panel size.
//!
//! [`DisplayMetrics::compute`] is the only place lengths are decided. It runs
//! once at start-up and is a pure function of the [`Screen`], so two faces on
//! identical panels get bit-identical layouts.
//!
//! All arithmetic is integer and truncating, which keeps results stable across
//! targets with and without an FPU.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::colors::Palette;
use crate::config::{
    DATE_HEIGHT,
    DATE_WIDTH,
    HOUR_BACK_DEN,
    HOUR_BACK_NUM,
    HOUR_DOT_RADIUS,
    HOUR_STROKE_WIDTH,
    MINUTE_BACK_DEN,
    MINUTE_BACK_NUM,
    MINUTE_DOT_RADIUS,
    MINUTE_STROKE_WIDTH,
    TAIL_GAP_DIVISOR,
    TAIL_THICKNESS_DIVISOR,
};

/// Physical outline of the panel.
///
/// Round panels draw the tail natively as an annulus; rectangular panels
/// emulate it with an oversized sector and a frame mask (see [`crate::tail`]).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DisplayShape {
    /// Circular panel.
    Round,
    /// Rectangular panel.
    #[default]
    Rectangular,
}

/// Display capabilities queried once from the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Screen {
    /// Pixel bounds. Both dimensions must be positive.
    pub size: Size,
    /// Round or rectangular outline.
    pub shape: DisplayShape,
    /// Color or black-and-white panel.
    pub palette: Palette,
}

impl Screen {
    /// A rectangular color panel.
    pub const fn rectangular(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            size: Size::new(width, height),
            shape: DisplayShape::Rectangular,
            palette: Palette::Color,
        }
    }

    /// A round color panel of the given diameter.
    pub const fn round(diameter: u32) -> Self {
        Self {
            size: Size::new(diameter, diameter),
            shape: DisplayShape::Round,
            palette: Palette::Color,
        }
    }

    /// Same panel, different palette.
    pub const fn with_palette(
        mut self,
        palette: Palette,
    ) -> Self {
        self.palette = palette;
        self
    }
}

/// Every length used by the generators, computed once from the panel size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayMetrics {
    pub width: u32,
    pub height: u32,
    pub shape: DisplayShape,
    /// Hub of both hands; also the center of the tail.
    pub center: Point,
    /// Margin between panel edge and the tail track.
    pub tail_gap: u32,
    /// Thickness of the tail track.
    pub tail_thickness: u32,
    /// Space between the tail track and the hour hand tip.
    pub hour_gap: u32,
    pub hour_back_length: u32,
    pub minute_back_length: u32,
    pub minute_stroke_width: u32,
    pub hour_stroke_width: u32,
    pub minute_dot_radius: u32,
    pub hour_dot_radius: u32,
    /// Outer radius of the tail track.
    pub tail_radius: u32,
    /// Hour hand length from the hub.
    pub hour_radius: u32,
    /// Minute hand length; always past the panel edge.
    pub minute_radius: u32,
}

impl DisplayMetrics {
    /// Derive the layout for a screen.
    pub const fn compute(screen: &Screen) -> Self {
        let width = screen.size.width;
        let height = screen.size.height;

        let tail_gap = width / TAIL_GAP_DIVISOR;
        let tail_thickness = tail_gap / TAIL_THICKNESS_DIVISOR;
        let hour_gap = tail_thickness;
        let hour_back_length = tail_gap * HOUR_BACK_NUM / HOUR_BACK_DEN;
        let minute_back_length = hour_back_length * MINUTE_BACK_NUM / MINUTE_BACK_DEN;
        let tail_radius = (width / 2).saturating_sub(tail_gap);
        let hour_radius = tail_radius.saturating_sub(tail_thickness + hour_gap);

        Self {
            width,
            height,
            shape: screen.shape,
            center: Point::new((width / 2) as i32, (height / 2) as i32),
            tail_gap,
            tail_thickness,
            hour_gap,
            hour_back_length,
            minute_back_length,
            minute_stroke_width: MINUTE_STROKE_WIDTH,
            hour_stroke_width: HOUR_STROKE_WIDTH,
            minute_dot_radius: MINUTE_DOT_RADIUS,
            hour_dot_radius: HOUR_DOT_RADIUS,
            tail_radius,
            hour_radius,
            minute_radius: (width + height) / 2,
        }
    }

    /// The whole panel.
    #[inline]
    pub const fn bounds(&self) -> Rectangle { Rectangle::new(Point::zero(), Size::new(self.width, self.height)) }

    /// Box the tail track occupies: the panel inset by the tail gap.
    pub const fn tail_bounds(&self) -> Rectangle {
        let gap = self.tail_gap;
        Rectangle::new(
            Point::new(gap as i32, gap as i32),
            Size::new(
                self.width.saturating_sub(2 * gap),
                self.height.saturating_sub(2 * gap),
            ),
        )
    }

    /// Interior of the tail track, painted over by the mask on rectangular panels.
    pub const fn tail_mask_bounds(&self) -> Rectangle {
        let tail = self.tail_bounds();
        let t = self.tail_thickness;
        Rectangle::new(
            Point::new(tail.top_left.x + t as i32, tail.top_left.y + t as i32),
            Size::new(
                tail.size.width.saturating_sub(2 * t),
                tail.size.height.saturating_sub(2 * t),
            ),
        )
    }

    /// Square centred on the tail whose inscribed circle reaches past every
    /// corner of the tail bounds (side = tail width + tail height).
    pub const fn tail_fill_bounds(&self) -> Rectangle {
        let tail = self.tail_bounds();
        let fill = tail.size.width + tail.size.height;
        let dx = (tail.size.width as i32 - fill as i32) / 2;
        let dy = (tail.size.height as i32 - fill as i32) / 2;
        Rectangle::new(Point::new(tail.top_left.x + dx, tail.top_left.y + dy), Size::new(fill, fill))
    }

    /// Box for the date label, centred horizontally halfway between hub and tail.
    pub const fn date_bounds(&self) -> Rectangle {
        let inner = (self.height / 2).saturating_sub(self.tail_gap + self.tail_thickness) as i32;
        Rectangle::new(
            Point::new(
                self.center.x - (DATE_WIDTH / 2) as i32,
                self.center.y + inner / 2 - (DATE_HEIGHT / 2) as i32,
            ),
            Size::new(DATE_WIDTH, DATE_HEIGHT),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_180_rectangular() {
        let m = DisplayMetrics::compute(&Screen::rectangular(180, 180));
        assert_eq!(m.tail_gap, 20);
        assert_eq!(m.tail_thickness, 10);
        assert_eq!(m.hour_gap, 10);
        assert_eq!(m.hour_back_length, 15);
        assert_eq!(m.minute_back_length, 22);
        assert_eq!(m.tail_radius, 70);
        assert_eq!(m.hour_radius, 50, "tail radius minus thickness minus hour gap");
        assert_eq!(m.minute_radius, 180);
        assert_eq!(m.center, Point::new(90, 90));
    }

    #[test]
    fn test_metrics_144x168() {
        let m = DisplayMetrics::compute(&Screen::rectangular(144, 168));
        assert_eq!(m.tail_gap, 16);
        assert_eq!(m.tail_thickness, 8);
        assert_eq!(m.hour_back_length, 12);
        assert_eq!(m.minute_back_length, 18);
        assert_eq!(m.tail_radius, 56);
        assert_eq!(m.hour_radius, 40);
        assert_eq!(m.minute_radius, 156);
        assert_eq!(m.center, Point::new(72, 84));
    }

    #[test]
    fn test_fixed_strokes_and_dots() {
        let m = DisplayMetrics::compute(&Screen::round(260));
        assert_eq!(m.minute_stroke_width, 2);
        assert_eq!(m.hour_stroke_width, 4);
        assert_eq!(m.minute_dot_radius, 4);
        assert_eq!(m.hour_dot_radius, 5);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let screen = Screen::rectangular(144, 168);
        assert_eq!(DisplayMetrics::compute(&screen), DisplayMetrics::compute(&screen));
    }

    #[test]
    fn test_scaled_lengths_non_decreasing() {
        let mut prev = DisplayMetrics::compute(&Screen::rectangular(90, 90));
        for w in 91..=400 {
            let m = DisplayMetrics::compute(&Screen::rectangular(w, w));
            assert!(m.tail_gap >= prev.tail_gap, "tail_gap at {w}");
            assert!(m.tail_thickness >= prev.tail_thickness, "tail_thickness at {w}");
            assert!(m.hour_back_length >= prev.hour_back_length, "hour_back_length at {w}");
            assert!(m.minute_back_length >= prev.minute_back_length, "minute_back_length at {w}");
            assert!(m.minute_radius >= prev.minute_radius, "minute_radius at {w}");
            prev = m;
        }
    }

    #[test]
    fn test_radii_grow_with_whole_gap_steps() {
        // Radii subtract truncated quotients, so compare on widths that divide evenly.
        let mut prev = DisplayMetrics::compute(&Screen::rectangular(90, 90));
        for w in (108..=396).step_by(18) {
            let m = DisplayMetrics::compute(&Screen::rectangular(w, w));
            assert!(m.tail_radius > prev.tail_radius, "tail_radius at {w}");
            assert!(m.hour_radius > prev.hour_radius, "hour_radius at {w}");
            prev = m;
        }
    }

    #[test]
    fn test_tail_bounds_and_mask() {
        let m = DisplayMetrics::compute(&Screen::rectangular(144, 168));
        assert_eq!(m.tail_bounds(), Rectangle::new(Point::new(16, 16), Size::new(112, 136)));
        assert_eq!(m.tail_mask_bounds(), Rectangle::new(Point::new(24, 24), Size::new(96, 120)));
    }

    #[test]
    fn test_tail_fill_bounds_centred_on_tail() {
        let m = DisplayMetrics::compute(&Screen::rectangular(144, 168));
        let fill = m.tail_fill_bounds();
        assert_eq!(fill.size, Size::new(248, 248));
        assert_eq!(fill.top_left, Point::new(16 - 68, 16 - 56));
        // Inscribed circle must reach every corner of the tail box.
        let tail = m.tail_bounds();
        let half_diag_sq = (tail.size.width.pow(2) + tail.size.height.pow(2)) / 4;
        assert!((fill.size.width / 2).pow(2) >= half_diag_sq);
    }

    #[test]
    fn test_date_bounds() {
        let m = DisplayMetrics::compute(&Screen::rectangular(180, 180));
        assert_eq!(m.date_bounds(), Rectangle::new(Point::new(75, 110), Size::new(30, 20)));
    }
}
