//! embedded-graphics adapter: paints [`Shape`]s and [`Frame`]s on any
//! [`DrawTarget`] whose color converts from [`Rgb888`].
//!
//! # Angle Conversion
//!
//! | Convention | Zero | Direction |
//! |------------|------|-----------|
//! | Face ([`TrigAngle`](crate::angle::TrigAngle)) | 12 o'clock | clockwise |
//! | embedded-graphics [`Angle`] | 3 o'clock | clockwise |
//!
//! so every start angle is shifted back by 90 degrees.
//!
//! # Radial Fills
//!
//! | Shape | Primitive |
//! |-------|-----------|
//! | full turn, inset covers radius | [`Circle`], filled |
//! | full turn, thin inset | [`Circle`], inside stroke |
//! | partial, inset covers radius | [`Sector`], filled |
//! | partial, thin inset | [`Arc`], inside stroke |
//!
//! Radial fills paint through a clipped view of the target so the oversized
//! sector used on rectangular panels never leaves the tail bounds.
//!
//! # Flat Framebuffers
//!
//! Tick frames only hold the regions that changed, and those regions overlap.
//! [`draw_dirty`] repaints the full scene whenever a frame is non-empty, which
//! is what a plain framebuffer needs. [`draw_frame`] paints a frame as is.
//!
//! The date label is not rasterized here: its text belongs to the host's font
//! stack. [`draw_layered`] and [`draw_dirty_with`] call back into the host at
//! the label's place in the z-order. See [`Frame::date`].

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc, Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, Sector, StrokeAlignment,
};

use crate::angle::TrigAngle;
use crate::face::{ClockFace, DateLabelView, Frame};
use crate::region::Region;
use crate::shape::Shape;

/// Offset from face angles (12 o'clock) to embedded-graphics angles (3 o'clock).
const QUARTER_TURN_DEGREES: f32 = 90.0;

/// Paint one shape.
pub fn draw_shape<D>(
    display: &mut D,
    shape: &Shape,
) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    if shape.is_empty() {
        return Ok(());
    }
    match *shape {
        Shape::Line { start, end, width, color } => Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color.into(), width))
            .draw(display),
        Shape::FilledRect { rect, color } => rect.into_styled(PrimitiveStyle::with_fill(color.into())).draw(display),
        // Fills the 2r square around the hub, `radius` pixels each side of it.
        Shape::FilledCircle { center, radius, color } => Circle::with_center(center, 2 * radius)
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(display),
        Shape::RadialFill {
            bounds,
            inset,
            start,
            full,
            clip,
            color,
            ..
        } => draw_radial(
            &mut display.clipped(&clip),
            bounds,
            inset,
            start,
            shape.sweep(),
            full,
            color.into(),
        ),
    }
}

fn draw_radial<D>(
    display: &mut D,
    bounds: Rectangle,
    inset: u32,
    start: TrigAngle,
    sweep: u32,
    full: bool,
    color: D::Color,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let diameter = bounds.size.width.min(bounds.size.height);
    let center = bounds.center();
    let solid = inset.saturating_mul(2) >= diameter;
    let style = if solid {
        PrimitiveStyle::with_fill(color)
    } else {
        PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(inset)
            .stroke_alignment(StrokeAlignment::Inside)
            .build()
    };

    if full {
        return Circle::with_center(center, diameter).into_styled(style).draw(display);
    }

    let angle_start = Angle::from_degrees(start.degrees() - QUARTER_TURN_DEGREES);
    let angle_sweep = Angle::from_degrees(TrigAngle::new(sweep).degrees());
    if solid {
        Sector::with_center(center, diameter, angle_start, angle_sweep)
            .into_styled(style)
            .draw(display)
    } else {
        Arc::with_center(center, diameter, angle_start, angle_sweep)
            .into_styled(style)
            .draw(display)
    }
}

/// Paint every shape in a frame, bottom to top.
///
/// This paints exactly what the frame holds. A partial frame from
/// [`ClockFace::on_tick`] is only correct on a compositor that keeps each
/// region on its own layer; flat framebuffers should use [`draw_dirty`].
pub fn draw_frame<D>(
    display: &mut D,
    frame: &Frame,
) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    draw_layered(display, frame, |_, _| Ok(()))
}

/// Paint a frame with the date label slotted in at its z-order, above the
/// tail and below the hands.
pub fn draw_layered<D, F>(
    display: &mut D,
    frame: &Frame,
    mut label: F,
) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
    F: FnMut(&mut D, &DateLabelView) -> Result<(), D::Error>,
{
    let mut pending = frame.date.as_ref();
    for command in &frame.commands {
        if command.region > Region::Date
            && let Some(date) = pending.take()
        {
            label(display, date)?;
        }
        draw_shape(display, &command.shape)?;
    }
    if let Some(date) = pending {
        label(display, date)?;
    }
    Ok(())
}

/// Bring a flat framebuffer up to date after an event.
///
/// Regions overlap: on rectangular panels the sweep is a solid pie that only
/// the mask trims back into a ring, and moved hands leave their old pixels
/// behind. A flat target cannot recomposite single layers, so any non-empty
/// `frame` repaints the whole scene of `face`. Returns whether anything was
/// painted.
pub fn draw_dirty<D>(
    display: &mut D,
    face: &ClockFace,
    frame: &Frame,
) -> Result<bool, D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    draw_dirty_with(display, face, frame, |_, _| Ok(()))
}

/// [`draw_dirty`] with a date label painter.
pub fn draw_dirty_with<D, F>(
    display: &mut D,
    face: &ClockFace,
    frame: &Frame,
    label: F,
) -> Result<bool, D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
    F: FnMut(&mut D, &DateLabelView) -> Result<(), D::Error>,
{
    if frame.is_empty() {
        return Ok(false);
    }
    draw_layered(display, &face.scene(), label)?;
    Ok(true)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::layout::Screen;
    use crate::region::DirtySet;
    use crate::style::StyleRecord;
    use crate::time::{ChangeMask, CivilTime};

    const TRACK: Rgb888 = Rgb888::GREEN;
    const MINUTE: Rgb888 = Rgb888::RED;
    const HOUR: Rgb888 = Rgb888::BLUE;
    const BACKGROUND: Rgb888 = Rgb888::WHITE;

    fn display() -> MockDisplay<Rgb888> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    fn painted(screen: Screen) -> MockDisplay<Rgb888> {
        let mut face = ClockFace::new(screen);
        face.on_tick(CivilTime::new(3, 59, 1), ChangeMask::ALL);
        face.on_style_changed(StyleRecord {
            background_color: BACKGROUND,
            minute_color: MINUTE,
            minute_tail_background_color: TRACK,
            hour_color: HOUR,
            ..StyleRecord::default()
        });
        let mut display = display();
        draw_frame(&mut display, &face.scene()).unwrap();
        display
    }

    #[test]
    fn test_rect_tail_ring_follows_panel_outline() {
        // 54x54: tail box (6,6) 42x42, three pixels thick.
        let display = painted(Screen::rectangular(54, 54));
        assert_eq!(display.get_pixel(Point::new(7, 30)), Some(MINUTE), "left edge of ring");
        assert_eq!(display.get_pixel(Point::new(7, 7)), Some(MINUTE), "ring reaches the corner");
        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(BACKGROUND), "outside the tail");
        assert_eq!(display.get_pixel(Point::new(15, 40)), Some(BACKGROUND), "mask trims the sweep");
    }

    #[test]
    fn test_round_tail_is_annulus() {
        let display = painted(Screen::round(54));
        assert_eq!(display.get_pixel(Point::new(7, 26)), Some(MINUTE), "on the ring");
        assert_eq!(display.get_pixel(Point::new(7, 7)), Some(BACKGROUND), "corner stays clear");
        assert_eq!(display.get_pixel(Point::new(15, 26)), Some(BACKGROUND), "inside the ring");
    }

    #[test]
    fn test_hub_shows_minute_dot() {
        let display = painted(Screen::rectangular(54, 54));
        assert_eq!(display.get_pixel(Point::new(27, 27)), Some(MINUTE));
    }

    #[test]
    fn test_tick_repaint_matches_fresh_scene() {
        for screen in [Screen::rectangular(54, 54), Screen::round(54)] {
            let mut face = ClockFace::new(screen);
            let mut display = display();
            let first = face.on_tick(CivilTime::new(3, 15, 1), ChangeMask::ALL);
            assert!(draw_dirty(&mut display, &face, &first).unwrap());

            let tick = face.on_tick(CivilTime::new(3, 16, 1), ChangeMask::MINUTE);
            assert_eq!(tick.regions, DirtySet::HANDS);
            assert!(draw_dirty(&mut display, &face, &tick).unwrap());

            let mut fresh = self::display();
            draw_frame(&mut fresh, &face.scene()).unwrap();
            assert_eq!(display, fresh, "{screen:?}");
            // Mask interior stays background after the sweep moves.
            assert_eq!(display.get_pixel(Point::new(35, 20)), Some(Rgb888::WHITE));
        }
    }

    #[test]
    fn test_empty_frame_leaves_display_alone() {
        let mut face = ClockFace::new(Screen::rectangular(54, 54));
        let mut display = display();
        let first = face.on_tick(CivilTime::new(3, 15, 1), ChangeMask::ALL);
        draw_dirty(&mut display, &face, &first).unwrap();
        let before = display.clone();

        let idle = face.on_tick(CivilTime::new(3, 15, 1), ChangeMask::NONE);
        assert!(!draw_dirty(&mut display, &face, &idle).unwrap());
        assert_eq!(display, before);
    }

    #[test]
    fn test_label_painted_between_tail_and_hands() {
        let mut face = ClockFace::new(Screen::rectangular(54, 54));
        let frame = face.on_tick(CivilTime::new(3, 15, 1), ChangeMask::ALL);
        let mut seen = std::vec::Vec::new();
        let mut display = display();
        draw_layered(&mut display, &frame, |d, label| {
            seen.push(label.text.clone());
            // Hands are still to come: the hub is only painted by the dots.
            assert_eq!(d.get_pixel(Point::new(27, 27)), Some(Rgb888::WHITE));
            Ok(())
        })
        .unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].as_str(), "01");
    }

    #[test]
    fn test_dot_is_two_radii_across() {
        let mut display = display();
        draw_shape(
            &mut display,
            &Shape::FilledCircle {
                center: Point::new(20, 20),
                radius: 5,
                color: HOUR,
            },
        )
        .unwrap();
        let row = (0..40).filter(|x| display.get_pixel(Point::new(*x, 20)).is_some()).count();
        assert_eq!(row, 10);
        assert_eq!(display.get_pixel(Point::new(16, 20)), Some(HOUR));
        assert_eq!(display.get_pixel(Point::new(25, 20)), Some(HOUR));
        assert_eq!(display.get_pixel(Point::new(15, 20)), None);
    }

    #[test]
    fn test_zero_radius_dot_draws_nothing() {
        let mut display = display();
        draw_shape(
            &mut display,
            &Shape::FilledCircle {
                center: Point::new(20, 20),
                radius: 0,
                color: HOUR,
            },
        )
        .unwrap();
        assert_eq!(display, MockDisplay::new());
    }

    #[test]
    fn test_empty_sweep_draws_nothing() {
        let rect = Rectangle::new(Point::new(4, 4), Size::new(20, 20));
        let shape = Shape::RadialFill {
            bounds: rect,
            inset: 10,
            start: TrigAngle::ZERO,
            end: TrigAngle::ZERO,
            full: false,
            clip: rect,
            color: MINUTE,
        };
        let mut display = display();
        draw_shape(&mut display, &shape).unwrap();
        assert_eq!(display, MockDisplay::new());
    }

    #[test]
    fn test_radial_fill_respects_clip() {
        let bounds = Rectangle::new(Point::zero(), Size::new(40, 40));
        let clip = Rectangle::new(Point::new(10, 10), Size::new(20, 20));
        let shape = Shape::RadialFill {
            bounds,
            inset: 20,
            start: TrigAngle::ZERO,
            end: TrigAngle::ZERO,
            full: true,
            clip,
            color: MINUTE,
        };
        let mut display = display();
        draw_shape(&mut display, &shape).unwrap();
        assert_eq!(display.get_pixel(Point::new(20, 20)), Some(MINUTE));
        assert_eq!(display.get_pixel(Point::new(5, 20)), None);
        assert_eq!(display.affected_area(), clip);
    }

    #[test]
    fn test_line_and_rect() {
        let mut display = display();
        draw_shape(
            &mut display,
            &Shape::FilledRect {
                rect: Rectangle::new(Point::new(1, 1), Size::new(3, 3)),
                color: BACKGROUND,
            },
        )
        .unwrap();
        draw_shape(
            &mut display,
            &Shape::Line {
                start: Point::new(0, 10),
                end: Point::new(9, 10),
                width: 1,
                color: HOUR,
            },
        )
        .unwrap();
        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(BACKGROUND));
        assert_eq!(display.get_pixel(Point::new(5, 10)), Some(HOUR));
        assert_eq!(display.get_pixel(Point::new(5, 11)), None);
    }
}
