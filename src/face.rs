//! Clock face state and repaint orchestration.
//!
//! [`ClockFace`] owns everything that changes at runtime: the resolved style,
//! the cached angles and date label, the dirty set and the event log. Hosts
//! drive it with two events and paint whatever [`Frame`] comes back:
//!
//! - [`ClockFace::on_style_changed`] / [`ClockFace::on_config`]: new colors
//!   or visibility. Every region is repainted.
//! - [`ClockFace::on_tick`]: civil time plus the fields that changed. Only
//!   regions depending on those fields are repainted.
//!
//! Everything runs to completion on the caller's thread; there is no polling
//! and no interior mutability. Generators only ever see shared references, so
//! a repaint always uses one consistent snapshot of style and time.
//!
//! # First Paint
//!
//! A new face starts with the default style for its palette and every region
//! dirty. The host delivers its first tick with [`ChangeMask::ALL`], which
//! primes the angles and date, then paints the returned frame.
//! [`render::draw_dirty`](crate::render::draw_dirty) does this for any
//! embedded-graphics target.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::hands::{hour_dot, hour_hand, minute_dot, minute_hand};
use crate::layout::{DisplayMetrics, DisplayShape, Screen};
use crate::log::EventLog;
use crate::region::{DirtySet, Region};
use crate::shape::Shape;
use crate::style::{StyleRecord, StyleUpdate};
use crate::tail::TailArc;
use crate::time::{ChangeMask, CivilTime, DateLabel, TimeAngles, TimeMapper};
use crate::{log_debug, log_info, log_warn};

/// Shapes a single frame can hold: one per region except the date label.
pub const MAX_COMMANDS: usize = 8;

/// One generated shape and the region it belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DrawCommand {
    pub region: Region,
    pub shape: Shape,
}

/// What the external text component needs to show the date.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DateLabelView {
    pub text: DateLabel,
    pub bounds: Rectangle,
    pub color: Rgb888,
    pub visible: bool,
}

/// Output of one repaint cycle, bottom to top.
///
/// Tick frames hold only the regions that changed. Those regions overlap the
/// ones below and above them, so flat framebuffers paint through
/// [`render::draw_dirty`](crate::render::draw_dirty) rather than the frame
/// alone.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Frame {
    /// Regions this frame covers.
    pub regions: DirtySet,
    pub commands: Vec<DrawCommand, MAX_COMMANDS>,
    /// Present only when the date region was repainted.
    pub date: Option<DateLabelView>,
}

impl Frame {
    /// Nothing to paint.
    #[inline]
    pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    /// Shape generated for `region`, if any.
    pub fn shape(
        &self,
        region: Region,
    ) -> Option<&Shape> {
        self.commands.iter().find(|c| c.region == region).map(|c| &c.shape)
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> { self.commands.iter().map(|c| &c.shape) }
}

/// The clock face engine.
pub struct ClockFace {
    screen: Screen,
    metrics: DisplayMetrics,
    style: StyleRecord,
    time: TimeMapper,
    dirty: DirtySet,
    log: EventLog,
}

impl ClockFace {
    /// Lay out the face for `screen` with the default style.
    pub fn new(screen: Screen) -> Self {
        let metrics = DisplayMetrics::compute(&screen);
        let mut face = Self {
            screen,
            metrics,
            style: StyleRecord::defaults(screen.palette),
            time: TimeMapper::new(),
            dirty: DirtySet::ALL,
            log: EventLog::new(),
        };
        log_info!(
            face.log,
            "Face {}x{} {}",
            metrics.width,
            metrics.height,
            match screen.shape {
                DisplayShape::Round => "round",
                DisplayShape::Rectangular => "rect",
            }
        );
        log_debug!(
            face.log,
            "Tail gap {} thick {} r {}",
            metrics.tail_gap,
            metrics.tail_thickness,
            metrics.tail_radius
        );
        face
    }

    #[inline]
    pub const fn screen(&self) -> &Screen { &self.screen }

    #[inline]
    pub const fn metrics(&self) -> &DisplayMetrics { &self.metrics }

    #[inline]
    pub const fn style(&self) -> &StyleRecord { &self.style }

    #[inline]
    pub const fn angles(&self) -> TimeAngles { self.time.angles() }

    #[inline]
    pub fn date(&self) -> &str { self.time.date() }

    /// Regions waiting for the next [`take_frame`](Self::take_frame).
    #[inline]
    pub const fn dirty(&self) -> DirtySet { self.dirty }

    /// Recent engine events; drain with [`EventLog::pop`].
    #[inline]
    pub fn log_mut(&mut self) -> &mut EventLog { &mut self.log }

    /// Replace the style and repaint everything.
    pub fn on_style_changed(
        &mut self,
        style: StyleRecord,
    ) -> Frame {
        self.style = style;
        self.dirty = DirtySet::ALL;
        log_info!(self.log, "Style applied, date {}", if style.show_date { "shown" } else { "hidden" });
        self.take_frame()
    }

    /// Merge a partial configuration message.
    ///
    /// Returns `None` if no setting actually changed, so nothing needs painting.
    pub fn on_config(
        &mut self,
        update: &StyleUpdate,
    ) -> Option<Frame> {
        if update.is_empty() {
            log_warn!(self.log, "Config: empty message");
            return None;
        }
        let mut style = self.style;
        if !style.apply(update) {
            log_debug!(self.log, "Config: {} keys, no change", update.len());
            return None;
        }
        log_info!(self.log, "Config: {} keys", update.len());
        Some(self.on_style_changed(style))
    }

    /// Advance to `time`; `changed` names the fields that differ from the last tick.
    pub fn on_tick(
        &mut self,
        time: CivilTime,
        changed: ChangeMask,
    ) -> Frame {
        let stale = self.time.update(time, changed);
        if stale.contains(Region::HourHand) {
            log_debug!(self.log, "Hands {}:{}", time.hour, time.minute);
        }
        if stale.contains(Region::Date) {
            log_info!(self.log, "Date {}", self.time.date());
        }
        self.dirty = self.dirty.union(stale);
        self.take_frame()
    }

    /// Generate every dirty region and clear the dirty set.
    pub fn take_frame(&mut self) -> Frame {
        let regions = self.dirty.take();
        self.frame_for(regions)
    }

    /// Generate every region regardless of the dirty set, for compositors
    /// that repaint the whole surface.
    pub fn scene(&self) -> Frame { self.frame_for(DirtySet::ALL) }

    fn frame_for(
        &self,
        regions: DirtySet,
    ) -> Frame {
        let mut frame = Frame {
            regions,
            ..Frame::default()
        };
        for region in regions.iter() {
            if region == Region::Date {
                frame.date = Some(self.date_view());
            } else if let Some(shape) = self.generate(region) {
                // At most one shape per non-date region, which always fits.
                frame.commands.push(DrawCommand { region, shape }).ok();
            }
        }
        frame
    }

    fn generate(
        &self,
        region: Region,
    ) -> Option<Shape> {
        let m = &self.metrics;
        let s = &self.style;
        let angles = self.time.angles();
        let tail = self.screen.shape;
        match region {
            Region::Background => Some(Shape::FilledRect {
                rect: m.bounds(),
                color: s.background_color,
            }),
            Region::TailTrack => Some(tail.track(m, s)),
            Region::TailSweep => Some(tail.sweep(angles.minute, m, s)),
            Region::TailMask => tail.mask(m, s),
            Region::Date => None,
            Region::HourHand => Some(hour_hand(angles.hour, m, s)),
            Region::HourDot => Some(hour_dot(m, s)),
            Region::MinuteHand => Some(minute_hand(angles.minute, m, s)),
            Region::MinuteDot => Some(minute_dot(m, s)),
        }
    }

    fn date_view(&self) -> DateLabelView {
        let mut text = DateLabel::new();
        text.push_str(self.time.date()).ok();
        DateLabelView {
            text,
            bounds: self.metrics.date_bounds(),
            color: self.style.date_color,
            visible: self.style.show_date,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;
    use crate::colors::Palette;
    use crate::style::StyleKey;

    fn started(screen: Screen) -> ClockFace {
        let mut face = ClockFace::new(screen);
        face.on_tick(CivilTime::new(10, 8, 14), ChangeMask::ALL);
        face
    }

    #[test]
    fn test_new_face_is_fully_dirty_with_defaults() {
        let face = ClockFace::new(Screen::rectangular(144, 168));
        assert_eq!(face.dirty(), DirtySet::ALL);
        assert_eq!(*face.style(), StyleRecord::defaults(Palette::Color));
        assert!(face.style().show_date);
    }

    #[test]
    fn test_first_tick_paints_every_region() {
        let mut face = ClockFace::new(Screen::rectangular(144, 168));
        let frame = face.on_tick(CivilTime::new(10, 8, 14), ChangeMask::ALL);
        assert_eq!(frame.regions, DirtySet::ALL);
        assert_eq!(frame.commands.len(), 8, "every region but the date has a shape");
        let date = frame.date.expect("date label");
        assert_eq!(date.text.as_str(), "14");
        assert!(date.visible);
        assert!(face.dirty().is_empty());
    }

    #[test]
    fn test_commands_in_z_order() {
        let face = started(Screen::rectangular(144, 168));
        let regions: std::vec::Vec<Region> = face.scene().commands.iter().map(|c| c.region).collect();
        assert_eq!(
            regions,
            vec![
                Region::Background,
                Region::TailTrack,
                Region::TailSweep,
                Region::TailMask,
                Region::HourHand,
                Region::HourDot,
                Region::MinuteHand,
                Region::MinuteDot,
            ]
        );
    }

    #[test]
    fn test_round_scene_has_no_mask() {
        let face = started(Screen::round(180));
        let scene = face.scene();
        assert!(scene.shape(Region::TailMask).is_none());
        assert_eq!(scene.commands.len(), 7);
    }

    #[test]
    fn test_day_only_tick_repaints_only_date() {
        let mut face = started(Screen::rectangular(144, 168));
        let frame = face.on_tick(CivilTime::new(10, 8, 15), ChangeMask::DAY);
        assert_eq!(frame.regions, DirtySet::DATE);
        assert!(frame.commands.is_empty(), "no hand, dot or tail shapes");
        assert_eq!(frame.date.map(|d| d.text), Some(crate::time::date_label(15)));
    }

    #[test]
    fn test_minute_tick_repaints_hands_and_sweep() {
        let mut face = started(Screen::rectangular(144, 168));
        let frame = face.on_tick(CivilTime::new(10, 9, 14), ChangeMask::MINUTE);
        assert_eq!(frame.regions, DirtySet::HANDS);
        assert!(frame.shape(Region::TailSweep).is_some());
        assert!(frame.shape(Region::HourHand).is_some());
        assert!(frame.shape(Region::MinuteHand).is_some());
        assert!(frame.shape(Region::HourDot).is_none());
        assert!(frame.date.is_none());
        assert_eq!(face.angles(), TimeAngles::from_time(10, 9));
    }

    #[test]
    fn test_empty_tick_paints_nothing() {
        let mut face = started(Screen::rectangular(144, 168));
        assert!(face.on_tick(CivilTime::new(10, 8, 14), ChangeMask::NONE).is_empty());
    }

    #[test]
    fn test_style_change_recolors_everything_including_dots() {
        let mut face = started(Screen::rectangular(144, 168));
        let style = StyleRecord {
            hour_color: Rgb888::RED,
            minute_color: Rgb888::BLUE,
            background_color: Rgb888::BLACK,
            show_date: false,
            ..StyleRecord::default()
        };
        let frame = face.on_style_changed(style);
        assert_eq!(frame.regions, DirtySet::ALL);
        assert_eq!(frame.shape(Region::HourDot).map(Shape::color), Some(Rgb888::RED));
        assert_eq!(frame.shape(Region::MinuteDot).map(Shape::color), Some(Rgb888::BLUE));
        assert_eq!(frame.shape(Region::Background).map(Shape::color), Some(Rgb888::BLACK));
        assert_eq!(frame.shape(Region::TailMask).map(Shape::color), Some(Rgb888::BLACK));
        let date = frame.date.expect("date repainted on style change");
        assert!(!date.visible);
        assert_eq!(date.text.as_str(), "14", "cached label survives a style change");
    }

    #[test]
    fn test_config_merge_only_repaints_on_change() {
        let mut face = started(Screen::rectangular(144, 168));
        let mut update = StyleUpdate::new();
        update.set(StyleKey::HourColor, 0x000000);
        assert!(face.on_config(&update).is_none(), "same value");

        update.set(StyleKey::DateColor, 0xFF0000);
        let frame = face.on_config(&update).expect("date color changed");
        assert_eq!(frame.date.map(|d| d.color), Some(Rgb888::RED));
        assert_eq!(face.style().hour_color, Rgb888::BLACK);
    }

    #[test]
    fn test_empty_config_is_ignored() {
        let mut face = started(Screen::round(180));
        assert!(face.on_config(&StyleUpdate::new()).is_none());
        assert_eq!(face.log_mut().iter().last().map(|e| e.level), Some(crate::log::LogLevel::Warn));
    }

    #[test]
    fn test_sweep_empty_on_the_hour() {
        let mut face = started(Screen::round(180));
        let frame = face.on_tick(CivilTime::new(11, 0, 14), ChangeMask::MINUTE | ChangeMask::HOUR);
        assert!(frame.shape(Region::TailSweep).is_some_and(Shape::is_empty));
    }

    #[test]
    fn test_events_are_logged() {
        let mut face = started(Screen::round(180));
        face.on_style_changed(StyleRecord::default());
        let messages: std::vec::Vec<&str> = face.log_mut().iter().map(|e| e.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.starts_with("Face 180x180 round")));
        assert!(messages.iter().any(|m| *m == "Date 14"));
        assert!(messages.iter().any(|m| m.starts_with("Style applied")));
    }

    #[test]
    fn test_monochrome_defaults() {
        let face = ClockFace::new(Screen::rectangular(144, 168).with_palette(Palette::Monochrome));
        assert_eq!(face.style().minute_tail_background_color, Rgb888::WHITE);
    }
}
