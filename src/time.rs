//! Wall-clock time to hand angles and date label.
//!
//! [`TimeMapper`] caches the last angles and label and only recomputes what
//! the host says changed. Recomputing too often is harmless; skipping a
//! recompute when a field did change would leave a stale hand, so the mask
//! handling errs towards recomputing (see [`ChangeMask::touches_day`]).

use core::fmt::Write;

use heapless::String;

use crate::angle::TrigAngle;
use crate::config::DATE_LEN;
use crate::region::DirtySet;

/// Civil time as delivered by the host, already validated.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CivilTime {
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// Day of month, 1..=31
    pub day: u8,
}

impl CivilTime {
    pub const fn new(
        hour: u8,
        minute: u8,
        day: u8,
    ) -> Self {
        Self { hour, minute, day }
    }
}

/// Which civil-time fields changed since the previous delivery.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ChangeMask(u8);

impl ChangeMask {
    pub const NONE: Self = Self(0);
    pub const MINUTE: Self = Self(1 << 0);
    pub const HOUR: Self = Self(1 << 1);
    pub const DAY: Self = Self(1 << 2);
    pub const MONTH: Self = Self(1 << 3);
    pub const YEAR: Self = Self(1 << 4);
    pub const ALL: Self = Self(0b1_1111);

    #[inline]
    pub const fn union(
        self,
        other: Self,
    ) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    /// Hour or minute changed, so the hands move.
    #[inline]
    pub const fn touches_hands(self) -> bool { self.intersects(Self::MINUTE.union(Self::HOUR)) }

    /// The date label may be stale. Month and year rollovers count even if
    /// the host forgot to flag the day.
    #[inline]
    pub const fn touches_day(self) -> bool { self.intersects(Self::DAY.union(Self::MONTH).union(Self::YEAR)) }

    /// Mask describing the step from `prev` to `next`.
    pub fn between(
        prev: CivilTime,
        next: CivilTime,
    ) -> Self {
        let mut mask = Self::NONE;
        if prev.minute != next.minute {
            mask = mask.union(Self::MINUTE);
        }
        if prev.hour != next.hour {
            mask = mask.union(Self::HOUR);
        }
        if prev.day != next.day {
            mask = mask.union(Self::DAY);
        }
        mask
    }
}

impl core::ops::BitOr for ChangeMask {
    type Output = Self;

    fn bitor(
        self,
        rhs: Self,
    ) -> Self {
        self.union(rhs)
    }
}

/// Hand angles for one minute of the day.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TimeAngles {
    pub hour: TrigAngle,
    pub minute: TrigAngle,
}

impl TimeAngles {
    /// Minute hand steps once a minute; the hour hand moves continuously,
    /// advancing with every minute rather than jumping on the hour.
    pub const fn from_time(
        hour: u8,
        minute: u8,
    ) -> Self {
        let minute = minute as u32 % 60;
        let hour = hour as u32 % 12;
        Self {
            hour: TrigAngle::from_fraction(hour * 60 + minute, 12 * 60),
            minute: TrigAngle::from_fraction(minute, 60),
        }
    }
}

/// Zero-padded day of month.
pub type DateLabel = String<DATE_LEN>;

/// Format a day of month as two digits.
pub fn date_label(day: u8) -> DateLabel {
    let mut label = DateLabel::new();
    // Days are pre-validated to 1..=31, which always fits.
    write!(label, "{day:02}").ok();
    label
}

/// Caches angles and the date label between ticks.
#[derive(Clone, Debug, Default)]
pub struct TimeMapper {
    angles: TimeAngles,
    date: DateLabel,
}

impl TimeMapper {
    pub fn new() -> Self { Self::default() }

    #[inline]
    pub const fn angles(&self) -> TimeAngles { self.angles }

    #[inline]
    pub fn date(&self) -> &str { self.date.as_str() }

    /// Apply a tick and report which regions went stale.
    pub fn update(
        &mut self,
        time: CivilTime,
        changed: ChangeMask,
    ) -> DirtySet {
        let mut dirty = DirtySet::EMPTY;
        if changed.touches_hands() {
            self.angles = TimeAngles::from_time(time.hour, time.minute);
            dirty = dirty.union(DirtySet::HANDS);
        }
        if changed.touches_day() {
            self.date = date_label(time.day);
            dirty = dirty.union(DirtySet::DATE);
        }
        dirty
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
