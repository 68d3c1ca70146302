//! Repaint regions and dirty tracking.
//!
//! The face is a fixed stack of regions. Each region has exactly one
//! generator, and a region is only regenerated when something it depends on
//! changed:
//!
//! | Region | Depends on | Dirtied by |
//! |--------|-----------|------------|
//! | Background | style | style change |
//! | Tail track | style | style change |
//! | Tail sweep | minute angle, style | minute/hour tick, style change |
//! | Tail mask | style (rectangular panels only) | style change |
//! | Date | day, style | day tick, style change |
//! | Hour hand | hour angle, style | minute/hour tick, style change |
//! | Hour dot | style | style change |
//! | Minute hand | minute angle, style | minute/hour tick, style change |
//! | Minute dot | style | style change |
//!
//! # Z-Order
//!
//! [`Region::ALL`] lists regions bottom to top. The tail regions must stay in
//! track, sweep, mask order: on rectangular panels the mask is what trims the
//! oversized sweep back into a ring.

/// A repaintable area of the face. Ordering is z-order, bottom first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Region {
    Background = 0,
    TailTrack = 1,
    TailSweep = 2,
    TailMask = 3,
    Date = 4,
    HourHand = 5,
    HourDot = 6,
    MinuteHand = 7,
    MinuteDot = 8,
}

/// Number of regions on the face.
pub const REGION_COUNT: usize = 9;

impl Region {
    /// Every region, bottom to top.
    pub const ALL: [Self; REGION_COUNT] = [
        Self::Background,
        Self::TailTrack,
        Self::TailSweep,
        Self::TailMask,
        Self::Date,
        Self::HourHand,
        Self::HourDot,
        Self::MinuteHand,
        Self::MinuteDot,
    ];

    #[inline]
    const fn bit(self) -> u16 { 1 << self as u8 }
}

/// Set of regions awaiting repaint.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DirtySet(u16);

impl DirtySet {
    /// Nothing to repaint.
    pub const EMPTY: Self = Self(0);

    /// Everything must be repainted (first frame, style change).
    pub const ALL: Self = Self((1 << REGION_COUNT) - 1);

    /// Regions that follow the hands.
    pub const HANDS: Self = Self(Region::TailSweep.bit() | Region::HourHand.bit() | Region::MinuteHand.bit());

    /// Only the date label.
    pub const DATE: Self = Self(Region::Date.bit());

    #[inline]
    pub const fn contains(
        self,
        region: Region,
    ) -> bool {
        self.0 & region.bit() != 0
    }

    #[inline]
    pub fn insert(
        &mut self,
        region: Region,
    ) {
        self.0 |= region.bit();
    }

    #[inline]
    pub const fn union(
        self,
        other: Self,
    ) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    #[inline]
    pub const fn len(self) -> usize { self.0.count_ones() as usize }

    /// Take the current set, leaving it empty.
    #[inline]
    pub fn take(&mut self) -> Self { core::mem::take(self) }

    /// Dirty regions in z-order.
    pub fn iter(self) -> impl Iterator<Item = Region> { Region::ALL.into_iter().filter(move |r| self.contains(*r)) }
}

impl FromIterator<Region> for DirtySet {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for region in iter {
            set.insert(region);
        }
        set
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
