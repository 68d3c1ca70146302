//! Simulated civil clock driven by key presses and auto-advance.
//!
//! The clock keeps a full calendar date so month and year rollovers produce
//! the same change masks a watch's time service would deliver.

use modernesque::{ChangeMask, CivilTime};

/// How far one advance moves the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Minute,
    Hour,
    Day,
}

/// Calendar clock with minute resolution.
#[derive(Clone, Copy, Debug)]
pub struct SimClock {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl SimClock {
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Time as the face sees it.
    pub const fn now(&self) -> CivilTime { CivilTime::new(self.hour, self.minute, self.day) }

    pub const fn month(&self) -> u8 { self.month }

    pub const fn year(&self) -> u16 { self.year }

    /// Move forward one step and report which fields changed.
    pub fn advance(
        &mut self,
        step: Step,
    ) -> ChangeMask {
        let prev = *self;
        match step {
            Step::Minute => self.add_minute(),
            Step::Hour => self.add_hour(),
            Step::Day => self.add_day(),
        }

        let mut mask = ChangeMask::between(prev.now(), self.now());
        if prev.month != self.month {
            mask = mask | ChangeMask::MONTH;
        }
        if prev.year != self.year {
            mask = mask | ChangeMask::YEAR;
        }
        mask
    }

    fn add_minute(&mut self) {
        self.minute += 1;
        if self.minute == 60 {
            self.minute = 0;
            self.add_hour();
        }
    }

    fn add_hour(&mut self) {
        self.hour += 1;
        if self.hour == 24 {
            self.hour = 0;
            self.add_day();
        }
    }

    fn add_day(&mut self) {
        self.day += 1;
        if self.day > days_in_month(self.year, self.month) {
            self.day = 1;
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
            }
        }
    }
}

const fn is_leap(year: u16) -> bool { (year.is_multiple_of(4) && !year.is_multiple_of(100)) || year.is_multiple_of(400) }

const fn days_in_month(
    year: u16,
    month: u8,
) -> u8 {
    match month {
        2 if is_leap(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
