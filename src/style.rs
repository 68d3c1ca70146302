//! User style settings and their defaults.
//!
//! The engine never sees how settings were stored or transmitted. It gets a
//! fully resolved [`StyleRecord`], or a partial [`StyleUpdate`] built from a
//! configuration message where only the keys present should overwrite the
//! stored values.
//!
//! # Defaults
//!
//! | Setting | Color panel | Monochrome panel |
//! |---------|-------------|------------------|
//! | Background | white | white |
//! | Tail track | light gray `0xAAAAAA` | white |
//! | Minute hand and sweep | black | black |
//! | Hour hand | black | black |
//! | Date | black | black |
//! | Show date | yes | yes |

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{BLACK, LIGHT_GRAY, Palette, WHITE, from_hex, to_hex};

/// Resolved style for one repaint cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StyleRecord {
    pub background_color: Rgb888,
    pub minute_color: Rgb888,
    pub minute_tail_background_color: Rgb888,
    pub hour_color: Rgb888,
    pub date_color: Rgb888,
    pub show_date: bool,
}

impl StyleRecord {
    /// Documented defaults for the given panel.
    pub const fn defaults(palette: Palette) -> Self {
        Self {
            background_color: WHITE,
            minute_color: BLACK,
            minute_tail_background_color: match palette {
                Palette::Color => LIGHT_GRAY,
                Palette::Monochrome => WHITE,
            },
            hour_color: BLACK,
            date_color: BLACK,
            show_date: true,
        }
    }

    /// Overwrite the fields present in `update`.
    ///
    /// Returns `true` if any field actually changed value.
    pub fn apply(
        &mut self,
        update: &StyleUpdate,
    ) -> bool {
        let before = *self;
        if let Some(c) = update.background_color {
            self.background_color = c;
        }
        if let Some(c) = update.minute_color {
            self.minute_color = c;
        }
        if let Some(c) = update.minute_tail_background_color {
            self.minute_tail_background_color = c;
        }
        if let Some(c) = update.hour_color {
            self.hour_color = c;
        }
        if let Some(c) = update.date_color {
            self.date_color = c;
        }
        if let Some(show) = update.show_date {
            self.show_date = show;
        }
        *self != before
    }

    /// Current value of one setting in its raw message form: `0xRRGGBB` for
    /// colors, `1`/`0` for `ShowDate`. The inverse of [`StyleUpdate::set`].
    pub fn get(
        &self,
        key: StyleKey,
    ) -> i32 {
        let color = match key {
            StyleKey::BackgroundColor => self.background_color,
            StyleKey::MinuteBackgroundColor => self.minute_tail_background_color,
            StyleKey::MinuteColor => self.minute_color,
            StyleKey::HourColor => self.hour_color,
            StyleKey::DateColor => self.date_color,
            StyleKey::ShowDate => return i32::from(self.show_date),
        };
        to_hex(color) as i32
    }
}

impl Default for StyleRecord {
    fn default() -> Self { Self::defaults(Palette::Color) }
}

/// Settings a configuration message can carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum StyleKey {
    BackgroundColor,
    MinuteBackgroundColor,
    MinuteColor,
    HourColor,
    DateColor,
    ShowDate,
}

impl StyleKey {
    pub const ALL: [Self; 6] = [
        Self::BackgroundColor,
        Self::MinuteBackgroundColor,
        Self::MinuteColor,
        Self::HourColor,
        Self::DateColor,
        Self::ShowDate,
    ];

    /// Message key name as used by the settings page.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BackgroundColor => "BACKGROUND_COLOR",
            Self::MinuteBackgroundColor => "MINUTE_BACKGROUND_COLOR",
            Self::MinuteColor => "MINUTE_COLOR",
            Self::HourColor => "HOUR_COLOR",
            Self::DateColor => "DATE_COLOR",
            Self::ShowDate => "SHOW_DATE",
        }
    }

    /// Look a key up by its message name.
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|k| k.name() == name) }
}

/// Partial style, e.g. from a configuration message. `None` keeps the stored value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StyleUpdate {
    pub background_color: Option<Rgb888>,
    pub minute_color: Option<Rgb888>,
    pub minute_tail_background_color: Option<Rgb888>,
    pub hour_color: Option<Rgb888>,
    pub date_color: Option<Rgb888>,
    pub show_date: Option<bool>,
}

impl StyleUpdate {
    pub const fn new() -> Self {
        Self {
            background_color: None,
            minute_color: None,
            minute_tail_background_color: None,
            hour_color: None,
            date_color: None,
            show_date: None,
        }
    }

    /// Set one key from its raw integer value: `0xRRGGBB` for colors,
    /// non-zero for `ShowDate`.
    pub fn set(
        &mut self,
        key: StyleKey,
        raw: i32,
    ) -> &mut Self {
        let color = from_hex(raw as u32);
        match key {
            StyleKey::BackgroundColor => self.background_color = Some(color),
            StyleKey::MinuteBackgroundColor => self.minute_tail_background_color = Some(color),
            StyleKey::MinuteColor => self.minute_color = Some(color),
            StyleKey::HourColor => self.hour_color = Some(color),
            StyleKey::DateColor => self.date_color = Some(color),
            StyleKey::ShowDate => self.show_date = Some(raw != 0),
        }
        self
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        [
            self.background_color.is_some(),
            self.minute_color.is_some(),
            self.minute_tail_background_color.is_some(),
            self.hour_color.is_some(),
            self.date_color.is_some(),
            self.show_date.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl From<StyleRecord> for StyleUpdate {
    fn from(style: StyleRecord) -> Self {
        Self {
            background_color: Some(style.background_color),
            minute_color: Some(style.minute_color),
            minute_tail_background_color: Some(style.minute_tail_background_color),
            hour_color: Some(style.hour_color),
            date_color: Some(style.date_color),
            show_date: Some(style.show_date),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
