//! Style presets cycled with the `S` key.
//!
//! Each preset is delivered the way a phone configuration page would send it:
//! a dictionary of message key names and raw integer values, merged into the
//! current style.

use modernesque::{StyleKey, StyleUpdate};

/// A named configuration message.
pub struct Preset {
    pub name: &'static str,
    pub settings: &'static [(&'static str, i32)],
}

impl Preset {
    /// Build the partial update this preset sends. Unknown keys are skipped.
    pub fn update(&self) -> StyleUpdate {
        let mut update = StyleUpdate::new();
        for &(name, raw) in self.settings {
            if let Some(key) = StyleKey::from_name(name) {
                update.set(key, raw);
            }
        }
        update
    }
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "Classic",
        settings: &[
            ("BACKGROUND_COLOR", 0xFF_FFFF),
            ("MINUTE_BACKGROUND_COLOR", 0xAA_AAAA),
            ("MINUTE_COLOR", 0x00_0000),
            ("HOUR_COLOR", 0x00_0000),
            ("DATE_COLOR", 0x00_0000),
        ],
    },
    Preset {
        name: "Night",
        settings: &[
            ("BACKGROUND_COLOR", 0x00_0000),
            ("MINUTE_BACKGROUND_COLOR", 0x55_5555),
            ("MINUTE_COLOR", 0xFF_AA00),
            ("HOUR_COLOR", 0xFF_FFFF),
            ("DATE_COLOR", 0xAA_AAAA),
        ],
    },
    Preset {
        name: "Ocean",
        settings: &[
            ("BACKGROUND_COLOR", 0x00_0055),
            ("MINUTE_BACKGROUND_COLOR", 0x00_55AA),
            ("MINUTE_COLOR", 0x00_FFFF),
            ("HOUR_COLOR", 0xFF_FFFF),
            ("DATE_COLOR", 0x55_FFFF),
        ],
    },
    Preset {
        // Upper byte carries alpha on some hosts and must be ignored.
        name: "Sunset",
        settings: &[
            ("BACKGROUND_COLOR", 0xFF_FF_AA_55_u32 as i32),
            ("MINUTE_BACKGROUND_COLOR", 0xFF_55_00),
            ("MINUTE_COLOR", 0xAA_00_00),
            ("HOUR_COLOR", 0x55_00_00),
            ("DATE_COLOR", 0xAA_00_00),
        ],
    },
];
