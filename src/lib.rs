//! Modernesque analog clock face for small round and rectangular displays.
//!
//! The face is a white dial with two hands meeting at a pivot dot, a "tail"
//! track around the edge that fills clockwise from 12 o'clock to the minute
//! hand, and an optional two-digit day-of-month label below the hub.
//!
//! The crate computes geometry and decides what to repaint; it does not own a
//! framebuffer. Hosts feed time and style events into a [`ClockFace`] and
//! paint the returned [`Frame`], either with the embedded-graphics adapter in
//! [`render`] or with their own compositor.
//!
//! - [`layout`]: display metrics derived from the panel size
//! - [`angle`]: fixed-point clockwise angles and polar projection
//! - [`time`]: civil time, change masks and the cached angles/date
//! - [`style`]: colors and date visibility, plus partial config updates
//! - [`hands`], [`tail`]: pure shape generators
//! - [`region`]: repaint regions, z-order and dirty tracking
//! - [`face`]: the event-driven orchestrator
//! - [`render`]: embedded-graphics painting
//! - [`log`]: bounded event log, optionally mirrored to `defmt`
//!
//! # Example
//!
//! ```ignore
//! let mut face = ClockFace::new(Screen::round(180));
//! let frame = face.on_tick(CivilTime::new(10, 8, 14), ChangeMask::ALL);
//! render::draw_dirty(&mut display, &face, &frame)?;
//!
//! // Later ticks only name what changed; draw_dirty recomposites the scene.
//! let frame = face.on_tick(CivilTime::new(10, 9, 14), ChangeMask::MINUTE);
//! render::draw_dirty(&mut display, &face, &frame)?;
//! ```
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free: frames and labels use
//! `heapless` containers and trigonometry uses `micromath`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod angle;
pub mod colors;
pub mod config;
pub mod face;
pub mod hands;
pub mod layout;
pub mod log;
pub mod region;
pub mod render;
pub mod shape;
pub mod style;
pub mod tail;
pub mod time;

// Re-export commonly used items
pub use angle::{TRIG_MAX_ANGLE, TrigAngle};
pub use colors::Palette;
pub use face::{ClockFace, DateLabelView, DrawCommand, Frame};
pub use layout::{DisplayMetrics, DisplayShape, Screen};
pub use region::{DirtySet, Region};
pub use shape::Shape;
pub use style::{StyleKey, StyleRecord, StyleUpdate};
pub use time::{ChangeMask, CivilTime, TimeAngles};
