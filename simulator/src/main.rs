//! Modernesque clock face simulator for desktop platforms.
//!
//! Runs the face engine against a simulated clock using the
//! embedded-graphics-simulator crate.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `M` | advance one minute |
//! | `H` | advance one hour |
//! | `D` | advance one day |
//! | `S` | next style preset |
//! | `T` | toggle the date label |
//! | `Space` | toggle auto-advance (one minute per tick) |
//!
//! Pass `--round` to simulate a circular panel.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod clock;
mod label;
mod presets;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use modernesque::render::draw_dirty_with;
use modernesque::{ChangeMask, ClockFace, Frame, Screen, StyleKey, StyleRecord, StyleUpdate};

use crate::clock::{SimClock, Step};
use crate::label::draw_date_label;
use crate::presets::PRESETS;
use crate::timing::{AUTO_ADVANCE_STEP, FRAME_TIME};

const SCREEN_WIDTH: u32 = 180;
const SCREEN_HEIGHT: u32 = 180;

fn main() {
    let screen = if std::env::args().any(|arg| arg == "--round") {
        Screen::round(SCREEN_WIDTH)
    } else {
        Screen::rectangular(SCREEN_WIDTH, SCREEN_HEIGHT)
    };

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(screen.size);
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Modernesque", &output_settings);

    let mut face = ClockFace::new(screen);
    let mut clock = SimClock::new(2026, 10, 14, 10, 8);

    // First tick primes angles and date; everything is dirty from construction.
    let first = face.on_tick(clock.now(), ChangeMask::ALL);
    paint(&mut display, &face, &first);
    let mut preset = 0usize;
    let mut auto_advance = false;
    let mut last_advance = Instant::now();

    window.update(&display);

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let frame = match keycode {
                        Keycode::M => Some(tick(&mut face, &mut clock, Step::Minute)),
                        Keycode::H => Some(tick(&mut face, &mut clock, Step::Hour)),
                        Keycode::D => Some(tick(&mut face, &mut clock, Step::Day)),
                        Keycode::S => {
                            preset = (preset + 1) % PRESETS.len();
                            println!("Preset: {}", PRESETS[preset].name);
                            let frame = face.on_config(&PRESETS[preset].update());
                            print_style(face.style());
                            frame
                        }
                        Keycode::T => {
                            let mut update = StyleUpdate::new();
                            update.set(StyleKey::ShowDate, i32::from(!face.style().show_date));
                            face.on_config(&update)
                        }
                        Keycode::Space => {
                            auto_advance = !auto_advance;
                            last_advance = Instant::now();
                            println!("Auto-advance: {}", if auto_advance { "ON" } else { "OFF" });
                            None
                        }
                        _ => None,
                    };
                    if let Some(frame) = frame {
                        paint(&mut display, &face, &frame);
                    }
                }
                _ => {}
            }
        }

        if auto_advance && last_advance.elapsed() >= AUTO_ADVANCE_STEP {
            last_advance = Instant::now();
            let frame = tick(&mut face, &mut clock, Step::Minute);
            paint(&mut display, &face, &frame);
        }

        while let Some(entry) = face.log_mut().pop() {
            println!("[{}] {}", entry.level.prefix(), entry.message);
        }

        window.update(&display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

fn tick(
    face: &mut ClockFace,
    clock: &mut SimClock,
    step: Step,
) -> Frame {
    let changed = clock.advance(step);
    face.on_tick(clock.now(), changed)
}

fn paint(
    display: &mut SimulatorDisplay<Rgb888>,
    face: &ClockFace,
    frame: &Frame,
) {
    draw_dirty_with(display, face, frame, draw_date_label).ok();
}

fn print_style(style: &StyleRecord) {
    for key in StyleKey::ALL {
        println!("  {} = 0x{:06X}", key.name(), style.get(key));
    }
}
