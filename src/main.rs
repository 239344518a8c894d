//! Pulse monitor simulator for a 128x64 monochrome OLED.
//!
//! Samples an analog pulse sensor once per loop tick, estimates heart rate
//! from the sampled waveform, and renders a scrolling waveform plot with a
//! numeric BPM readout. A three-button menu selects between the heart-rate
//! screen and a chronometer.
//!
//! # Controls (Simulator Mode)
//!
//! | Button | Key    | Action                                        |
//! |--------|--------|-----------------------------------------------|
//! | PRV    | Left   | Menu: move cursor up / Chrono: reset          |
//! | SEL    | Return | Menu: open entry / Chrono: run-pause toggle   |
//! | NXT    | Right  | Menu: move cursor down / any mode: exit home  |
//!
//! Key repeat is ignored; recognized actions are followed by a fixed settle
//! delay, the same debounce strategy the physical buttons would need.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ 12:03:41            (overlay)│  20px: time, BPM, heart glyph
//! │ ♥ 72 bpm                     │
//! ├──────────────────────────────┤
//! │                      ___     │
//! │   waveform band  ___/   \_/\ │  rows 42..=63, newest sample
//! └──────────────────────────────┘  plotted at column 126
//! ```
//!
//! One cooperative loop per tick: poll key events into held-button levels,
//! debounce levels into edges, apply edges to the mode controller (the exit
//! button is re-checked here, before the active mode runs), tick the active
//! mode, present the frame, pace to ~50 FPS.

mod buttons;
mod chronometer;
mod config;
mod detector;
mod frame;
mod mode;
mod screens;
mod sensor;
mod styles;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use buttons::{ButtonEdges, ButtonState};
use chrono::Local;
use chronometer::Chronometer;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, SETTLE_DELAY};
use detector::{BeatDecision, BeatDetector};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use frame::Frame;
use heapless::String;
use mode::{Action, Mode, ModeController};
use screens::pulse::Waveform;
use sensor::{PulseSensor, SyntheticPulse};

fn main() {
    // Simulator display and window standing in for the OLED.
    let mut display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .scale(4)
        .theme(BinaryColorTheme::OledBlue)
        .build();
    let mut window = Window::new("Pulse Monitor", &output_settings);

    let mut frame = Frame::new();
    display.clear(BinaryColor::Off).ok();
    window.update(&display);

    eprintln!("pulse-monitor: Left=PRV  Return=SEL  Right=NXT");

    if !screens::splash::run(&mut frame, &mut display, &mut window) {
        return;
    }
    frame.clear_all();

    // ==========================================================================
    // Device State
    // ==========================================================================

    let boot = Instant::now();
    let mut sensor = SyntheticPulse::new();
    let mut detector = BeatDetector::new();
    let mut chrono = Chronometer::new();
    let mut controller = ModeController::new();
    let mut wave = Waveform::new();

    // Key-held levels fed into the debouncers each tick.
    let mut prev_held = false;
    let mut select_held = false;
    let mut next_held = false;

    let mut prev_btn = ButtonState::new();
    let mut select_btn = ButtonState::new();
    let mut next_btn = ButtonState::new();

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let tick_start = Instant::now();

        // Window events: close, key presses/releases. Held keys stand in for
        // held buttons; OS key repeat is ignored.
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Left => prev_held = true,
                        Keycode::Return => select_held = true,
                        Keycode::Right => next_held = true,
                        _ => {}
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::Left => prev_held = false,
                    Keycode::Return => select_held = false,
                    Keycode::Right => next_held = false,
                    _ => {}
                },
                _ => {}
            }
        }

        // One debounced read per button per tick.
        let edges = ButtonEdges {
            prev: prev_btn.just_pressed(prev_held),
            select: select_btn.just_pressed(select_held),
            next: next_btn.just_pressed(next_held),
        };

        let now = boot.elapsed();

        // Mode transitions run before the active mode's tick, so the exit
        // button is always checked on fresh state.
        let action = controller.apply(edges);
        match action {
            Some(Action::ToggleChrono) => chrono.toggle(now),
            Some(Action::ResetChrono) => chrono.reset(),
            Some(Action::Entered(entered)) => {
                frame.clear_all();
                if entered == Mode::HeartRate {
                    wave.reset();
                }
                eprintln!("mode: {entered:?}");
            }
            Some(Action::ExitedToHome) => {
                frame.clear_all();
                eprintln!("mode: Home");
            }
            Some(Action::CursorMoved) | None => {}
        }

        // Tick the active mode: one sample or one elapsed delta, one render.
        match controller.mode() {
            Mode::Home => {
                screens::menu::draw(&mut frame, controller.cursor()).ok();
            }
            Mode::HeartRate => {
                let sample = sensor.read();
                if let BeatDecision::Beat(bpm) = detector.observe(sample, now) {
                    println!("beat {sample} ({bpm:.0} bpm)");
                }

                let mut time_label: String<16> = String::new();
                let _ = write!(time_label, "{}", Local::now().format("%H:%M:%S"));

                let (min, max) = detector.window().min_max().unwrap_or((0, 0));
                screens::pulse::draw(
                    &mut frame,
                    &mut wave,
                    &time_label,
                    detector.bpm(),
                    sample,
                    min,
                    max,
                )
                .ok();
            }
            Mode::Chronometer => {
                screens::chrono::draw(&mut frame, &chrono, now).ok();
            }
        }

        frame.present(&mut display).ok();
        window.update(&display);

        // Settle after a recognized action; otherwise pace the frame.
        if action.is_some() {
            thread::sleep(SETTLE_DELAY);
        } else {
            let spent = tick_start.elapsed();
            if spent < FRAME_TIME {
                thread::sleep(FRAME_TIME - spent);
            }
        }
    }
}
