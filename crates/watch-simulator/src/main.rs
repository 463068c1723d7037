//! Desktop simulator for the smartwatch face.
//!
//! Renders watch-core pages in an SDL2 window via `embedded-graphics-simulator`
//! and drives the watch at a fixed frame rate. A heart sprite follows the
//! mouse over the window; it is drawn straight onto the display after each
//! flush and erased by repainting its old area from the framebuffer.
//!
//! # Key bindings
//!
//! | Input         | Action                                  |
//! |---------------|-----------------------------------------|
//! | Left click    | Press an on-screen arrow                |
//! | D (held)      | Elevated activity, heart rate ramps up  |
//! | Escape / Q    | Quit                                    |

use std::process::ExitCode;
use std::time::{Duration, Instant};

use chrono::{Local, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::{Keycode, MouseButton},
};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use watch_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_VIEWPORT, DISPLAY_WIDTH_PX, Drawable, HeartCursor};
use watch_core::{
    FrameBuffer, FrameOutcome, InputState, PointerState, TimeOfDay, Watch, WatchConfig,
    WatchRenderer,
};

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

const WINDOW_TITLE: &str = "SmartWatch";

/// Wall-clock time of day used as the watch's starting time.
fn local_time_of_day() -> TimeOfDay {
    let now = Local::now();
    TimeOfDay::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
}

/// Raw input levels accumulated from SDL events across frames.
#[derive(Default)]
struct HostInput {
    pointer: PointerState,
    activity_held: bool,
    exit_requested: bool,
}

impl HostInput {
    fn apply(&mut self, event: SimulatorEvent) {
        match event {
            SimulatorEvent::Quit => self.exit_requested = true,

            SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                Keycode::Escape | Keycode::Q => self.exit_requested = true,
                Keycode::D => self.activity_held = true,
                _ => {}
            },

            SimulatorEvent::KeyUp { keycode, .. } => {
                if keycode == Keycode::D {
                    self.activity_held = false;
                }
            }

            SimulatorEvent::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                point,
            } => self.pointer = PointerState::new(point.x as f32, point.y as f32, true),

            SimulatorEvent::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                point,
            } => self.pointer = PointerState::new(point.x as f32, point.y as f32, false),

            SimulatorEvent::MouseMove { point } => {
                self.pointer.x = point.x as f32;
                self.pointer.y = point.y as f32;
            }

            _ => {}
        }
    }

    fn pointer_position(&self) -> Point {
        Point::new(self.pointer.x as i32, self.pointer.y as i32)
    }

    fn frame_input(&self) -> InputState {
        InputState {
            pointer: self.pointer,
            viewport: DISPLAY_VIEWPORT,
            activity_held: self.activity_held,
            exit_requested: self.exit_requested,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = WatchConfig::default();

    info!("Starting smartwatch simulator");
    info!(
        "Display: {}×{} (scale {}×) at {} FPS",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE, config.frame.target_fps
    );
    info!("Keys: click=arrows  D=activity  Esc/Q=Quit");

    let frame_budget = Duration::from_nanos(config.frame.frame_budget_nanos());

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        DISPLAY_WIDTH_PX as u32,
        DISPLAY_HEIGHT_PX as u32,
    ));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let mut framebuffer = FrameBuffer::new(DISPLAY_VIEWPORT);
    let mut renderer = WatchRenderer::new(DISPLAY_VIEWPORT);

    let clock_start = Instant::now();
    let mut watch = match Watch::new(
        &config,
        local_time_of_day(),
        SmallRng::from_entropy(),
        0.0,
    ) {
        Ok(watch) => watch,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut input = HostInput::default();
    let mut cursor = HeartCursor::new(input.pointer_position());

    // The SDL window is created lazily by the first `update()`, which must
    // happen before `events()` is called.
    let initial = watch.snapshot();
    if let Err(e) = renderer
        .render(&initial, &mut framebuffer)
        .and_then(|_| framebuffer.flush(&mut display))
    {
        error!("Draw error: {:?}", e);
    }
    if let Err(e) = cursor.draw(&mut display) {
        error!("Cursor draw error: {:?}", e);
    }
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            input.apply(event);
        }

        let now = clock_start.elapsed().as_secs_f64();
        let snapshot = match watch.frame(&input.frame_input(), now) {
            FrameOutcome::Render(snapshot) => snapshot,
            FrameOutcome::Exit => break 'running,
        };

        let drew = match renderer.render(&snapshot, &mut framebuffer) {
            Ok(drew) => drew,
            Err(e) => {
                error!("Draw error: {:?}", e);
                false
            }
        };

        let pointer = input.pointer_position();
        if drew || pointer != cursor.position() {
            // Old sprite area may lie outside the dirty region, so repaint it first
            if let Err(e) = framebuffer
                .restore(&mut display, &cursor.bounds())
                .and_then(|_| framebuffer.flush(&mut display))
            {
                error!("Flush error: {:?}", e);
            }
            cursor.move_to(pointer);
            if let Err(e) = cursor.draw(&mut display) {
                error!("Cursor draw error: {:?}", e);
            }
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }

    info!("Simulator exiting");
    ExitCode::SUCCESS
}
