//! Time screen: `HH:MM:SS` in seven-segment digits

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::app::WatchSnapshot;
use crate::pages::chrome::{build_arrows, draw_arrows, draw_signature};
use crate::pages::constants::*;
use crate::pages::page::Page;
use crate::sim::TimeOfDay;
use crate::ui::components::{draw_colon, draw_digit};
use crate::ui::styling::{COLOR_TEXT, COLOR_TIME_BACKGROUND};
use crate::ui::{ArrowButton, DigitStyle, NdcPoint, Screen, Viewport};

/// Horizontal centres of the eight glyphs (six digits, two colons), left
/// to right.
fn glyph_positions() -> [f32; 8] {
    let hours_tens = TIME_START_X;
    let hours_ones = hours_tens + TIME_DIGIT_SPACING;
    let colon1 = hours_ones + TIME_COLON_GAP;
    let minutes_tens = colon1 + TIME_COLON_GAP;
    let minutes_ones = minutes_tens + TIME_DIGIT_SPACING;
    let colon2 = minutes_ones + TIME_COLON_GAP;
    let seconds_tens = colon2 + TIME_COLON_GAP;
    let seconds_ones = seconds_tens + TIME_DIGIT_SPACING;

    [
        hours_tens,
        hours_ones,
        colon1,
        minutes_tens,
        minutes_ones,
        colon2,
        seconds_tens,
        seconds_ones,
    ]
}

pub struct TimePage {
    viewport: Viewport,
    arrows: Vec<ArrowButton, 2>,
    time: Option<TimeOfDay>,
    dirty: bool,
}

impl TimePage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            arrows: build_arrows(Screen::Time, viewport),
            time: None,
            dirty: true,
        }
    }

    fn draw_time<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        time: TimeOfDay,
    ) -> Result<(), D::Error> {
        let style = DigitStyle {
            width: TIME_DIGIT_WIDTH,
            height: TIME_DIGIT_HEIGHT,
            color: COLOR_TEXT,
        };
        let [ht, ho, c1, mt, mo, c2, st, so] = glyph_positions();

        let fields = [
            (time.hours, ht, ho),
            (time.minutes, mt, mo),
            (time.seconds, st, so),
        ];
        for (value, tens_x, ones_x) in fields {
            draw_digit(display, &self.viewport, value / 10, NdcPoint::new(tens_x, 0.0), &style)?;
            draw_digit(display, &self.viewport, value % 10, NdcPoint::new(ones_x, 0.0), &style)?;
        }

        for x in [c1, c2] {
            draw_colon(
                display,
                &self.viewport,
                NdcPoint::new(x, 0.0),
                TIME_DIGIT_HEIGHT,
                COLOR_TEXT,
            )?;
        }
        Ok(())
    }
}

impl Page for TimePage {
    fn id(&self) -> Screen {
        Screen::Time
    }

    fn title(&self) -> &str {
        "Time"
    }

    fn update(&mut self, snapshot: &WatchSnapshot) {
        if self.time != Some(snapshot.time) {
            self.time = Some(snapshot.time);
            self.dirty = true;
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        display.clear(COLOR_TIME_BACKGROUND)?;

        if let Some(time) = self.time {
            self.draw_time(display, time)?;
        }

        draw_arrows(display, &self.arrows)?;
        draw_signature(display, &self.viewport)
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::sim::HeartReading;

    fn snapshot(time: TimeOfDay) -> WatchSnapshot {
        WatchSnapshot {
            screen: Screen::Time,
            time,
            heart: HeartReading {
                bpm: 70.0,
                ekg_scale_x: 1.1,
                ekg_scroll: 0.0,
                warning: false,
            },
            battery_percent: 100,
        }
    }

    #[test]
    fn test_glyphs_fit_between_arrows() {
        let positions = glyph_positions();

        assert!((positions[2] - (-0.33)).abs() < 1e-5);
        assert!((positions[7] - 0.43).abs() < 1e-5);
        // Rightmost digit edge stays left of the right arrow
        assert!(positions[7] + TIME_DIGIT_WIDTH * 0.5 < 0.6);
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_dirty_only_when_time_changes() {
        let mut page = TimePage::new(Viewport::new(240, 240));
        page.update(&snapshot(TimeOfDay::new(9, 15, 0)));
        page.mark_clean();

        page.update(&snapshot(TimeOfDay::new(9, 15, 0)));
        assert!(!page.is_dirty());

        page.update(&snapshot(TimeOfDay::new(9, 15, 1)));
        assert!(page.is_dirty());
    }

    #[test]
    fn test_draws_background_and_digits() {
        let viewport = Viewport::new(240, 240);
        let mut page = TimePage::new(viewport);
        let mut fb = FrameBuffer::new(viewport);

        page.update(&snapshot(TimeOfDay::new(8, 8, 8)));
        page.draw_page(&mut fb).unwrap();

        assert_eq!(fb.pixel(0, 0), Some(COLOR_TIME_BACKGROUND));
        assert!(fb.count_color(COLOR_TEXT) > 0);
    }
}
