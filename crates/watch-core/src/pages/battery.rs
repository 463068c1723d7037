//! Battery screen: outlined cell with a charge-colored fill and the percent

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::app::WatchSnapshot;
use crate::pages::chrome::{build_arrows, draw_arrows, draw_signature};
use crate::pages::constants::*;
use crate::pages::page::Page;
use crate::ui::components::{draw_number, fill_ndc, outline_ndc};
use crate::ui::styling::{COLOR_BATTERY_BACKGROUND, COLOR_TEXT, battery_color};
use crate::ui::{ArrowButton, ClickRegion, DigitStyle, NdcPoint, Screen, Viewport};

/// Charge fill for `percent`, anchored at the right inner edge of the body.
///
/// Returns `None` at 0%.
pub fn charge_region(percent: u8) -> Option<ClickRegion> {
    let inset = BATTERY_BORDER * 2.0;
    let x_min = BATTERY_BODY.x_min + inset;
    let x_max = BATTERY_BODY.x_max - inset;
    let full_width = x_max - x_min;
    let width = full_width * f32::from(percent.min(100)) / 100.0;

    if width <= 0.0 {
        return None;
    }

    Some(ClickRegion::new(
        x_max - width,
        x_max,
        BATTERY_BODY.y_min + inset,
        BATTERY_BODY.y_max - inset,
    ))
}

pub struct BatteryPage {
    viewport: Viewport,
    arrows: Vec<ArrowButton, 2>,
    percent: Option<u8>,
    dirty: bool,
}

impl BatteryPage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            arrows: build_arrows(Screen::Battery, viewport),
            percent: None,
            dirty: true,
        }
    }

    fn draw_cell<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        percent: u8,
    ) -> Result<(), D::Error> {
        let vp = &self.viewport;

        outline_ndc(display, vp, BATTERY_BODY, BATTERY_BORDER, COLOR_TEXT)?;
        fill_ndc(
            display,
            vp,
            BATTERY_CAP.x_min,
            BATTERY_CAP.x_max,
            BATTERY_CAP.y_min,
            BATTERY_CAP.y_max,
            COLOR_TEXT,
        )?;

        if let Some(fill) = charge_region(percent) {
            fill_ndc(
                display,
                vp,
                fill.x_min,
                fill.x_max,
                fill.y_min,
                fill.y_max,
                battery_color(percent),
            )?;
        }

        let style = DigitStyle {
            width: NUMBER_DIGIT_WIDTH,
            height: NUMBER_DIGIT_HEIGHT,
            color: COLOR_TEXT,
        };
        draw_number(
            display,
            vp,
            u16::from(percent),
            NdcPoint::new(0.0, BATTERY_NUMBER_Y),
            NUMBER_DIGIT_SPACING,
            &style,
        )
    }
}

impl Page for BatteryPage {
    fn id(&self) -> Screen {
        Screen::Battery
    }

    fn title(&self) -> &str {
        "Battery"
    }

    fn update(&mut self, snapshot: &WatchSnapshot) {
        if self.percent != Some(snapshot.battery_percent) {
            self.percent = Some(snapshot.battery_percent);
            self.dirty = true;
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        display.clear(COLOR_BATTERY_BACKGROUND)?;

        if let Some(percent) = self.percent {
            self.draw_cell(display, percent)?;
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
    use crate::sim::{HeartReading, TimeOfDay};
    use crate::ui::styling::{COLOR_BATTERY_CRITICAL, COLOR_BATTERY_LOW, COLOR_BATTERY_OK};

    fn snapshot(battery_percent: u8) -> WatchSnapshot {
        WatchSnapshot {
            screen: Screen::Battery,
            time: TimeOfDay::new(12, 0, 0),
            heart: HeartReading {
                bpm: 70.0,
                ekg_scale_x: 1.1,
                ekg_scroll: 0.0,
                warning: false,
            },
            battery_percent,
        }
    }

    fn render(percent: u8) -> FrameBuffer {
        let viewport = Viewport::new(240, 240);
        let mut page = BatteryPage::new(viewport);
        let mut fb = FrameBuffer::new(viewport);
        page.update(&snapshot(percent));
        page.draw_page(&mut fb).unwrap();
        fb
    }

    #[test]
    fn test_charge_region_anchored_right() {
        let full = charge_region(100).unwrap();
        let half = charge_region(50).unwrap();

        assert!((full.x_max - half.x_max).abs() < 1e-6);
        assert!(half.x_min > full.x_min);
        assert!(((full.x_max - full.x_min) * 0.5 - (half.x_max - half.x_min)).abs() < 1e-5);
        assert!((full.x_min - (-0.28)).abs() < 1e-5);
        assert_eq!(charge_region(0), None);
    }

    #[test]
    fn test_fill_color_follows_charge() {
        let fb = render(80);
        assert!(fb.count_color(COLOR_BATTERY_OK) > 0);
        assert_eq!(fb.pixel(0, 0), Some(COLOR_BATTERY_BACKGROUND));

        let fb = render(15);
        assert!(fb.count_color(COLOR_BATTERY_LOW) > 0);
        assert_eq!(fb.count_color(COLOR_BATTERY_OK), 0);

        let fb = render(5);
        assert!(fb.count_color(COLOR_BATTERY_CRITICAL) > 0);
    }

    #[test]
    fn test_empty_battery_has_no_fill() {
        let fb = render(0);

        assert_eq!(fb.count_color(COLOR_BATTERY_OK), 0);
        assert_eq!(fb.count_color(COLOR_BATTERY_LOW), 0);
        assert_eq!(fb.count_color(COLOR_BATTERY_CRITICAL), 0);
        // Outline and digits still drawn
        assert!(fb.count_color(COLOR_TEXT) > 0);
    }

    #[test]
    fn test_dirty_on_percent_change() {
        let mut page = BatteryPage::new(Viewport::new(240, 240));
        page.update(&snapshot(42));
        page.mark_clean();

        page.update(&snapshot(42));
        assert!(!page.is_dirty());

        page.update(&snapshot(41));
        assert!(page.is_dirty());
    }
}
