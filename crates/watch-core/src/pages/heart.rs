//! Heart screen: BPM readout, BPM bar, scrolling EKG and the over-exertion
//! warning overlay

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::Vec;

use crate::app::WatchSnapshot;
use crate::pages::chrome::{build_arrows, draw_arrows, draw_signature};
use crate::pages::constants::*;
use crate::pages::page::Page;
use crate::sim::HeartReading;
use crate::ui::components::{EkgTrace, draw_number, fill_ndc};
use crate::ui::styling::{
    COLOR_BPM_BAR, COLOR_EKG_BOX, COLOR_EKG_TRACE, COLOR_HEART_BACKGROUND, COLOR_TEXT,
    COLOR_WARNING,
};
use crate::ui::{ArrowButton, DigitStyle, Drawable, NdcPoint, Screen, Viewport};

/// Bar fill in `[0, 1]` for a BPM value.
pub fn bpm_bar_fraction(bpm: f32) -> f32 {
    let clamped = bpm.clamp(BPM_BAR_MIN, BPM_BAR_MAX);
    (clamped - BPM_BAR_MIN) / (BPM_BAR_MAX - BPM_BAR_MIN)
}

pub struct HeartPage {
    viewport: Viewport,
    arrows: Vec<ArrowButton, 2>,
    reading: Option<HeartReading>,
    dirty: bool,
}

impl HeartPage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            arrows: build_arrows(Screen::Heart, viewport),
            reading: None,
            dirty: true,
        }
    }

    fn draw_readout<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        reading: &HeartReading,
    ) -> Result<(), D::Error> {
        let vp = &self.viewport;

        fill_ndc(
            display,
            vp,
            EKG_BOX.x_min,
            EKG_BOX.x_max,
            EKG_BOX.y_min,
            EKG_BOX.y_max,
            COLOR_EKG_BOX,
        )?;

        let half = EKG_BASELINE_THICKNESS * 0.5;
        fill_ndc(display, vp, EKG_BOX.x_min, EKG_BOX.x_max, -half, half, COLOR_EKG_TRACE)?;

        let style = DigitStyle {
            width: NUMBER_DIGIT_WIDTH,
            height: NUMBER_DIGIT_HEIGHT,
            color: COLOR_TEXT,
        };
        draw_number(
            display,
            vp,
            reading.display_bpm(),
            NdcPoint::new(0.0, BPM_NUMBER_Y),
            NUMBER_DIGIT_SPACING,
            &style,
        )?;

        let bar_end = BPM_BAR_X_MIN + bpm_bar_fraction(reading.bpm) * BPM_BAR_WIDTH;
        fill_ndc(
            display,
            vp,
            BPM_BAR_X_MIN,
            bar_end,
            BPM_BAR_Y_MIN,
            BPM_BAR_Y_MAX,
            COLOR_BPM_BAR,
        )?;

        EkgTrace::new(EKG_BOX, *vp, reading.ekg_scale_x, reading.ekg_scroll)
            .with_color(COLOR_EKG_TRACE)
            .draw(display)
    }

    /// Full-screen red overlay with a centred label.
    fn draw_warning<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        display.clear(COLOR_WARNING)?;

        let style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            WARNING_TEXT,
            self.viewport.ndc_to_pixel(NdcPoint::new(0.0, 0.0)),
            MonoTextStyle::new(&FONT_10X20, COLOR_TEXT),
            style,
        )
        .draw(display)?;
        Ok(())
    }
}

impl Page for HeartPage {
    fn id(&self) -> Screen {
        Screen::Heart
    }

    fn title(&self) -> &str {
        "Heart"
    }

    fn update(&mut self, snapshot: &WatchSnapshot) {
        if self.reading != Some(snapshot.heart) {
            self.reading = Some(snapshot.heart);
            self.dirty = true;
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        display.clear(COLOR_HEART_BACKGROUND)?;

        if let Some(reading) = self.reading {
            self.draw_readout(display, &reading)?;
        }

        draw_arrows(display, &self.arrows)?;

        if self.reading.is_some_and(|r| r.warning) {
            self.draw_warning(display)?;
        }

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
