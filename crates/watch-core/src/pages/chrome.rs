//! Elements shared by every page: background, navigation arrows and signature

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::Vec;

use crate::navigation;
use crate::pages::constants::{SIGNATURE_REGION, SIGNATURE_TEXT};
use crate::ui::styling::COLOR_SIGNATURE;
use crate::ui::{ArrowButton, Drawable, NdcPoint, Screen, Viewport};

/// One arrow per outgoing transition of `screen`, in the same regions the
/// navigator hit-tests.
pub fn build_arrows(screen: Screen, viewport: Viewport) -> Vec<ArrowButton, 2> {
    let mut arrows = Vec::new();
    for nav in navigation::targets(screen) {
        arrows
            .push(ArrowButton::new(nav.region, nav.direction, viewport))
            .ok();
    }
    arrows
}

pub fn draw_arrows<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    arrows: &[ArrowButton],
) -> Result<(), D::Error> {
    for arrow in arrows {
        arrow.draw(display)?;
    }
    Ok(())
}

/// Signature in the bottom-right corner, right aligned in its box.
pub fn draw_signature<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    viewport: &Viewport,
) -> Result<(), D::Error> {
    let anchor = viewport.ndc_to_pixel(NdcPoint::new(
        SIGNATURE_REGION.x_max,
        (SIGNATURE_REGION.y_min + SIGNATURE_REGION.y_max) * 0.5,
    ));
    let style = TextStyleBuilder::new()
        .alignment(Alignment::Right)
        .baseline(Baseline::Middle)
        .build();

    Text::with_text_style(
        SIGNATURE_TEXT,
        anchor,
        MonoTextStyle::new(&FONT_6X10, COLOR_SIGNATURE),
        style,
    )
    .draw(display)?;
    Ok(())
}
