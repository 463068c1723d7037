// src/pages/page.rs
//! Page abstraction and the enum wrapper the renderer stores pages in.
//!
//! Each watch screen is a [`Page`]. Pages receive the frame's
//! [`WatchSnapshot`] through [`Page::update`], decide whether anything they
//! show has changed, and redraw themselves only when dirty.
//!
//! [`PageWrapper`] lets the [`WatchRenderer`](super::renderer::WatchRenderer)
//! keep all pages in one `heapless::Vec` without trait objects.

extern crate alloc;

use alloc::boxed::Box;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::app::WatchSnapshot;
use crate::pages::battery::BatteryPage;
use crate::pages::heart::HeartPage;
use crate::pages::time::TimePage;
use crate::ui::Screen;

/// Contract every watch screen implements.
///
/// The renderer calls these in order each frame:
///
/// 1. **`on_activate`** when the page becomes visible.
/// 2. **`update`** with the frame's snapshot.
/// 3. **`draw_page`** when `is_dirty()` is true, then `mark_clean`.
/// 4. **`on_deactivate`** when another page takes over.
pub trait Page {
    /// Screen this page renders.
    fn id(&self) -> Screen;

    fn title(&self) -> &str;

    /// Called once when this page becomes the active page.
    ///
    /// The default forces a full redraw, since another page has painted
    /// over this one in the meantime.
    fn on_activate(&mut self) {
        self.mark_dirty();
    }

    fn on_deactivate(&mut self) {}

    /// Take in the latest snapshot, marking the page dirty if any value it
    /// displays has changed.
    fn update(&mut self, snapshot: &WatchSnapshot);

    /// Render the entire page to the given display target.
    fn draw_page<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D)
    -> Result<(), D::Error>;

    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the page to be redrawn on the next frame.
    fn mark_dirty(&mut self);
}

/// Stores one of the concrete page types.
///
/// Variants are boxed so the enum stays small whatever the page footprint.
pub enum PageWrapper {
    Time(Box<TimePage>),
    Heart(Box<HeartPage>),
    Battery(Box<BatteryPage>),
}

impl PageWrapper {
    /// Build the page for `screen`.
    pub fn for_screen(screen: Screen, viewport: crate::ui::Viewport) -> Self {
        match screen {
            Screen::Time => PageWrapper::Time(Box::new(TimePage::new(viewport))),
            Screen::Heart => PageWrapper::Heart(Box::new(HeartPage::new(viewport))),
            Screen::Battery => PageWrapper::Battery(Box::new(BatteryPage::new(viewport))),
        }
    }
}

impl Page for PageWrapper {
    fn id(&self) -> Screen {
        match self {
            PageWrapper::Time(page) => page.id(),
            PageWrapper::Heart(page) => page.id(),
            PageWrapper::Battery(page) => page.id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            PageWrapper::Time(page) => page.title(),
            PageWrapper::Heart(page) => page.title(),
            PageWrapper::Battery(page) => page.title(),
        }
    }

    fn on_activate(&mut self) {
        match self {
            PageWrapper::Time(page) => page.on_activate(),
            PageWrapper::Heart(page) => page.on_activate(),
            PageWrapper::Battery(page) => page.on_activate(),
        }
    }

    fn on_deactivate(&mut self) {
        match self {
            PageWrapper::Time(page) => page.on_deactivate(),
            PageWrapper::Heart(page) => page.on_deactivate(),
            PageWrapper::Battery(page) => page.on_deactivate(),
        }
    }

    fn update(&mut self, snapshot: &WatchSnapshot) {
        match self {
            PageWrapper::Time(page) => page.update(snapshot),
            PageWrapper::Heart(page) => page.update(snapshot),
            PageWrapper::Battery(page) => page.update(snapshot),
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            PageWrapper::Time(page) => page.draw_page(display),
            PageWrapper::Heart(page) => page.draw_page(display),
            PageWrapper::Battery(page) => page.draw_page(display),
        }
    }

    fn is_dirty(&self) -> bool {
        match self {
            PageWrapper::Time(page) => page.is_dirty(),
            PageWrapper::Heart(page) => page.is_dirty(),
            PageWrapper::Battery(page) => page.is_dirty(),
        }
    }

    fn mark_clean(&mut self) {
        match self {
            PageWrapper::Time(page) => page.mark_clean(),
            PageWrapper::Heart(page) => page.mark_clean(),
            PageWrapper::Battery(page) => page.mark_clean(),
        }
    }

    fn mark_dirty(&mut self) {
        match self {
            PageWrapper::Time(page) => page.mark_dirty(),
            PageWrapper::Heart(page) => page.mark_dirty(),
            PageWrapper::Battery(page) => page.mark_dirty(),
        }
    }
}
