// src/pages/renderer.rs
//! Renderer that owns one page per screen and draws the active one.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;
use log::debug;

use crate::app::WatchSnapshot;
use crate::pages::page::{Page, PageWrapper};
use crate::ui::{Screen, Viewport};

/// Draws whichever page the snapshot names, switching pages as the
/// navigator moves between screens.
pub struct WatchRenderer {
    pages: Vec<PageWrapper, 3>,
    current: Screen,
}

impl WatchRenderer {
    /// Register every page and activate the time page.
    pub fn new(viewport: Viewport) -> Self {
        let mut pages = Vec::new();
        for screen in Screen::ALL {
            pages.push(PageWrapper::for_screen(screen, viewport)).ok();
        }

        let mut renderer = Self {
            pages,
            current: Screen::Time,
        };
        if let Some(page) = renderer.current_page_mut() {
            page.on_activate();
        }
        renderer
    }

    fn current_page_mut(&mut self) -> Option<&mut PageWrapper> {
        self.pages.iter_mut().find(|p| p.id() == self.current)
    }

    fn switch_to(&mut self, screen: Screen) {
        if let Some(page) = self.current_page_mut() {
            page.on_deactivate();
            debug!(" Leaving page {}", page.title());
        }

        self.current = screen;

        if let Some(page) = self.current_page_mut() {
            page.on_activate();
            debug!(" Entering page {}", page.title());
        }
    }

    /// Draw `snapshot` if the visible page changed.
    ///
    /// Returns `true` when something was drawn.
    pub fn render<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        snapshot: &WatchSnapshot,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        if snapshot.screen != self.current {
            self.switch_to(snapshot.screen);
        }

        let Some(page) = self.current_page_mut() else {
            return Ok(false);
        };

        page.update(snapshot);
        if page.is_dirty() {
            page.draw_page(display)?;
            page.mark_clean();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.current
    }
}
