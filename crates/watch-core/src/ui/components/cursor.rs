//! Heart-shaped pointer sprite drawn over the page at the mouse position.
//!
//! The sprite is centred on the pointer, so the click hotspot is the middle
//! of the heart.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::Drawable;
use crate::ui::styling::{COLOR_CURSOR, COLOR_CURSOR_OUTLINE};

const SPRITE_WIDTH: u32 = 11;
const SPRITE_HEIGHT: u32 = 10;

/// `#` is the outline, `o` the fill, `.` transparent.
const SPRITE: [&[u8; SPRITE_WIDTH as usize]; SPRITE_HEIGHT as usize] = [
    b".###...###.",
    b"#ooo#.#ooo#",
    b"#ooooooooo#",
    b"#ooooooooo#",
    b"#ooooooooo#",
    b".#ooooooo#.",
    b"..#ooooo#..",
    b"...#ooo#...",
    b"....#o#....",
    b".....#.....",
];

pub struct HeartCursor {
    position: Point,
}

impl HeartCursor {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    fn top_left(&self) -> Point {
        self.position - Point::new(SPRITE_WIDTH as i32 / 2, SPRITE_HEIGHT as i32 / 2)
    }

    fn pixels(&self) -> impl Iterator<Item = Pixel<Rgb565>> + '_ {
        let origin = self.top_left();
        SPRITE.iter().enumerate().flat_map(move |(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                let color = match *cell {
                    b'#' => COLOR_CURSOR_OUTLINE,
                    b'o' => COLOR_CURSOR,
                    _ => return None,
                };
                Some(Pixel(origin + Point::new(x as i32, y as i32), color))
            })
        })
    }
}

impl Drawable for HeartCursor {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        display.draw_iter(self.pixels())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.top_left(), Size::new(SPRITE_WIDTH, SPRITE_HEIGHT))
    }
}
