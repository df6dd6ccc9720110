use crate::geom::{Rect, Size};
use crate::input::{ClipNavigator, InputAction, RunState};
use crate::render::{render_texture, Drawable, RenderTarget};
use crate::scale::BlitOptions;
use crate::tiles::draw_tiles;

/// Constants describing how the two images are arranged on screen.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Layout {
    /// Scale applied to each background tile, horizontally and vertically
    pub background_scale: (f32, f32),
    /// The background clip is one of this many equal columns of the tileset
    pub background_columns: u32,
    /// Frames per row in the foreground spritesheet
    pub tileset_columns: u32,
    /// Frame rows in the foreground spritesheet
    pub tileset_rows: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            background_scale: (0.2, 0.2),
            background_columns: 3,
            tileset_columns: 2,
            tileset_rows: 2,
        }
    }
}

/// A tiled background with one spritesheet frame centered on top of it.
///
/// Owns both drawables. They are released in reverse order of loading when the
/// scene is dropped.
pub struct Scene<D: Drawable> {
    // Field order matters: the foreground was loaded last and goes first
    foreground: D,
    background: D,
    background_opts: BlitOptions,
    navigator: ClipNavigator,
    position: (i32, i32),
}

impl<D: Drawable> Scene<D> {
    /// Lays the scene out for a back buffer of `screen` pixels.
    pub fn new(layout: &Layout, screen: Size, background: D, foreground: D) -> Self {
        let bg = background.size();
        let bg_clip = Rect::new(0, 0, bg.w / layout.background_columns.max(1), bg.h);
        let background_opts = BlitOptions::new()
            .with_scale(layout.background_scale.0, layout.background_scale.1)
            .with_clip(bg_clip);

        let fg = foreground.size();
        let columns = layout.tileset_columns.max(1);
        let rows = layout.tileset_rows.max(1);
        let frame = Size::new(fg.w / columns, fg.h / rows);
        let navigator = ClipNavigator::new(frame, columns, rows);

        // Centered on screen
        let position = (
            (screen.w / 2) as i32 - (frame.w / 2) as i32,
            (screen.h / 2) as i32 - (frame.h / 2) as i32,
        );

        Scene {
            foreground,
            background,
            background_opts,
            navigator,
            position,
        }
    }

    pub fn handle(&mut self, action: InputAction) -> RunState {
        self.navigator.apply(action)
    }

    pub fn clip(&self) -> Rect {
        self.navigator.clip()
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn background_opts(&self) -> &BlitOptions {
        &self.background_opts
    }

    /// Paints one complete frame and presents it.
    pub fn draw<T: RenderTarget<D> + ?Sized>(&self, target: &mut T) {
        target.clear();

        let screen = target.size();
        draw_tiles(target, &self.background, screen, &self.background_opts);

        let fg_opts = BlitOptions::new().with_clip(self.navigator.clip());
        let (x, y) = self.position;
        render_texture(target, &self.foreground, x, y, &fg_opts);

        target.present();
    }
}

#[cfg(test)]
mod tests;
