use tracing::{trace, warn};
use crate::geom::Size;
use crate::render::{render_texture, Drawable, RenderTarget};
use crate::scale::BlitOptions;

/// How many tiles of which size fit on a destination.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TileGrid {
    pub tile: Size,
    pub rows: u32,
    pub cols: u32,
}

impl TileGrid {
    /// Returns `None` when the tile collapses to zero pixels on either axis.
    pub fn compute(natural: Size, destination: Size, opts: &BlitOptions) -> Option<TileGrid> {
        let tile = opts.scaled_size(natural);
        if tile.is_empty() {
            return None;
        }

        // Partial tiles on the right and bottom edges are not drawn
        Some(TileGrid {
            tile,
            rows: destination.h / tile.h,
            cols: destination.w / tile.w,
        })
    }

    pub fn count(&self) -> u32 {
        self.rows * self.cols
    }
}

/// Fills `destination` with copies of `source`, row by row from the top left.
///
/// Nothing is cached: the grid has to be painted again every frame.
pub fn draw_tiles<D, T>(target: &mut T, source: &D, destination: Size, opts: &BlitOptions)
where
    D: Drawable,
    T: RenderTarget<D> + ?Sized,
{
    let Some(grid) = TileGrid::compute(source.size(), destination, opts) else {
        warn!("Tile collapses to zero size, nothing to draw ({:?})", opts);
        return;
    };
    trace!("Tiling {}x{} grid of {:?}", grid.cols, grid.rows, grid.tile);

    let (mut x, mut y) = (0i32, 0i32);
    for _ in 0..grid.rows {
        for _ in 0..grid.cols {
            render_texture(target, source, x, y, opts);
            x += grid.tile.w as i32;
        }
        x = 0;
        y += grid.tile.h as i32;
    }
}
