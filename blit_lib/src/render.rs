use crate::geom::{Rect, Size};
use crate::scale::BlitOptions;

/// Decoded pixel data living on a rendering device.
pub trait Drawable {
    /// Natural dimensions of the whole drawable.
    fn size(&self) -> Size;
}

/// The back buffer we draw into. Generic over the drawable type so a backend can
/// use borrowed device textures.
pub trait RenderTarget<D: Drawable> {
    /// Pixel dimensions of the back buffer.
    fn size(&self) -> Size;

    fn clear(&mut self);

    /// Copies `clip` (or all of `src`) into `dest`, stretching as needed.
    fn copy(&mut self, src: &D, clip: Option<Rect>, dest: Rect);

    fn present(&mut self);
}

/// Where a blit of `src_size` at `(x, y)` lands once `opts` are applied.
pub fn destination_rect(natural: Size, x: i32, y: i32, opts: &BlitOptions) -> Rect {
    let size = opts.scaled_size(natural);
    Rect::new(x, y, size.w, size.h)
}

/// Draws `drawable` at `(x, y)`.
///
/// Drawables are painted back to front in call order, so backgrounds go first.
pub fn render_texture<D, T>(target: &mut T, drawable: &D, x: i32, y: i32, opts: &BlitOptions)
where
    D: Drawable,
    T: RenderTarget<D> + ?Sized,
{
    let dest = destination_rect(drawable.size(), x, y, opts);
    target.copy(drawable, opts.clip, dest);
}
