//! Backend independent core of the blitting lessons.
//!
//! Everything in here talks to the screen through the [`RenderTarget`] trait and
//! receives input through the [`InputSource`] trait, so the tiling and clipping
//! math can be exercised without a window.

mod error;
pub mod frame;
pub mod geom;
pub mod image;
pub mod input;
pub mod render;
pub mod scale;
pub mod scene;
pub mod tiles;

#[cfg(test)]
mod mock;

pub use error::{BlitError, BlitResult};
pub use frame::{run, InputSource};
pub use geom::{Rect, Size};
pub use input::{ClipNavigator, InputAction, RunState};
pub use render::{render_texture, Drawable, RenderTarget};
pub use scale::{BlitOptions, Scale};
pub use scene::{Layout, Scene};
pub use tiles::{draw_tiles, TileGrid};
