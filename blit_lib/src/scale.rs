use crate::geom::{Rect, Size};

/// A width or height multiplier. Always strictly positive: zero becomes 1.0 and
/// negative factors lose their sign.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Scale(f32);

impl Scale {
    pub const ONE: Scale = Scale(1.0);

    pub fn new(factor: f32) -> Self {
        if factor == 0.0 || !factor.is_finite() {
            Scale::ONE
        } else {
            Scale(factor.abs())
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Scales a pixel length, truncating toward zero.
    pub fn apply(self, len: u32) -> u32 {
        (len as f32 * self.0) as u32
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::ONE
    }
}

impl From<f32> for Scale {
    fn from(factor: f32) -> Self {
        Scale::new(factor)
    }
}

/// Optional parameters of a blit. The defaults draw the whole source at its natural
/// size.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct BlitOptions {
    pub scale_w: Scale,
    pub scale_h: Scale,
    /// Sub-region of the source to draw, `None` for the entire source
    pub clip: Option<Rect>,
}

impl BlitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, w: f32, h: f32) -> Self {
        self.scale_w = Scale::new(w);
        self.scale_h = Scale::new(h);
        self
    }

    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Size of the region read from a source whose natural size is `natural`.
    pub fn source_size(&self, natural: Size) -> Size {
        match self.clip {
            Some(clip) => clip.size(),
            None => natural,
        }
    }

    /// Size the source region ends up with on the target.
    pub fn scaled_size(&self, natural: Size) -> Size {
        let src = self.source_size(natural);
        Size::new(self.scale_w.apply(src.w), self.scale_h.apply(src.h))
    }
}
