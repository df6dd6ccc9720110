//! Window-less stand-ins for the rendering device and the input backend.

use std::collections::VecDeque;
use crate::frame::InputSource;
use crate::geom::{Rect, Size};
use crate::input::InputAction;
use crate::render::{Drawable, RenderTarget};

/// A drawable backed by plain memory, one `u32` per pixel.
pub struct Sheet {
    size: Size,
    pub pixels: Vec<u32>,
}

impl Sheet {
    pub fn new(w: u32, h: u32) -> Self {
        Sheet {
            size: Size::new(w, h),
            pixels: vec![0xffff_ffff; (w * h) as usize],
        }
    }

    /// Every pixel gets a distinct non-zero value.
    pub fn patterned(w: u32, h: u32) -> Self {
        Sheet {
            size: Size::new(w, h),
            pixels: (1..=w * h).collect(),
        }
    }
}

impl Drawable for Sheet {
    fn size(&self) -> Size {
        self.size
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Blit {
    pub clip: Option<Rect>,
    pub dest: Rect,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Call {
    Clear,
    Copy(Blit),
    Present,
}

/// Logs every call made against it.
pub struct Recorder {
    size: Size,
    pub blits: Vec<Blit>,
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn new(w: u32, h: u32) -> Self {
        Recorder {
            size: Size::new(w, h),
            blits: Vec::new(),
            calls: Vec::new(),
        }
    }

    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Present).count()
    }
}

impl RenderTarget<Sheet> for Recorder {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn copy(&mut self, _src: &Sheet, clip: Option<Rect>, dest: Rect) {
        let blit = Blit { clip, dest };
        self.blits.push(blit);
        self.calls.push(Call::Copy(blit));
    }

    fn present(&mut self) {
        self.calls.push(Call::Present);
    }
}

/// Software back buffer doing nearest neighbour stretch blits.
pub struct PixelTarget {
    size: Size,
    pub pixels: Vec<u32>,
}

impl PixelTarget {
    pub fn new(w: u32, h: u32) -> Self {
        PixelTarget {
            size: Size::new(w, h),
            pixels: vec![0; (w * h) as usize],
        }
    }
}

impl RenderTarget<Sheet> for PixelTarget {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn copy(&mut self, src: &Sheet, clip: Option<Rect>, dest: Rect) {
        let clip = clip.unwrap_or(Rect::from_size(src.size));
        if dest.w == 0 || dest.h == 0 {
            return;
        }

        for dy in 0..dest.h {
            let ty = dest.y + dy as i32;
            if ty < 0 || ty as u32 >= self.size.h {
                continue;
            }
            let sy = clip.y as u32 + dy * clip.h / dest.h;
            for dx in 0..dest.w {
                let tx = dest.x + dx as i32;
                if tx < 0 || tx as u32 >= self.size.w {
                    continue;
                }
                let sx = clip.x as u32 + dx * clip.w / dest.w;
                if sx < src.size.w && sy < src.size.h {
                    self.pixels[(ty as u32 * self.size.w + tx as u32) as usize] =
                        src.pixels[(sy * src.size.w + sx) as usize];
                }
            }
        }
    }

    fn present(&mut self) {}
}

/// Hands out one batch of actions per poll, then nothing.
pub struct Script {
    frames: VecDeque<Vec<InputAction>>,
    pub polls: usize,
}

impl Script {
    pub fn new(frames: Vec<Vec<InputAction>>) -> Self {
        Script {
            frames: frames.into(),
            polls: 0,
        }
    }
}

impl InputSource for Script {
    fn poll_actions(&mut self, actions: &mut Vec<InputAction>) {
        self.polls += 1;
        match self.frames.pop_front() {
            Some(batch) => actions.extend(batch),
            // Ran out of input: close the window so tests always terminate
            None => actions.push(InputAction::Quit),
        }
    }
}
