use tracing::debug;
use crate::geom::{Rect, Size};

/// Pixels the clip moves per key press.
pub const CLIP_STEP: i32 = 2;

/// Everything the lesson reacts to, independent of the input backend.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    /// Window closed or escape pressed
    Quit,
}

impl InputAction {
    /// Offset applied to the clip origin, `None` for non-directional actions.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            InputAction::Up => Some((0, -CLIP_STEP)),
            InputAction::Down => Some((0, CLIP_STEP)),
            InputAction::Left => Some((-CLIP_STEP, 0)),
            InputAction::Right => Some((CLIP_STEP, 0)),
            InputAction::Quit => None,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    Running,
    Quit,
}

/// Slides a clip rectangle across a spritesheet, wrapping around at the edges so
/// the clip pages through the frames cyclically.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ClipNavigator {
    clip: Rect,
    /// Wrap bounds: one frame times the frame count along each axis
    span: Size,
}

impl ClipNavigator {
    pub fn new(frame: Size, columns: u32, rows: u32) -> Self {
        ClipNavigator {
            clip: Rect::from_size(frame),
            span: Size::new(frame.w * columns, frame.h * rows),
        }
    }

    pub fn clip(&self) -> Rect {
        self.clip
    }

    pub fn span(&self) -> Size {
        self.span
    }

    pub fn apply(&mut self, action: InputAction) -> RunState {
        let Some((dx, dy)) = action.delta() else {
            return RunState::Quit;
        };

        self.clip.x = wrap(self.clip.x + dx, self.span.w);
        self.clip.y = wrap(self.clip.y + dy, self.span.h);
        debug!("Clip origin now ({}, {})", self.clip.x, self.clip.y);

        RunState::Running
    }
}

/// Euclidean modulo: stepping below zero lands at the far end of the span.
fn wrap(offset: i32, span: u32) -> i32 {
    if span == 0 {
        return 0;
    }
    offset.rem_euclid(span as i32)
}
