use tracing::info;
use crate::input::{InputAction, RunState};
use crate::render::{Drawable, RenderTarget};
use crate::scene::Scene;

/// Non-blocking source of input.
pub trait InputSource {
    /// Appends every action that is pending right now and returns immediately.
    fn poll_actions(&mut self, actions: &mut Vec<InputAction>);
}

/// Drives `scene` until a quit action arrives. Returns the number of frames
/// presented.
///
/// Frame pacing is left to the target's `present`.
pub fn run<D, T, I>(scene: &mut Scene<D>, target: &mut T, input: &mut I) -> u64
where
    D: Drawable,
    T: RenderTarget<D> + ?Sized,
    I: InputSource + ?Sized,
{
    let mut state = RunState::Running;
    let mut actions = Vec::new();
    let mut frames = 0u64;

    while state == RunState::Running {
        actions.clear();
        input.poll_actions(&mut actions);

        for action in actions.iter().copied() {
            if scene.handle(action) == RunState::Quit {
                state = RunState::Quit;
            }
        }

        if state == RunState::Quit {
            break;
        }

        scene.draw(target);
        frames += 1;
    }

    info!("Leaving frame loop after {} frames", frames);
    frames
}
