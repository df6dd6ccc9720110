use sdl3::event::Event;
use sdl3::keyboard::Keycode;
use blit_lib::InputAction;

/// Map keyboard input to lesson actions.
pub fn action_for_key(keycode: Keycode) -> Option<InputAction> {
    match keycode {
        Keycode::Up => Some(InputAction::Up),
        Keycode::Down => Some(InputAction::Down),
        Keycode::Left => Some(InputAction::Left),
        Keycode::Right => Some(InputAction::Right),
        Keycode::Escape => Some(InputAction::Quit),
        _ => None,
    }
}

pub fn action_for_event(event: &Event) -> Option<InputAction> {
    match event {
        // The X button on the window
        Event::Quit { .. } => Some(InputAction::Quit),
        Event::KeyDown { keycode: Some(keycode), .. } => action_for_key(*keycode),
        _ => None,
    }
}
