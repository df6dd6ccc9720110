use blit_lib::{InputAction, InputSource};
use crate::error::{AppError, AppResult};
use crate::sdl::input::action_for_event;
use crate::sdl::Context;

pub struct EventPump {
    pump: sdl3::EventPump,
}

impl InputSource for EventPump {
    fn poll_actions(&mut self, actions: &mut Vec<InputAction>) {
        actions.extend(self.pump.poll_iter().filter_map(|e| action_for_event(&e)));
    }
}

impl TryFrom<&Context> for EventPump {
    type Error = AppError;

    fn try_from(context: &Context) -> AppResult<Self> {
        Ok(EventPump {
            pump: context.event_pump().map_err(|e| AppError::Init(e.to_string()).logged())?,
        })
    }
}
