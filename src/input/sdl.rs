//! SDL2 frame-poll driver (enabled with the `sdl` feature)
//!
//! Drains the SDL event queue once per frame and turns keyboard, mouse
//! button and wheel events into [`InputAction`]s for the inventory.

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use super::actions::{InputAction, InputMapper};
use super::keys::Key;

impl Key {
    /// Key matching an SDL keycode, if it is one we bind
    pub fn from_keycode(keycode: Keycode) -> Option<Key> {
        let key = match keycode {
            Keycode::Num0 => Key::Alpha0,
            Keycode::Num1 => Key::Alpha1,
            Keycode::Num2 => Key::Alpha2,
            Keycode::Num3 => Key::Alpha3,
            Keycode::Num4 => Key::Alpha4,
            Keycode::Num5 => Key::Alpha5,
            Keycode::Num6 => Key::Alpha6,
            Keycode::Num7 => Key::Alpha7,
            Keycode::Num8 => Key::Alpha8,
            Keycode::Num9 => Key::Alpha9,
            Keycode::F1 => Key::F1,
            Keycode::F2 => Key::F2,
            Keycode::F3 => Key::F3,
            Keycode::F4 => Key::F4,
            Keycode::F5 => Key::F5,
            Keycode::F6 => Key::F6,
            Keycode::F7 => Key::F7,
            Keycode::F8 => Key::F8,
            Keycode::F9 => Key::F9,
            Keycode::F10 => Key::F10,
            Keycode::F11 => Key::F11,
            Keycode::F12 => Key::F12,
            Keycode::LShift => Key::LeftShift,
            Keycode::RShift => Key::RightShift,
            Keycode::LCtrl => Key::LeftControl,
            Keycode::RCtrl => Key::RightControl,
            Keycode::LAlt => Key::LeftAlt,
            Keycode::RAlt => Key::RightAlt,
            Keycode::Space => Key::Space,
            Keycode::Return => Key::Return,
            Keycode::Escape => Key::Escape,
            Keycode::Tab => Key::Tab,
            Keycode::Backspace => Key::Backspace,
            Keycode::Up => Key::UpArrow,
            Keycode::Down => Key::DownArrow,
            Keycode::Left => Key::LeftArrow,
            Keycode::Right => Key::RightArrow,
            // Letters share their names with SDL
            other => {
                return other
                    .name()
                    .parse()
                    .ok()
                    .filter(|key: &Key| key.name().len() == 1);
            }
        };
        Some(key)
    }

    /// Key matching an SDL mouse button
    pub fn from_mouse_button(button: MouseButton) -> Option<Key> {
        match button {
            MouseButton::Left => Some(Key::Mouse0),
            MouseButton::Right => Some(Key::Mouse1),
            MouseButton::Middle => Some(Key::Mouse2),
            MouseButton::X1 => Some(Key::Mouse3),
            MouseButton::X2 => Some(Key::Mouse4),
            _ => None,
        }
    }
}

/// Polls SDL events and produces inventory actions
pub struct SdlInputDriver {
    mapper: InputMapper,
}

impl SdlInputDriver {
    pub fn new(mapper: InputMapper) -> Self {
        SdlInputDriver { mapper }
    }

    pub fn mapper(&self) -> &InputMapper {
        &self.mapper
    }

    /// Drains all pending events for this frame
    ///
    /// Returns the inventory actions in event order, and whether a quit
    /// event was seen.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> (Vec<InputAction>, bool) {
        let mut actions = Vec::new();
        let mut quit = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => quit = true,
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) =
                        Key::from_keycode(keycode).and_then(|key| self.mapper.map_key(key))
                    {
                        actions.push(action);
                    }
                }
                Event::MouseButtonDown { mouse_btn, .. } => {
                    if let Some(action) =
                        Key::from_mouse_button(mouse_btn).and_then(|key| self.mapper.map_key(key))
                    {
                        actions.push(action);
                    }
                }
                Event::MouseWheel { y, .. } => {
                    if let Some(action) = self.mapper.map_scroll(y as f32) {
                        actions.push(action);
                    }
                }
                _ => {
                    // Other events belong to other systems
                }
            }
        }

        (actions, quit)
    }
}
