// Input module
//
// Translates player input into inventory actions:
// - Key names as stored in preferences
// - Rebindable controls with documented defaults
// - Key/scroll to action mapping
// - SDL2 event polling (behind the `sdl` feature)

pub mod actions;
pub mod bindings;
pub mod keys;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use actions::{ActionOutcome, InputAction, InputMapper, apply_action};
pub use bindings::{Binding, KeyBindings};
pub use keys::{Key, UnknownKey};
#[cfg(feature = "sdl")]
pub use sdl::SdlInputDriver;
