pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_aurora, wire_preview_press, wire_ripples, PressTarget};
