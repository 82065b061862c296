pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};
pub use scroll::{wire_explode_toggle, wire_nav_dots, wire_scroll_tracking};
