pub mod keyboard;
pub mod nav;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use nav::wire_navigation;
pub use pointer::wire_tilt_handlers;
