pub mod constants;
pub mod content;
pub mod html;
pub mod radar;
pub mod spring;
pub mod svg;
pub mod tilt;
pub mod view;

pub use constants::*;
pub use content::*;
pub use html::*;
pub use radar::*;
pub use spring::*;
pub use svg::*;
pub use tilt::*;
pub use view::*;
