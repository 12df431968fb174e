pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod interaction;
pub mod pipeline;
pub mod shading;
pub mod surface;
pub mod uniforms;

pub static FLOATING_LINES_WGSL: &str = include_str!("../shaders/floating_lines.wgsl");

pub use color::*;
pub use config::*;
pub use driver::*;
pub use interaction::*;
pub use surface::*;
pub use uniforms::*;
