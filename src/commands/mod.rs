mod colors;
mod demo;
mod shot;

pub use colors::cmd_colors;
pub use demo::cmd_demo;
pub use shot::cmd_shot;
