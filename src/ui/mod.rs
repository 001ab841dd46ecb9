pub mod render;
pub mod style;

pub use render::render_reply;
