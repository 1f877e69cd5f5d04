mod render;
mod sink;

pub use render::RenderError;
pub use sink::{SinkError, SinkResult};
