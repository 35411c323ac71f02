pub mod config;
pub mod layout;
pub mod model;

pub use config::{ConfigError, EditorConfig};
pub use layout::{CanvasLayout, ContainerSize, pixel_size};
pub use model::*;
