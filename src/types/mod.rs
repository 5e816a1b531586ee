pub mod color;
pub mod media;
pub mod settings;
