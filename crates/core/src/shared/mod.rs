pub mod constants;
pub mod media_paths;
pub mod settings;
pub mod timestamp;
