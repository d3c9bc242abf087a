pub mod assets;
pub mod audio;
pub mod bodies;
pub mod color;
pub mod config;
pub mod content;
pub mod error;
pub mod info;
pub mod render;
pub mod route;
pub mod sim;
