pub mod app;
pub mod audio;
pub mod components;
pub mod storage;
pub mod styles;

pub use app::App;
