pub mod bundle;
pub mod config;
pub mod hud;
pub mod ids;
pub mod pack_files;
pub mod preview;
pub mod scanner;
