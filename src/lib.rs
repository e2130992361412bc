pub mod cli;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod headless;
pub mod logging;
pub mod registry;
pub mod shutdown;
pub mod ui;
