pub mod cli;
pub mod component;
pub mod config;
pub mod headless;
pub mod logging;
pub mod ui;
