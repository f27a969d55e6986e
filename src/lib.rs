pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod session;
pub mod ui;
