pub mod commands;
pub mod config;
pub mod console;
pub mod constants;
pub mod drill;
pub mod logging;
pub mod response;
pub mod state;
pub mod store;
pub mod validation;
