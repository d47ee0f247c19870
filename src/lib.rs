pub mod config;
pub mod http;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
