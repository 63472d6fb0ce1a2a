pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod forms;
pub mod gallery;
pub mod logging;
pub mod models;
pub mod render;
pub mod routes;
pub mod store;
pub mod views;

#[cfg(test)]
mod test_utils;

pub const VERSION: &str = "0.1.0";
