pub mod api;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;
