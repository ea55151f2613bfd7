pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod recommend;
pub mod store;
