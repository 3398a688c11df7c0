pub mod auth;
pub mod avatar;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod mood;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod types;
pub mod ui;
pub mod views;
