pub mod app;
pub mod cli;
pub mod config;
pub mod events;
pub mod filter;
pub mod ingredient;
pub mod remote;
pub mod session;
pub mod store;
pub mod tea;
pub mod theme;
pub mod ui;

pub use app::App;
