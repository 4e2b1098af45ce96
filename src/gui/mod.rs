// src/gui/mod.rs
pub mod app;
pub mod actions;
pub mod components;
pub mod thumbnail;
pub mod view;

pub use app::run;
