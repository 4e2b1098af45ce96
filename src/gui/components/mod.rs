// src/gui/components/mod.rs
pub mod details;
pub mod notice;
pub mod summary;
pub mod url_bar;
