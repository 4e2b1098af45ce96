// src/gui/actions/mod.rs

mod fetch;

pub use fetch::fetch;
