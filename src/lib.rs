// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod display;
pub mod error;
pub mod export;
pub mod file;
pub mod gui;
pub mod record;
pub mod runner;
