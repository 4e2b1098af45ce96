// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction specifications. A spec encodes *where the ground
//! truth lives in the markup* and *how to read it tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML reading** over a parsed [`Document`](crate::core::Document).
//! - **Selector choice** (ids, tag + class sets) and the fallback when a
//!   selector finds nothing.
//! - **Light shaping** of results into an [`Extraction`](crate::record::Extraction).
//!
//! ## What does **not** live here
//! - **Network** – the page arrives as text; image bytes are fetched by the runner.
//! - **Display or export formatting** – `display` and `export` own those.
//!
//! ## Conventions & invariants
//! - Each field is looked up **independently**. A missing section yields its
//!   placeholder, an empty collection, or `None`; it never aborts the others.
//!   Partial extraction is success.
//! - Text is stripped at both ends and otherwise verbatim. No numeric parsing.
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline fragments and the saved
//!   listing under `tests/fixtures/`.
pub mod product;

pub use product::extract;
