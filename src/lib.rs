//! leadx — Lead extractor
//!
//! Normalises pasted lead blocks and spreadsheet exports into a flat contact
//! table. This crate wires the core pipeline to the input feeds so the binary
//! and the integration harnesses share one code path.
//!
//! # Architecture
//!
//! ```text
//! leadx-feeds ──► leadx-core::Extractor ──► leadx-core::export ──► stdout
//!                        │
//!                        └──► per-row failures ──► stderr
//! ```

pub mod app;

pub use leadx_core;
pub use leadx_feeds;
