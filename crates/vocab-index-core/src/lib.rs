//! # Vocab Index Core
//!
//! Shared, I/O-free logic for Vocab Index: data models, tokenization,
//! frequency counting, dictionary validation, document extraction
//! orchestration, and the store abstraction.
//!
//! This crate contains no tokio, sqlx, filesystem, or archive
//! dependencies. Concrete container parsers, markup strippers,
//! dictionary oracles, and the SQLite store live in the `vocab-index`
//! application crate and plug in through the traits defined here.

pub mod confirm;
pub mod dictionary;
pub mod extract;
pub mod frequency;
pub mod models;
pub mod store;
pub mod tokenize;
