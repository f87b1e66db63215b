//! # Press Model
//!
//! The entity layer of Masthead - authors write articles, articles appear in
//! magazines, and every magazine belongs to a category.
//! This crate owns construction-time validation and the [`Press`] store that
//! holds the magazine and article registries. It contains no query logic;
//! relationship views live in `press_insights`.

pub mod entities;
pub mod error;
pub mod press;
pub mod rules;

pub use entities::*;
pub use error::*;
pub use press::*;
pub use rules::*;
