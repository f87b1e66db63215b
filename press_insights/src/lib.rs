//! # Press Insights
//!
//! Relationship views and aggregate analytics over a [`press_model::Press`].
//!
//! ## Core Components
//!
//! - **queries**: Author and magazine relationship views, plus press-wide aggregates
//! - **index**: Incrementally maintained author/magazine -> article lookups
//! - **digest**: A serializable summary report of a press
//! - **config**: Tunables for the query layer
//!
//! ## Design Philosophy
//!
//! - **Derived, never stored**: every view is recomputed by scanning the article registry
//! - **Read-only**: queries borrow the press and never mutate it
//! - **Explicit absence**: "no data" is `None`, never an empty collection

pub mod config;
pub mod digest;
pub mod index;
pub mod queries;

pub use config::*;
pub use digest::*;
pub use index::*;
pub use queries::*;
