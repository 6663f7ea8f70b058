//! preset-core: term index and query compiler for preset-search.
//!
//! Turns a free-form search term ("light rail station") into an Overpass QL
//! query over a bounding box, using the preset catalog of the iD editor to
//! decide which tags the term stands for.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► TermIndex ──► lookup ──► compiler ──► CompiledQuery
//!                 │                        │
//!                 └──► complete            └──► escape
//! ```
//!
//! The index is built once and never mutated afterwards, so a single
//! [`TermIndex`] can be shared across threads behind an `Arc` and queried
//! without locking.

pub mod catalog;
pub mod compiler;
pub mod config;
pub mod escape;
pub mod index;
pub mod lookup;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use compiler::{compile_many, compile_one, CompileError};
pub use escape::escape;
pub use index::{normalize_term, TermIndex};
pub use types::{
    BoundingBox, CompiledQuery, ElementType, FeatureDefinition, GeometryKind, TagCondition,
    TagValue, Translation,
};
