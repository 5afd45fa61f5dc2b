//! Abstract schema types for the nib binding layer.
//!
//! This crate provides the data model handed to the binding layer by the
//! external schema-loading collaborator. The types are language-agnostic:
//! they describe *what* a schema element is, never how it is rendered in a
//! target language.
//!
//! # Architecture
//!
//! ```text
//! interface description → schema loader (external) → nib-schema → nib-binding
//! ```
//!
//! The binding layer borrows these values read-only for the duration of one
//! resolve call; it never mutates or retains them.

mod descriptor;
mod types;

pub use descriptor::{OperationDescriptor, PropertyDescriptor};
pub use types::SchemaType;
