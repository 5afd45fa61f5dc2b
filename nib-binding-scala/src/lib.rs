//! Scala binding profile for nib.
//!
//! Provides the [`BindingProfile`](nib_binding::BindingProfile) instance
//! describing Scala: camelCase variables, generic `Seq[T]` /
//! `Map[String, T]` container declarations, backtick reserved-word escaping
//! and `Seq(...)` / `Map(...)` container literals.

mod naming;
mod profile;

pub use profile::profile;
