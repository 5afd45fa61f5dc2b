//! PHP binding profile for nib.
//!
//! Provides the [`BindingProfile`](nib_binding::BindingProfile) instance
//! describing PHP: snake_case variables, `T[]` / `map[string,T]` container
//! declarations, backslash-qualified model namespaces and `array(...)`
//! container literals.

mod naming;
mod profile;

pub use profile::profile;
