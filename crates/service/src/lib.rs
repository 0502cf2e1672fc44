//! Service layer holding the in-memory roster state.
//! - Owns the student/class collections and the registration index.
//! - Preserves linear first-match lookup semantics; ids are not unique keys.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod roster;
