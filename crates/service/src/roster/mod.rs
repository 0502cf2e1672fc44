//! In-memory roster stores.
//!
//! Each store is a cheap `Clone` handle over `Arc<RwLock<..>>`; one lock per
//! collection serializes operations against it. State lives for the process
//! lifetime only — there is no persistence layer behind these.

pub mod classes;
pub mod registrations;
pub mod students;

pub use classes::ClassStore;
pub use registrations::{RegisterOutcome, RegistrationIndex};
pub use students::StudentStore;
