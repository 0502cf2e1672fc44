//! Wire record types shared by the service and server crates.
//!
//! Ids are caller-assigned integers, never generated here, and the stores do
//! not enforce uniqueness on them.

pub mod class;
pub mod student;

pub use class::Class;
pub use student::Student;
