//! `staffdesk-core` — domain primitives shared by the staffdesk crates.
//!
//! This crate contains **pure domain** types (no I/O, no identity provider).

pub mod error;
pub mod id;
pub mod resource;

pub use error::DomainError;
pub use id::{EmployeeId, PrincipalId};
pub use resource::ResourceKind;
