//! `staffdesk-auth` — pure access-control boundary for the staffing back office.
//!
//! Derives a role from session claims and answers field-level view/edit
//! questions from a static permission matrix. Every check is total and fails
//! closed. This crate is decoupled from HTTP, storage, and the identity
//! provider.

pub mod access;
pub mod claims;
pub mod explain;
pub mod matrix;
pub mod permissions;
pub mod roles;
pub mod schema;
pub mod session;
mod standard;

pub use access::AccessContext;
pub use claims::ClaimSet;
pub use explain::{AccessExplanation, Check, DenialKind, DenialReason, explain};
pub use matrix::{MatrixEntry, PermissionMatrix};
pub use permissions::{Action, ActionFlags, EditPolicy, FieldGroup, GroupPolicy, ResourcePolicy};
pub use roles::{RoleTag, extract_owned_employee_id, resolve_role};
pub use session::{
    ConfigError, Session, SessionConfig, SessionId, SessionSlot, TokenClaims, TokenValidationError,
    validate_claims,
};
pub use staffdesk_core::{EmployeeId, PrincipalId, ResourceKind};
