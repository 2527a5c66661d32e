//! Total lookups over the (resource, role) permission matrix.
//!
//! - No IO
//! - No panics
//! - Deny-by-default: any miss resolves to [`ResourcePolicy::DENY_ALL`]

use serde::Serialize;

use staffdesk_core::ResourceKind;

use crate::permissions::{Action, FieldGroup, ResourcePolicy};
use crate::roles::RoleTag;
use crate::standard::STANDARD_ENTRIES;

/// One (resource, role) cell of the matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixEntry {
    pub resource: ResourceKind,
    pub role: RoleTag,
    pub policy: ResourcePolicy,
}

/// Immutable mapping (resource, role) → [`ResourcePolicy`].
///
/// The agency's matrix is [`PermissionMatrix::standard`]; other matrices can
/// be built from any `'static` entry table.
#[derive(Debug, Copy, Clone)]
pub struct PermissionMatrix {
    entries: &'static [MatrixEntry],
}

static STANDARD: PermissionMatrix = PermissionMatrix::new(STANDARD_ENTRIES);
static DENY_ALL: ResourcePolicy = ResourcePolicy::DENY_ALL;

impl PermissionMatrix {
    /// Build a matrix over `entries`. The first entry for a pair wins.
    pub const fn new(entries: &'static [MatrixEntry]) -> Self {
        Self { entries }
    }

    pub fn standard() -> &'static PermissionMatrix {
        &STANDARD
    }

    pub fn entries(&self) -> &'static [MatrixEntry] {
        self.entries
    }

    /// The configured record, if the pair is present.
    pub fn entry(&self, resource: ResourceKind, role: RoleTag) -> Option<&'static ResourcePolicy> {
        self.entries
            .iter()
            .find(|e| e.resource == resource && e.role == role)
            .map(|e| &e.policy)
    }

    /// The record for a pair; a missing pair yields the deny-all record.
    pub fn policy(&self, resource: ResourceKind, role: RoleTag) -> &'static ResourcePolicy {
        match self.entry(resource, role) {
            Some(policy) => policy,
            None => {
                tracing::debug!(%resource, %role, "no permission entry; treating as fully denied");
                &DENY_ALL
            }
        }
    }

    pub fn can_view(&self, resource: ResourceKind, role: RoleTag, group: FieldGroup) -> bool {
        self.policy(resource, role).can_view(group)
    }

    /// Edit access for a group, or for one field of it.
    ///
    /// Groups with per-field control need `field`; without it, or when the
    /// field is not listed, the answer is `false`.
    pub fn can_edit(
        &self,
        resource: ResourceKind,
        role: RoleTag,
        group: FieldGroup,
        field: Option<&str>,
    ) -> bool {
        let allowed = self.policy(resource, role).can_edit(group, field);
        if !allowed {
            tracing::trace!(%resource, %role, %group, field, "edit denied");
        }
        allowed
    }

    /// Whether any edit path for `resource` is reachable at all.
    pub fn can_edit_anything(&self, resource: ResourceKind, role: RoleTag) -> bool {
        self.policy(resource, role).edits_anything()
    }

    pub fn allows(&self, resource: ResourceKind, role: RoleTag, action: Action) -> bool {
        self.policy(resource, role).actions.allows(action)
    }

    pub fn can_add(&self, resource: ResourceKind, role: RoleTag) -> bool {
        self.allows(resource, role, Action::Add)
    }

    pub fn can_view_whole(&self, resource: ResourceKind, role: RoleTag) -> bool {
        self.allows(resource, role, Action::View)
    }

    pub fn can_edit_whole(&self, resource: ResourceKind, role: RoleTag) -> bool {
        self.allows(resource, role, Action::Edit)
    }

    pub fn can_delete_whole(&self, resource: ResourceKind, role: RoleTag) -> bool {
        self.allows(resource, role, Action::Delete)
    }
}

impl Default for PermissionMatrix {
    fn default() -> Self {
        STANDARD
    }
}
