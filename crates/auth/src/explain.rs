//! Access explanations (audit trail).
//!
//! Answers "why can't I edit this field?" with the same lookups the checks
//! use, so an explanation never disagrees with the decision it describes.

use serde::Serialize;

use staffdesk_core::ResourceKind;

use crate::matrix::PermissionMatrix;
use crate::permissions::{Action, EditPolicy, FieldGroup};
use crate::roles::RoleTag;

/// The check being explained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check<'a> {
    /// View a field group.
    View { group: FieldGroup },
    /// Edit a field group, or one field of it.
    Edit {
        group: FieldGroup,
        field: Option<&'a str>,
    },
    /// A whole-resource action.
    Action { action: Action },
}

/// Detailed explanation of an access decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    pub resource: ResourceKind,
    pub role: RoleTag,
    /// What the role is for, from [`RoleTag::description`].
    pub role_description: &'static str,
    /// Group checked; `None` for whole-resource actions.
    pub group: Option<FieldGroup>,
    /// Field named by an edit check, if any.
    pub field: Option<String>,
    /// Whole-resource action checked; `None` for group checks.
    pub action: Option<Action>,
    /// Display form of the check, e.g. `edit marketingInfo.clientStatus`.
    pub check: String,
    pub granted: bool,
    /// Human-readable reason for the decision.
    pub reason: String,
    /// If denied, what was missing.
    pub denial: Option<DenialReason>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DenialReason {
    pub kind: DenialKind,
    pub message: String,
    /// Roles that would pass the same check.
    pub granting_roles: Vec<RoleTag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    /// The role has no record for this resource.
    NoMatrixEntry,
    /// The record does not mention the group.
    GroupAbsent,
    GroupHidden,
    GroupReadOnly,
    /// Per-field group checked without naming a field.
    FieldRequired,
    FieldNotListed,
    FieldReadOnly,
    ActionDenied,
}

impl core::fmt::Display for Check<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Check::View { group } => write!(f, "view {group}"),
            Check::Edit { group, field: None } => write!(f, "edit {group}"),
            Check::Edit {
                group,
                field: Some(field),
            } => write!(f, "edit {group}.{field}"),
            Check::Action { action } => write!(f, "{action} whole resource"),
        }
    }
}

fn passes(matrix: &PermissionMatrix, resource: ResourceKind, role: RoleTag, check: Check<'_>) -> bool {
    match check {
        Check::View { group } => matrix.can_view(resource, role, group),
        Check::Edit { group, field } => matrix.can_edit(resource, role, group, field),
        Check::Action { action } => matrix.allows(resource, role, action),
    }
}

/// Explain why `role` passes or fails `check` on `resource`.
pub fn explain(
    matrix: &PermissionMatrix,
    resource: ResourceKind,
    role: RoleTag,
    check: Check<'_>,
) -> AccessExplanation {
    let granted = passes(matrix, resource, role, check);
    let denial = if granted {
        None
    } else {
        let (kind, message) = denial_detail(matrix, resource, role, check);
        let granting_roles = RoleTag::ALL
            .into_iter()
            .filter(|other| passes(matrix, resource, *other, check))
            .collect();
        Some(DenialReason {
            kind,
            message,
            granting_roles,
        })
    };

    let reason = match &denial {
        None => format!("{role} may {check} on {resource}"),
        Some(d) => format!("{role} may not {check} on {resource}: {}", d.message),
    };

    let (group, field, action) = match check {
        Check::View { group } => (Some(group), None, None),
        Check::Edit { group, field } => (Some(group), field.map(str::to_string), None),
        Check::Action { action } => (None, None, Some(action)),
    };

    AccessExplanation {
        resource,
        role,
        role_description: role.description(),
        group,
        field,
        action,
        check: check.to_string(),
        granted,
        reason,
        denial,
    }
}

fn denial_detail(
    matrix: &PermissionMatrix,
    resource: ResourceKind,
    role: RoleTag,
    check: Check<'_>,
) -> (DenialKind, String) {
    let Some(policy) = matrix.entry(resource, role) else {
        return (
            DenialKind::NoMatrixEntry,
            format!("no permissions are configured for {role} on {resource}"),
        );
    };

    match check {
        Check::Action { action } => (
            DenialKind::ActionDenied,
            format!("the '{action}' action is not granted"),
        ),
        Check::View { group } => match policy.group(group) {
            None => group_absent(group),
            Some(_) => (DenialKind::GroupHidden, format!("{group} is hidden")),
        },
        Check::Edit { group, field } => match policy.group(group).map(|g| (g.edit, field)) {
            None => group_absent(group),
            Some((EditPolicy::Uniform(_), _)) => {
                (DenialKind::GroupReadOnly, format!("{group} is read-only"))
            }
            Some((EditPolicy::PerField(_), None)) => (
                DenialKind::FieldRequired,
                format!("{group} is controlled per field; name the field"),
            ),
            Some((EditPolicy::PerField(fields), Some(name))) => {
                if fields.iter().any(|(f, _)| *f == name) {
                    (DenialKind::FieldReadOnly, format!("{name} is read-only"))
                } else {
                    (
                        DenialKind::FieldNotListed,
                        format!("{name} is not an editable field of {group}"),
                    )
                }
            }
        },
    }
}

fn group_absent(group: FieldGroup) -> (DenialKind, String) {
    (
        DenialKind::GroupAbsent,
        format!("{group} is not configured for this role"),
    )
}
