//! Per-request access evaluation.
//!
//! An [`AccessContext`] is built once per request/render from the current
//! claims. It carries the resolved role and the owned employee id, and it is
//! passed explicitly to whatever renders or validates fields.

use serde_json::{Map, Value};

use staffdesk_core::{EmployeeId, ResourceKind};

use crate::ClaimSet;
use crate::explain::{AccessExplanation, Check, explain};
use crate::matrix::PermissionMatrix;
use crate::permissions::FieldGroup;
use crate::roles::{RoleTag, extract_owned_employee_id, resolve_role};
use crate::schema;

/// Role-resolved view of the permission matrix for one principal.
#[derive(Debug, Clone, Copy)]
pub struct AccessContext<'m> {
    role: RoleTag,
    owned_employee: Option<EmployeeId>,
    matrix: &'m PermissionMatrix,
}

impl<'m> AccessContext<'m> {
    pub fn new(claims: &ClaimSet, matrix: &'m PermissionMatrix) -> Self {
        Self {
            role: resolve_role(claims),
            owned_employee: extract_owned_employee_id(claims),
            matrix,
        }
    }

    /// Context for a caller with no session: role `Default`, owns nothing.
    pub fn anonymous(matrix: &'m PermissionMatrix) -> Self {
        Self::for_role(RoleTag::Default, matrix)
    }

    pub fn for_role(role: RoleTag, matrix: &'m PermissionMatrix) -> Self {
        Self {
            role,
            owned_employee: None,
            matrix,
        }
    }

    pub fn role(&self) -> RoleTag {
        self.role
    }

    pub fn owned_employee(&self) -> Option<EmployeeId> {
        self.owned_employee
    }

    pub fn can_view(&self, resource: ResourceKind, group: FieldGroup) -> bool {
        self.matrix.can_view(resource, self.role, group)
    }

    pub fn can_edit(&self, resource: ResourceKind, group: FieldGroup, field: Option<&str>) -> bool {
        self.matrix.can_edit(resource, self.role, group, field)
    }

    pub fn can_edit_anything(&self, resource: ResourceKind) -> bool {
        self.matrix.can_edit_anything(resource, self.role)
    }

    pub fn can_add(&self, resource: ResourceKind) -> bool {
        self.matrix.can_add(resource, self.role)
    }

    pub fn can_view_whole(&self, resource: ResourceKind) -> bool {
        self.matrix.can_view_whole(resource, self.role)
    }

    pub fn can_edit_whole(&self, resource: ResourceKind) -> bool {
        self.matrix.can_edit_whole(resource, self.role)
    }

    pub fn can_delete_whole(&self, resource: ResourceKind) -> bool {
        self.matrix.can_delete_whole(resource, self.role)
    }

    /// Whether `target` is the principal's own employee record.
    pub fn owns_employee(&self, target: EmployeeId) -> bool {
        self.owned_employee == Some(target)
    }

    /// Edit check for a field of a specific employee record.
    ///
    /// Grants when the role may edit the field, or when the record is the
    /// principal's own and the field is one of [`schema::SELF_SERVICE_FIELDS`].
    pub fn can_edit_employee_field(&self, target: EmployeeId, group: FieldGroup, field: &str) -> bool {
        if self.can_edit(ResourceKind::Employee, group, Some(field)) {
            return true;
        }
        self.owns_employee(target)
            && group == FieldGroup::BasicInfo
            && schema::SELF_SERVICE_FIELDS.iter().any(|f| *f == field)
    }

    /// Whether the edit screen of employee `target` is reachable at all.
    pub fn can_open_employee_editor(&self, target: EmployeeId) -> bool {
        self.can_edit_anything(ResourceKind::Employee) || self.owns_employee(target)
    }

    /// Schema fields the role may see, in schema order.
    pub fn visible_fields(&self, resource: ResourceKind) -> Vec<&'static str> {
        schema::layout(resource)
            .iter()
            .filter(|(group, _)| self.can_view(resource, *group))
            .flat_map(|(_, fields)| fields.iter().copied())
            .collect()
    }

    /// Schema fields the role may edit, in schema order.
    pub fn editable_fields(&self, resource: ResourceKind) -> Vec<&'static str> {
        schema::layout(resource)
            .iter()
            .flat_map(|(group, fields)| fields.iter().map(move |field| (*group, *field)))
            .filter(|(group, field)| self.can_edit(resource, *group, Some(*field)))
            .map(|(_, field)| field)
            .collect()
    }

    /// Remove from a backend record every key the role may not see.
    ///
    /// Keys unknown to the schema are removed too, except [`schema::RECORD_KEY`].
    /// Returns the removed keys.
    pub fn redact(&self, resource: ResourceKind, record: &mut Map<String, Value>) -> Vec<String> {
        self.retain(record, |key| {
            key == schema::RECORD_KEY
                || schema::group_of(resource, key).is_some_and(|group| self.can_view(resource, group))
        })
    }

    /// Remove from an outgoing patch every key the role may not edit.
    ///
    /// Returns the removed keys so callers can report them.
    pub fn retain_editable(&self, resource: ResourceKind, patch: &mut Map<String, Value>) -> Vec<String> {
        self.retain(patch, |key| {
            schema::group_of(resource, key)
                .is_some_and(|group| self.can_edit(resource, group, Some(key)))
        })
    }

    /// [`Self::retain_editable`] for an employee record, honoring self-service.
    pub fn retain_editable_employee(
        &self,
        target: EmployeeId,
        patch: &mut Map<String, Value>,
    ) -> Vec<String> {
        self.retain(patch, |key| {
            schema::group_of(ResourceKind::Employee, key)
                .is_some_and(|group| self.can_edit_employee_field(target, group, key))
        })
    }

    pub fn explain(&self, resource: ResourceKind, check: Check<'_>) -> AccessExplanation {
        explain(self.matrix, resource, self.role, check)
    }

    fn retain(&self, map: &mut Map<String, Value>, keep: impl Fn(&str) -> bool) -> Vec<String> {
        let removed: Vec<String> = map.keys().filter(|key| !keep(key.as_str())).cloned().collect();
        for key in &removed {
            map.remove(key);
        }
        if !removed.is_empty() {
            tracing::debug!(role = %self.role, ?removed, "dropped fields outside access");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn ctx(claims: &[&str]) -> AccessContext<'static> {
        let claims: ClaimSet = claims.iter().copied().collect();
        AccessContext::new(&claims, PermissionMatrix::standard())
    }

    #[test]
    fn context_carries_role_and_owned_id() {
        let access = ctx(&["EmployeeID_42", "recruiter"]);
        assert_eq!(access.role(), RoleTag::Recruiter);
        assert_eq!(access.owned_employee(), Some(EmployeeId::new(42)));
        assert!(access.owns_employee(EmployeeId::new(42)));
        assert!(!access.owns_employee(EmployeeId::new(43)));
    }

    #[test]
    fn anonymous_context_sees_nothing() {
        let access = AccessContext::anonymous(PermissionMatrix::standard());
        for resource in ResourceKind::ALL {
            assert!(access.visible_fields(resource).is_empty());
            assert!(access.editable_fields(resource).is_empty());
            assert!(!access.can_edit_anything(resource));
        }
    }

    #[test]
    fn self_service_applies_only_to_own_record() {
        let access = ctx(&["EmployeeID_42", "recruiter"]);
        let own = EmployeeId::new(42);
        let other = EmployeeId::new(7);

        assert!(!access.can_edit(ResourceKind::Employee, FieldGroup::BasicInfo, Some("phone")));
        assert!(access.can_edit_employee_field(own, FieldGroup::BasicInfo, "phone"));
        assert!(!access.can_edit_employee_field(own, FieldGroup::BasicInfo, "designation"));
        assert!(!access.can_edit_employee_field(own, FieldGroup::PayrollInfo, "salary"));
        assert!(!access.can_edit_employee_field(other, FieldGroup::BasicInfo, "phone"));

        assert!(access.can_open_employee_editor(own));
        assert!(!access.can_open_employee_editor(other));
    }

    #[test]
    fn admin_edits_any_employee_field() {
        let access = ctx(&["Admin"]);
        assert!(access.can_edit_employee_field(EmployeeId::new(1), FieldGroup::PayrollInfo, "salary"));
    }

    #[test]
    fn redact_removes_hidden_groups_and_unknown_keys() {
        let access = ctx(&["recruiter"]);
        let mut record = object(json!({
            "id": 9,
            "firstName": "Ada",
            "clientStatus": "active",
            "subscriptionPlan": "gold",
            "salary": 120000,
            "internalScore": 4
        }));

        let mut removed = access.redact(ResourceKind::Client, &mut record);
        removed.sort();

        assert_eq!(removed, vec!["internalScore", "salary", "subscriptionPlan"]);
        assert_eq!(record.len(), 3);
        assert!(record.contains_key("id"));
        assert!(record.contains_key("clientStatus"));
    }

    #[test]
    fn retain_editable_keeps_only_editable_fields() {
        let access = ctx(&["Senior_Recruiter"]);
        let mut patch = object(json!({
            "clientStatus": "placed",
            "marketingStartDate": "2026-01-05",
            "placedCompany": "Initech",
            "salary": 99000,
            "firstName": "Bob"
        }));

        let mut removed = access.retain_editable(ResourceKind::Client, &mut patch);
        removed.sort();

        assert_eq!(removed, vec!["clientStatus", "firstName", "salary"]);
        let mut kept: Vec<_> = patch.keys().cloned().collect();
        kept.sort();
        assert_eq!(kept, vec!["marketingStartDate", "placedCompany"]);
    }

    #[test]
    fn retain_editable_employee_honors_self_service() {
        let access = ctx(&["EmployeeID_5", "Resume_Writer"]);
        let mut patch = object(json!({ "phone": "555-0100", "designation": "Lead" }));

        let removed = access.retain_editable_employee(EmployeeId::new(5), &mut patch);

        assert_eq!(removed, vec!["designation"]);
        assert!(patch.contains_key("phone"));
    }

    #[test]
    fn visible_and_editable_fields_follow_matrix() {
        let access = ctx(&["recruiter"]);
        let visible = access.visible_fields(ResourceKind::Client);
        assert!(visible.contains(&"clientStatus"));
        assert!(!visible.contains(&"subscriptionPlan"));
        assert_eq!(
            access.editable_fields(ResourceKind::Client),
            vec!["marketingEmail", "technology"]
        );
    }
}
