//! Field layout of each resource: which backend field belongs to which group.
//!
//! Field names are the backend's JSON keys.

use staffdesk_core::ResourceKind;

use crate::FieldGroup;

/// Key identifying a record; never redacted.
pub const RECORD_KEY: &str = "id";

/// Employee `basicInfo` fields an employee may edit on their own record.
pub const SELF_SERVICE_FIELDS: &[&str] = &["phone", "email", "address"];

type Layout = &'static [(FieldGroup, &'static [&'static str])];

const CLIENT: Layout = &[
    (
        FieldGroup::BasicInfo,
        &["firstName", "lastName", "email", "phone", "visaStatus", "location"],
    ),
    (
        FieldGroup::MarketingInfo,
        &[
            "clientStatus",
            "marketingStartDate",
            "marketingEndDate",
            "assignedRecruiter",
            "marketingEmail",
            "technology",
        ],
    ),
    (
        FieldGroup::SubscriptionInfo,
        &["subscriptionPlan", "subscriptionAmount", "paymentStatus", "enrollmentDate"],
    ),
    (
        FieldGroup::PostPlacementInfo,
        &["placedCompany", "placementDate", "salary", "postPlacementFee"],
    ),
];

const EMPLOYEE: Layout = &[
    (
        FieldGroup::BasicInfo,
        &["firstName", "lastName", "email", "phone", "address", "designation"],
    ),
    (
        FieldGroup::EmploymentInfo,
        &["department", "jobRole", "joiningDate", "reportingManager", "employmentStatus"],
    ),
    (FieldGroup::PayrollInfo, &["salary", "bankAccount", "taxId"]),
];

const INTERVIEW: Layout = &[
    (
        FieldGroup::BasicInfo,
        &["clientId", "company", "position", "interviewDate", "interviewRound", "interviewMode"],
    ),
    (FieldGroup::FeedbackInfo, &["interviewStatus", "feedback", "recruiterNotes"]),
];

/// Groups of `resource`, each with its fields.
pub fn layout(resource: ResourceKind) -> &'static [(FieldGroup, &'static [&'static str])] {
    match resource {
        ResourceKind::Client => CLIENT,
        ResourceKind::Employee => EMPLOYEE,
        ResourceKind::Interview => INTERVIEW,
    }
}

/// Fields of one group; empty when the group does not exist on `resource`.
pub fn fields(resource: ResourceKind, group: FieldGroup) -> &'static [&'static str] {
    layout(resource)
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

/// The group a field belongs to, if the field is known.
pub fn group_of(resource: ResourceKind, field: &str) -> Option<FieldGroup> {
    layout(resource)
        .iter()
        .find(|(_, fields)| fields.iter().any(|f| *f == field))
        .map(|(group, _)| *group)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn field_names_are_unique_within_a_resource() {
        for resource in ResourceKind::ALL {
            let mut seen = HashSet::new();
            for (_, fields) in layout(resource) {
                for field in *fields {
                    assert!(seen.insert(*field), "{resource}: duplicate field {field}");
                    assert_ne!(*field, RECORD_KEY);
                }
            }
        }
    }

    #[test]
    fn group_of_finds_owning_group() {
        assert_eq!(
            group_of(ResourceKind::Client, "clientStatus"),
            Some(FieldGroup::MarketingInfo)
        );
        assert_eq!(group_of(ResourceKind::Employee, "salary"), Some(FieldGroup::PayrollInfo));
        assert_eq!(group_of(ResourceKind::Interview, "salary"), None);
    }

    #[test]
    fn foreign_group_has_no_fields() {
        assert!(fields(ResourceKind::Interview, FieldGroup::PayrollInfo).is_empty());
    }

    #[test]
    fn self_service_fields_are_employee_basic_info() {
        for field in SELF_SERVICE_FIELDS {
            assert_eq!(group_of(ResourceKind::Employee, field), Some(FieldGroup::BasicInfo));
        }
    }
}
