//! Permission records: field groups, their view/edit policies, and
//! resource-level action flags.
//!
//! Every type here is `Copy` and built from `'static` data so that a whole
//! matrix can live in a `static`.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use staffdesk_core::DomainError;

/// Named cluster of related fields on a resource sharing one policy unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldGroup {
    BasicInfo,
    MarketingInfo,
    SubscriptionInfo,
    PostPlacementInfo,
    EmploymentInfo,
    PayrollInfo,
    FeedbackInfo,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 7] = [
        Self::BasicInfo,
        Self::MarketingInfo,
        Self::SubscriptionInfo,
        Self::PostPlacementInfo,
        Self::EmploymentInfo,
        Self::PayrollInfo,
        Self::FeedbackInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicInfo => "basicInfo",
            Self::MarketingInfo => "marketingInfo",
            Self::SubscriptionInfo => "subscriptionInfo",
            Self::PostPlacementInfo => "postPlacementInfo",
            Self::EmploymentInfo => "employmentInfo",
            Self::PayrollInfo => "payrollInfo",
            Self::FeedbackInfo => "feedbackInfo",
        }
    }
}

impl core::fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| DomainError::unknown("field group", s))
    }
}

/// Edit policy of a field group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EditPolicy {
    /// Applies to every field of the group.
    Uniform(bool),
    /// Per-field control; fields not listed are not editable.
    PerField(&'static [(&'static str, bool)]),
}

impl EditPolicy {
    /// Decide edit access for `field`.
    ///
    /// A per-field policy needs a field name; without one the answer is `false`.
    pub fn allows(&self, field: Option<&str>) -> bool {
        match self {
            Self::Uniform(allowed) => *allowed,
            Self::PerField(fields) => field.is_some_and(|name| lookup_field(fields, name)),
        }
    }

    /// True if at least one field could be edited under this policy.
    pub fn any(&self) -> bool {
        match self {
            Self::Uniform(allowed) => *allowed,
            Self::PerField(fields) => fields.iter().any(|(_, allowed)| *allowed),
        }
    }
}

fn lookup_field(fields: &[(&str, bool)], name: &str) -> bool {
    fields
        .iter()
        .find(|(field, _)| *field == name)
        .is_some_and(|(_, allowed)| *allowed)
}

/// View/edit policy of one field group for one (resource, role).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct GroupPolicy {
    pub view: bool,
    pub edit: EditPolicy,
}

impl GroupPolicy {
    pub const HIDDEN: GroupPolicy = GroupPolicy {
        view: false,
        edit: EditPolicy::Uniform(false),
    };

    pub const READ_ONLY: GroupPolicy = GroupPolicy {
        view: true,
        edit: EditPolicy::Uniform(false),
    };

    pub const FULL: GroupPolicy = GroupPolicy {
        view: true,
        edit: EditPolicy::Uniform(true),
    };

    /// Visible, with edit access decided field by field.
    pub const fn per_field(fields: &'static [(&'static str, bool)]) -> Self {
        GroupPolicy {
            view: true,
            edit: EditPolicy::PerField(fields),
        }
    }
}

/// Whole-resource operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Add,
    View,
    Edit,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Self::Add, Self::View, Self::Edit, Self::Delete];
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::View => "view",
            Self::Edit => "edit",
            Self::Delete => "delete",
        })
    }
}

/// Resource-level action flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ActionFlags {
    pub add: bool,
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl ActionFlags {
    pub const NONE: ActionFlags = ActionFlags {
        add: false,
        view: false,
        edit: false,
        delete: false,
    };

    pub const ALL: ActionFlags = ActionFlags {
        add: true,
        view: true,
        edit: true,
        delete: true,
    };

    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Add => self.add,
            Action::View => self.view,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
        }
    }
}

/// Everything one role may do with one resource kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ResourcePolicy {
    pub actions: ActionFlags,
    pub groups: &'static [(FieldGroup, GroupPolicy)],
}

impl ResourcePolicy {
    /// The record every lookup miss resolves to.
    pub const DENY_ALL: ResourcePolicy = ResourcePolicy {
        actions: ActionFlags::NONE,
        groups: &[],
    };

    pub fn group(&self, group: FieldGroup) -> Option<&'static GroupPolicy> {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, policy)| policy)
    }

    pub fn can_view(&self, group: FieldGroup) -> bool {
        self.group(group).is_some_and(|policy| policy.view)
    }

    pub fn can_edit(&self, group: FieldGroup, field: Option<&str>) -> bool {
        self.group(group).is_some_and(|policy| policy.edit.allows(field))
    }

    /// True if any group grants edit access to at least one field.
    pub fn edits_anything(&self) -> bool {
        self.groups.iter().any(|(_, policy)| policy.edit.any())
    }
}
