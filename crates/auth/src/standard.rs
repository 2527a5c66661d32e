//! The agency's compiled-in permission matrix.
//!
//! `ResumeWriter` has no `Client` entry and therefore gets the deny-all
//! record there.

use staffdesk_core::ResourceKind::{Client, Employee, Interview};

use crate::matrix::MatrixEntry;
use crate::permissions::{ActionFlags, FieldGroup::*, GroupPolicy, ResourcePolicy};
use crate::roles::RoleTag;

const fn entry(
    resource: staffdesk_core::ResourceKind,
    role: RoleTag,
    actions: ActionFlags,
    groups: &'static [(crate::FieldGroup, GroupPolicy)],
) -> MatrixEntry {
    MatrixEntry {
        resource,
        role,
        policy: ResourcePolicy { actions, groups },
    }
}

const VIEW_EDIT: ActionFlags = ActionFlags {
    add: false,
    view: true,
    edit: true,
    delete: false,
};

const VIEW_ONLY: ActionFlags = ActionFlags {
    add: false,
    view: true,
    edit: false,
    delete: false,
};

const ADD_VIEW_EDIT: ActionFlags = ActionFlags {
    add: true,
    view: true,
    edit: true,
    delete: false,
};

// ── clients ──────────────────────────────────────────────────────────────────

const CLIENT_SALES_MARKETING: GroupPolicy = GroupPolicy::per_field(&[
    ("clientStatus", true),
    ("marketingStartDate", true),
    ("marketingEndDate", true),
    ("assignedRecruiter", true),
    ("marketingEmail", false),
    ("technology", true),
]);

const CLIENT_SENIOR_MARKETING: GroupPolicy = GroupPolicy::per_field(&[
    ("clientStatus", false),
    ("marketingStartDate", true),
    ("marketingEndDate", true),
    ("assignedRecruiter", true),
    ("marketingEmail", true),
    ("technology", true),
]);

const CLIENT_SENIOR_PLACEMENT: GroupPolicy = GroupPolicy::per_field(&[
    ("placedCompany", true),
    ("placementDate", true),
    ("salary", false),
    ("postPlacementFee", false),
]);

const CLIENT_RECRUITER_MARKETING: GroupPolicy = GroupPolicy::per_field(&[
    ("clientStatus", false),
    ("marketingStartDate", false),
    ("marketingEndDate", false),
    ("assignedRecruiter", false),
    ("marketingEmail", true),
    ("technology", true),
]);

// ── interviews ───────────────────────────────────────────────────────────────

const INTERVIEW_RECRUITER_BASIC: GroupPolicy = GroupPolicy::per_field(&[
    ("clientId", false),
    ("company", false),
    ("position", false),
    ("interviewDate", true),
    ("interviewRound", true),
    ("interviewMode", true),
]);

const INTERVIEW_RECRUITER_FEEDBACK: GroupPolicy = GroupPolicy::per_field(&[
    ("interviewStatus", true),
    ("feedback", true),
    ("recruiterNotes", true),
]);

pub(crate) const STANDARD_ENTRIES: &[MatrixEntry] = &[
    // clients
    entry(
        Client,
        RoleTag::Admin,
        ActionFlags::ALL,
        &[
            (BasicInfo, GroupPolicy::FULL),
            (MarketingInfo, GroupPolicy::FULL),
            (SubscriptionInfo, GroupPolicy::FULL),
            (PostPlacementInfo, GroupPolicy::FULL),
        ],
    ),
    entry(
        Client,
        RoleTag::SalesExecutive,
        ADD_VIEW_EDIT,
        &[
            (BasicInfo, GroupPolicy::FULL),
            (MarketingInfo, CLIENT_SALES_MARKETING),
            (SubscriptionInfo, GroupPolicy::FULL),
            (PostPlacementInfo, GroupPolicy::FULL),
        ],
    ),
    entry(
        Client,
        RoleTag::SeniorRecruiter,
        VIEW_EDIT,
        &[
            (BasicInfo, GroupPolicy::READ_ONLY),
            (MarketingInfo, CLIENT_SENIOR_MARKETING),
            (SubscriptionInfo, GroupPolicy::HIDDEN),
            (PostPlacementInfo, CLIENT_SENIOR_PLACEMENT),
        ],
    ),
    entry(
        Client,
        RoleTag::Recruiter,
        VIEW_EDIT,
        &[
            (BasicInfo, GroupPolicy::READ_ONLY),
            (MarketingInfo, CLIENT_RECRUITER_MARKETING),
            (SubscriptionInfo, GroupPolicy::HIDDEN),
            (PostPlacementInfo, GroupPolicy::HIDDEN),
        ],
    ),
    entry(
        Client,
        RoleTag::Default,
        ActionFlags::NONE,
        &[
            (BasicInfo, GroupPolicy::HIDDEN),
            (MarketingInfo, GroupPolicy::HIDDEN),
            (SubscriptionInfo, GroupPolicy::HIDDEN),
            (PostPlacementInfo, GroupPolicy::HIDDEN),
        ],
    ),
    // employees
    entry(
        Employee,
        RoleTag::Admin,
        ActionFlags::ALL,
        &[
            (BasicInfo, GroupPolicy::FULL),
            (EmploymentInfo, GroupPolicy::FULL),
            (PayrollInfo, GroupPolicy::FULL),
        ],
    ),
    entry(
        Employee,
        RoleTag::SalesExecutive,
        VIEW_ONLY,
        &[
            (BasicInfo, GroupPolicy::READ_ONLY),
            (EmploymentInfo, GroupPolicy::READ_ONLY),
            (PayrollInfo, GroupPolicy::HIDDEN),
        ],
    ),
    entry(
        Employee,
        RoleTag::SeniorRecruiter,
        VIEW_ONLY,
        &[
            (BasicInfo, GroupPolicy::READ_ONLY),
            (EmploymentInfo, GroupPolicy::READ_ONLY),
            (PayrollInfo, GroupPolicy::HIDDEN),
        ],
    ),
    entry(
        Employee,
        RoleTag::Recruiter,
        VIEW_ONLY,
        &[
            (BasicInfo, GroupPolicy::READ_ONLY),
            (EmploymentInfo, GroupPolicy::READ_ONLY),
            (PayrollInfo, GroupPolicy::HIDDEN),
        ],
    ),
    entry(
        Employee,
        RoleTag::ResumeWriter,
        VIEW_ONLY,
        &[
            (BasicInfo, GroupPolicy::READ_ONLY),
            (EmploymentInfo, GroupPolicy::HIDDEN),
            (PayrollInfo, GroupPolicy::HIDDEN),
        ],
    ),
    entry(
        Employee,
        RoleTag::Default,
        ActionFlags::NONE,
        &[
            (BasicInfo, GroupPolicy::HIDDEN),
            (EmploymentInfo, GroupPolicy::HIDDEN),
            (PayrollInfo, GroupPolicy::HIDDEN),
        ],
    ),
    // interviews
    entry(
        Interview,
        RoleTag::Admin,
        ActionFlags::ALL,
        &[
            (BasicInfo, GroupPolicy::FULL),
            (FeedbackInfo, GroupPolicy::FULL),
        ],
    ),
    entry(
        Interview,
        RoleTag::SalesExecutive,
        ADD_VIEW_EDIT,
        &[
            (BasicInfo, GroupPolicy::FULL),
            (FeedbackInfo, GroupPolicy::FULL),
        ],
    ),
    entry(
        Interview,
        RoleTag::SeniorRecruiter,
        ADD_VIEW_EDIT,
        &[
            (BasicInfo, GroupPolicy::FULL),
            (FeedbackInfo, GroupPolicy::FULL),
        ],
    ),
    entry(
        Interview,
        RoleTag::Recruiter,
        ADD_VIEW_EDIT,
        &[
            (BasicInfo, INTERVIEW_RECRUITER_BASIC),
            (FeedbackInfo, INTERVIEW_RECRUITER_FEEDBACK),
        ],
    ),
    entry(
        Interview,
        RoleTag::ResumeWriter,
        VIEW_ONLY,
        &[
            (BasicInfo, GroupPolicy::READ_ONLY),
            (FeedbackInfo, GroupPolicy::HIDDEN),
        ],
    ),
    entry(
        Interview,
        RoleTag::Default,
        ActionFlags::NONE,
        &[
            (BasicInfo, GroupPolicy::HIDDEN),
            (FeedbackInfo, GroupPolicy::HIDDEN),
        ],
    ),
];
