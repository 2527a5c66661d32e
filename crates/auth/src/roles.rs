//! Role derivation from claims.
//!
//! Every call site that needs a role goes through [`resolve_role`]; the result
//! is threaded through as a value (see [`crate::AccessContext`]) rather than
//! re-testing claim strings inline.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use staffdesk_core::{DomainError, EmployeeId};

use crate::ClaimSet;

/// Canonical role category used to key every permission lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleTag {
    Admin,
    #[serde(rename = "Sales_Executive")]
    SalesExecutive,
    #[serde(rename = "Senior_Recruiter")]
    SeniorRecruiter,
    Recruiter,
    ResumeWriter,
    Default,
}

/// Claim string → role, highest priority first.
const PRIORITY: [(&str, RoleTag); 5] = [
    ("Admin", RoleTag::Admin),
    ("Sales_Executive", RoleTag::SalesExecutive),
    ("Senior_Recruiter", RoleTag::SeniorRecruiter),
    ("recruiter", RoleTag::Recruiter),
    ("Resume_Writer", RoleTag::ResumeWriter),
];

/// Prefix of the claim carrying the principal's own employee record id.
pub const EMPLOYEE_ID_CLAIM_PREFIX: &str = "EmployeeID_";

impl RoleTag {
    /// All roles in priority order (Default last).
    pub const ALL: [RoleTag; 6] = [
        Self::Admin,
        Self::SalesExecutive,
        Self::SeniorRecruiter,
        Self::Recruiter,
        Self::ResumeWriter,
        Self::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::SalesExecutive => "Sales_Executive",
            Self::SeniorRecruiter => "Senior_Recruiter",
            Self::Recruiter => "Recruiter",
            Self::ResumeWriter => "ResumeWriter",
            Self::Default => "Default",
        }
    }

    /// The claim that grants this role, if any.
    pub fn claim(&self) -> Option<&'static str> {
        PRIORITY
            .iter()
            .find(|(_, role)| role == self)
            .map(|(claim, _)| *claim)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Admin => "Full administrator of every resource",
            Self::SalesExecutive => "Manages client onboarding, subscriptions and placements",
            Self::SeniorRecruiter => "Leads marketing of clients and oversees interviews",
            Self::Recruiter => "Markets assigned clients and records interviews",
            Self::ResumeWriter => "Prepares client resumes; read access to staff and interviews",
            Self::Default => "Authenticated without a recognized role; no access",
        }
    }
}

impl core::fmt::Display for RoleTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleTag {
    type Err = DomainError;

    /// Accepts the tag name or the claim string that grants it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s || role.claim() == Some(s))
            .ok_or_else(|| DomainError::unknown("role", s))
    }
}

/// Derive the single effective role for a claim set.
///
/// Total and pure: the first claim in priority order wins, and a set with no
/// recognized claim (including the empty set) yields [`RoleTag::Default`].
pub fn resolve_role(claims: &ClaimSet) -> RoleTag {
    PRIORITY
        .iter()
        .find(|(claim, _)| claims.contains(claim))
        .map(|(_, role)| *role)
        .unwrap_or(RoleTag::Default)
}

/// Find the principal's own employee record id (`EmployeeID_<N>`).
///
/// Returns `None` when no such claim exists or none of them parse.
pub fn extract_owned_employee_id(claims: &ClaimSet) -> Option<EmployeeId> {
    claims
        .iter()
        .filter_map(|claim| claim.strip_prefix(EMPLOYEE_ID_CLAIM_PREFIX))
        .find_map(|suffix| suffix.parse::<EmployeeId>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_claims_resolve_to_default() {
        assert_eq!(resolve_role(&ClaimSet::new()), RoleTag::Default);
    }

    #[test]
    fn each_claim_maps_to_its_role() {
        for (claim, role) in PRIORITY {
            assert_eq!(resolve_role(&ClaimSet::from([claim])), role);
        }
    }

    #[test]
    fn higher_priority_claim_wins() {
        let claims = ClaimSet::from(["recruiter", "Admin"]);
        assert_eq!(resolve_role(&claims), RoleTag::Admin);

        let claims = ClaimSet::from(["Resume_Writer", "Senior_Recruiter", "recruiter"]);
        assert_eq!(resolve_role(&claims), RoleTag::SeniorRecruiter);
    }

    #[test]
    fn role_claims_are_case_sensitive() {
        assert_eq!(resolve_role(&ClaimSet::from(["Recruiter"])), RoleTag::Default);
        assert_eq!(resolve_role(&ClaimSet::from(["admin"])), RoleTag::Default);
    }

    #[test]
    fn owned_employee_id_is_extracted() {
        let claims = ClaimSet::from(["EmployeeID_42", "recruiter"]);
        assert_eq!(extract_owned_employee_id(&claims), Some(EmployeeId::new(42)));
        assert_eq!(resolve_role(&claims), RoleTag::Recruiter);
    }

    #[test]
    fn malformed_employee_id_is_absent() {
        for claim in ["EmployeeID_", "EmployeeID_abc", "EmployeeID_-3", "employeeid_5"] {
            assert_eq!(extract_owned_employee_id(&ClaimSet::from([claim])), None, "{claim}");
        }
        assert_eq!(extract_owned_employee_id(&ClaimSet::new()), None);
    }

    #[test]
    fn first_parseable_employee_id_wins() {
        let claims = ClaimSet::from(["EmployeeID_x", "EmployeeID_7", "EmployeeID_9"]);
        assert_eq!(extract_owned_employee_id(&claims), Some(EmployeeId::new(7)));
    }

    #[test]
    fn role_parses_from_tag_or_claim() {
        assert_eq!("recruiter".parse(), Ok(RoleTag::Recruiter));
        assert_eq!("Recruiter".parse(), Ok(RoleTag::Recruiter));
        assert_eq!("Resume_Writer".parse(), Ok(RoleTag::ResumeWriter));
        assert_eq!("Default".parse(), Ok(RoleTag::Default));
        assert!("Owner".parse::<RoleTag>().is_err());
    }

    #[test]
    fn every_role_has_a_distinct_description() {
        let mut seen = Vec::new();
        for role in RoleTag::ALL {
            let description = role.description();
            assert!(!description.is_empty(), "{role}");
            assert!(!seen.contains(&description), "{role}");
            seen.push(description);
        }
    }

    #[test]
    fn role_serializes_with_canonical_names() {
        let json = serde_json::to_string(&RoleTag::SeniorRecruiter).unwrap();
        assert_eq!(json, "\"Senior_Recruiter\"");
    }

    fn arb_claim() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Admin".to_string()),
            Just("Sales_Executive".to_string()),
            Just("Senior_Recruiter".to_string()),
            Just("recruiter".to_string()),
            Just("Resume_Writer".to_string()),
            (0u64..10_000).prop_map(|n| format!("EmployeeID_{n}")),
            "[A-Za-z_]{0,12}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any claim set containing "Admin" resolves to Admin.
        #[test]
        fn admin_claim_always_wins(claims in prop::collection::vec(arb_claim(), 0..8), pos in 0usize..8) {
            let mut claims = claims;
            let pos = pos.min(claims.len());
            claims.insert(pos, "Admin".to_string());
            prop_assert_eq!(resolve_role(&claims.into_iter().collect()), RoleTag::Admin);
        }

        /// Property: resolution is deterministic and independent of claim order.
        #[test]
        fn resolution_is_idempotent_and_order_free(claims in prop::collection::vec(arb_claim(), 0..8)) {
            let set: ClaimSet = claims.iter().cloned().collect();
            let reversed: ClaimSet = claims.iter().rev().cloned().collect();
            let first = resolve_role(&set);
            prop_assert_eq!(first, resolve_role(&set));
            prop_assert_eq!(first, resolve_role(&reversed));
        }

        /// Property: arbitrary suffixes never panic and parse exactly like u64.
        #[test]
        fn employee_id_extraction_never_panics(suffix in "\\PC{0,24}") {
            let claims = ClaimSet::from([format!("EmployeeID_{suffix}")]);
            let extracted = extract_owned_employee_id(&claims);
            prop_assert_eq!(extracted.map(|id| id.get()), suffix.parse::<u64>().ok());
        }
    }
}
