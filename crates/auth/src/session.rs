//! Authenticated session lifecycle.
//!
//! A [`Session`] is created at login from an identity token that the
//! identity provider already decoded and verified, and discarded at logout.
//! Signature verification and token refresh are outside this crate.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use staffdesk_core::PrincipalId;

use crate::ClaimSet;
use crate::access::AccessContext;
use crate::matrix::PermissionMatrix;

/// Environment variable overriding [`SessionConfig::clock_skew`], in seconds.
pub const CLOCK_SKEW_ENV: &str = "STAFFDESK_CLOCK_SKEW_SECS";

const DEFAULT_CLOCK_SKEW_SECS: i64 = 300;
const MAX_CLOCK_SKEW_SECS: i64 = 86_400;

/// Decoded identity-token payload (transport-agnostic).
///
/// This is the minimal set of claims staffdesk expects once a token has been
/// decoded/verified by the identity provider SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Object id of the principal.
    pub oid: PrincipalId,

    #[serde(default)]
    pub name: Option<String>,

    /// App roles and custom claims, e.g. `"recruiter"`, `"EmployeeID_42"`.
    #[serde(default)]
    pub roles: Vec<String>,

    /// Issued-at timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub iat: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Session validation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Tolerated clock difference between this process and the token issuer.
    pub clock_skew: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clock_skew: Duration::seconds(DEFAULT_CLOCK_SKEW_SECS),
        }
    }
}

impl SessionConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(CLOCK_SKEW_ENV) {
            let secs: i64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: CLOCK_SKEW_ENV,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            if !(0..=MAX_CLOCK_SKEW_SECS).contains(&secs) {
                return Err(ConfigError::InvalidValue {
                    key: CLOCK_SKEW_ENV,
                    value: raw,
                    reason: format!("must be between 0 and {MAX_CLOCK_SKEW_SECS}"),
                });
            }
            config.clock_skew = Duration::seconds(secs);
        }
        Ok(config)
    }
}

/// Deterministically validate the token's time window, allowing for skew.
pub fn validate_claims(
    claims: &TokenClaims,
    now: DateTime<Utc>,
    config: &SessionConfig,
) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    // A skewed bound outside the representable range imposes no limit.
    if now
        .checked_add_signed(config.clock_skew)
        .is_some_and(|latest| latest < claims.iat)
    {
        return Err(TokenValidationError::NotYetValid);
    }
    if is_past(claims.exp, now, config.clock_skew) {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

/// Whether `exp` has passed at `now` once `skew` is allowed for.
fn is_past(exp: DateTime<Utc>, now: DateTime<Utc>, skew: Duration) -> bool {
    now.checked_sub_signed(skew).is_some_and(|earliest| earliest >= exp)
}

/// Identifier of one login.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One authenticated session: who, with which claims, until when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    principal_id: PrincipalId,
    display_name: Option<String>,
    claims: ClaimSet,
    started_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    clock_skew: Duration,
}

impl Session {
    /// Start a session from a decoded token.
    pub fn begin(
        token: &TokenClaims,
        now: DateTime<Utc>,
        config: &SessionConfig,
    ) -> Result<Self, TokenValidationError> {
        if let Err(err) = validate_claims(token, now, config) {
            tracing::warn!(principal = %token.oid, error = %err, "rejected identity token");
            return Err(err);
        }

        let session = Self {
            id: SessionId::new(),
            principal_id: token.oid,
            display_name: token.name.clone(),
            claims: token.roles.iter().cloned().collect(),
            started_at: now,
            expires_at: token.exp,
            clock_skew: config.clock_skew,
        };
        tracing::info!(
            session = %session.id,
            principal = %session.principal_id,
            claims = session.claims.len(),
            "session started"
        );
        Ok(session)
    }

    /// End the session. Its claims are dropped with it.
    pub fn end(self) {
        tracing::info!(session = %self.id, principal = %self.principal_id, "session ended");
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn principal_id(&self) -> PrincipalId {
        self.principal_id
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        is_past(self.expires_at, now, self.clock_skew)
    }

    /// Evaluate access for this session's current claims.
    pub fn access<'m>(&self, matrix: &'m PermissionMatrix) -> AccessContext<'m> {
        AccessContext::new(&self.claims, matrix)
    }
}

/// Holder of the current session, owned by the caller (one per client).
///
/// The session is replaced wholesale on login and logout, never edited.
#[derive(Debug, Default)]
pub struct SessionSlot {
    current: Option<Session>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `session`, ending any previous one.
    pub fn login(&mut self, session: Session) {
        if let Some(previous) = self.current.replace(session) {
            previous.end();
        }
    }

    /// End the current session. Returns whether there was one.
    pub fn logout(&mut self) -> bool {
        match self.current.take() {
            Some(session) => {
                session.end();
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// The current session, unless it has expired.
    pub fn active(&self, now: DateTime<Utc>) -> Option<&Session> {
        self.current.as_ref().filter(|s| !s.is_expired(now))
    }

    /// Access for whoever is signed in now; nobody (or an expired session)
    /// gets the anonymous context.
    pub fn access<'m>(&self, now: DateTime<Utc>, matrix: &'m PermissionMatrix) -> AccessContext<'m> {
        match self.active(now) {
            Some(session) => session.access(matrix),
            None => AccessContext::anonymous(matrix),
        }
    }
}
