//! Session management parameters.

use serde::{Deserialize, Serialize};

/// Session timeout rules for an organization.
///
/// Unset durations are left unchanged on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutRulesParams {
    /// Organization the rules apply to.
    pub organization_id: String,

    /// Inactivity period before a session expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout_minutes: Option<u32>,

    /// Maximum session lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_timeout_minutes: Option<u32>,

    /// Lead time of the expiry warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_before_timeout_minutes: Option<u32>,
}

impl TimeoutRulesParams {
    /// Creates parameters that change nothing yet.
    #[must_use]
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            idle_timeout_minutes: None,
            absolute_timeout_minutes: None,
            warning_before_timeout_minutes: None,
        }
    }

    /// Sets the idle timeout.
    #[must_use]
    pub fn with_idle_timeout(mut self, minutes: u32) -> Self {
        self.idle_timeout_minutes = Some(minutes);
        self
    }

    /// Sets the absolute timeout.
    #[must_use]
    pub fn with_absolute_timeout(mut self, minutes: u32) -> Self {
        self.absolute_timeout_minutes = Some(minutes);
        self
    }

    /// Sets the warning lead time.
    #[must_use]
    pub fn with_warning_before_timeout(mut self, minutes: u32) -> Self {
        self.warning_before_timeout_minutes = Some(minutes);
        self
    }
}
