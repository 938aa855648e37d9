//! User management parameters.

use serde::{Deserialize, Serialize};

/// Parameters for creating a user.
///
/// `is_active` defaults to `true` and `send_invitation` to `false`; both
/// are always transmitted. The remaining optional fields are omitted from
/// the payload unless set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserParams {
    /// Email address of the new user.
    pub email: String,

    /// Display name.
    pub full_name: String,

    /// Organization the user belongs to.
    pub organization_id: String,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Initial password. The server generates one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Role name, e.g. `teacher` or `admin`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Whether the account starts active.
    pub is_active: bool,

    /// Whether to email an invitation.
    pub send_invitation: bool,
}

impl CreateUserParams {
    /// Creates parameters with the required fields and default flags.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            organization_id: organization_id.into(),
            phone: None,
            password: None,
            role: None,
            is_active: true,
            send_invitation: false,
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the initial password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets whether the account starts active.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets whether an invitation email is sent.
    #[must_use]
    pub fn with_invitation(mut self, send_invitation: bool) -> Self {
        self.send_invitation = send_invitation;
        self
    }
}
