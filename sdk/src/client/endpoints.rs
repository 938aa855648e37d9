//! EDUZEN API operations.
//!
//! Each operation is a thin wrapper with a fixed method and path. Responses
//! are returned as decoded JSON, exactly as the server sent them.

use serde_json::{json, Value};

use super::error::ClientError;
use super::http::{to_json, EduzenClient};
use crate::types::{
    CreateUserParams, GenerateDocumentParams, GenerateQrCodeParams, MobileMoneyParams,
    ScanQrCodeParams, SepaDirectDebitParams, StripeIntentParams, StudentsQuery,
    TimeoutRulesParams,
};

impl EduzenClient {
    // ========== 2FA ==========

    /// Generates a 2FA secret and its provisioning QR code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn generate_2fa_secret(&self) -> Result<Value, ClientError> {
        self.post("/2fa/generate-secret", None).await
    }

    /// Confirms 2FA activation with a code from the authenticator app.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn verify_2fa_activation(&self, code: &str) -> Result<Value, ClientError> {
        self.post("/2fa/verify-activation", Some(&json!({ "code": code })))
            .await
    }

    // ========== USERS ==========

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_user(&self, params: &CreateUserParams) -> Result<Value, ClientError> {
        self.post("/users/create", Some(&to_json(params)?)).await
    }

    // ========== STUDENTS ==========

    /// Lists the students of an organization, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_students(&self, query: &StudentsQuery) -> Result<Value, ClientError> {
        self.get("/v1/students", Some(&to_json(query)?)).await
    }

    // ========== PAYMENTS ==========

    /// Creates a Stripe payment intent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_stripe_intent(
        &self,
        params: &StripeIntentParams,
    ) -> Result<Value, ClientError> {
        self.post("/payments/stripe/create-intent", Some(&to_json(params)?))
            .await
    }

    /// Creates a SEPA direct debit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_sepa_direct_debit(
        &self,
        params: &SepaDirectDebitParams,
    ) -> Result<Value, ClientError> {
        self.post("/payments/sepa/create-direct-debit", Some(&to_json(params)?))
            .await
    }

    /// Initiates a mobile money payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn initiate_mobile_money(
        &self,
        params: &MobileMoneyParams,
    ) -> Result<Value, ClientError> {
        self.post("/mobile-money/initiate", Some(&to_json(params)?))
            .await
    }

    // ========== DOCUMENTS ==========

    /// Renders a document from a template.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn generate_document(
        &self,
        params: &GenerateDocumentParams,
    ) -> Result<Value, ClientError> {
        self.post("/documents/generate", Some(&to_json(params)?)).await
    }

    // ========== QR ATTENDANCE ==========

    /// Generates an attendance QR code for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn generate_qr_code(
        &self,
        params: &GenerateQrCodeParams,
    ) -> Result<Value, ClientError> {
        self.post("/qr-attendance/generate", Some(&to_json(params)?))
            .await
    }

    /// Records attendance for a scanned QR code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn scan_qr_code(&self, params: &ScanQrCodeParams) -> Result<Value, ClientError> {
        self.post("/qr-attendance/scan", Some(&to_json(params)?)).await
    }

    /// Gets the QR code currently active for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_active_qr_code(&self, session_id: &str) -> Result<Value, ClientError> {
        let path = format!("/qr-attendance/active/{}", urlencoding::encode(session_id));
        self.get(&path, None).await
    }

    /// Deactivates a QR code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn deactivate_qr_code(&self, qr_code_id: &str) -> Result<Value, ClientError> {
        let path = format!(
            "/qr-attendance/deactivate/{}",
            urlencoding::encode(qr_code_id)
        );
        self.post(&path, None).await
    }

    // ========== COMPLIANCE ==========

    /// Runs the compliance checks and returns the raised alerts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn check_compliance_alerts(&self) -> Result<Value, ClientError> {
        self.post("/compliance/alerts/check", None).await
    }

    // ========== SESSIONS ==========

    /// Lists the active sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_active_sessions(&self) -> Result<Value, ClientError> {
        self.get("/sessions/active", None).await
    }

    /// Configures session timeout rules for an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn configure_timeout_rules(
        &self,
        params: &TimeoutRulesParams,
    ) -> Result<Value, ClientError> {
        self.post("/sessions/timeout-rules", Some(&to_json(params)?))
            .await
    }

    /// Revokes a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn revoke_session(&self, session_id: &str) -> Result<Value, ClientError> {
        self.post("/sessions/revoke", Some(&json!({ "session_id": session_id })))
            .await
    }
}
