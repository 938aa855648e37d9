//! Payment parameters: Stripe, SEPA direct debit and mobile money.
//!
//! The SDK only forwards these to the API; no amount or IBAN validation
//! happens client-side.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default currency for card and SEPA payments.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Default currency for mobile money payments (West African CFA franc).
pub const DEFAULT_MOBILE_MONEY_CURRENCY: &str = "XOF";

/// Parameters for creating a Stripe payment intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeIntentParams {
    /// Amount in the currency's minor unit.
    pub amount: i64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Email of the paying customer.
    pub customer_email: String,

    /// Payment description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name of the paying customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Arbitrary metadata attached to the intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,

    /// Redirect target after a successful payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// Redirect target after a cancelled payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

impl StripeIntentParams {
    /// Creates parameters with the required fields, in EUR.
    #[must_use]
    pub fn new(amount: i64, customer_email: impl Into<String>) -> Self {
        Self {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            customer_email: customer_email.into(),
            description: None,
            customer_name: None,
            metadata: None,
            return_url: None,
            cancel_url: None,
        }
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the customer name.
    #[must_use]
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Sets the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the redirect target after a successful payment.
    #[must_use]
    pub fn with_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    /// Sets the redirect target after a cancelled payment.
    #[must_use]
    pub fn with_cancel_url(mut self, cancel_url: impl Into<String>) -> Self {
        self.cancel_url = Some(cancel_url.into());
        self
    }
}

/// Parameters for creating a SEPA direct debit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SepaDirectDebitParams {
    /// Amount in major units.
    pub amount: f64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Payment description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Account holder being debited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_name: Option<String>,

    /// IBAN being debited.
    pub debtor_iban: String,

    /// BIC of the debtor's bank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_bic: Option<String>,

    /// Remittance reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Collection date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Signed mandate identifier.
    pub mandate_id: String,

    /// Creditor name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_name: Option<String>,

    /// Creditor IBAN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_iban: Option<String>,

    /// SEPA creditor identifier.
    pub creditor_id: String,
}

impl SepaDirectDebitParams {
    /// Creates parameters with the required fields, in EUR.
    #[must_use]
    pub fn new(
        amount: f64,
        debtor_iban: impl Into<String>,
        mandate_id: impl Into<String>,
        creditor_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            description: None,
            debtor_name: None,
            debtor_iban: debtor_iban.into(),
            debtor_bic: None,
            reference: None,
            due_date: None,
            mandate_id: mandate_id.into(),
            creditor_name: None,
            creditor_iban: None,
            creditor_id: creditor_id.into(),
        }
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the debtor name.
    #[must_use]
    pub fn with_debtor_name(mut self, name: impl Into<String>) -> Self {
        self.debtor_name = Some(name.into());
        self
    }

    /// Sets the debtor's BIC.
    #[must_use]
    pub fn with_debtor_bic(mut self, bic: impl Into<String>) -> Self {
        self.debtor_bic = Some(bic.into());
        self
    }

    /// Sets the remittance reference.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets the collection date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the creditor name.
    #[must_use]
    pub fn with_creditor_name(mut self, name: impl Into<String>) -> Self {
        self.creditor_name = Some(name.into());
        self
    }

    /// Sets the creditor IBAN.
    #[must_use]
    pub fn with_creditor_iban(mut self, iban: impl Into<String>) -> Self {
        self.creditor_iban = Some(iban.into());
        self
    }
}

/// Mobile money operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileMoneyProvider {
    /// MTN Mobile Money.
    Mtn,
    /// Orange Money.
    Orange,
    /// Airtel Money.
    Airtel,
}

impl fmt::Display for MobileMoneyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mtn => write!(f, "mtn"),
            Self::Orange => write!(f, "orange"),
            Self::Airtel => write!(f, "airtel"),
        }
    }
}

/// Parameters for initiating a mobile money payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileMoneyParams {
    /// Operator handling the payment.
    pub provider: MobileMoneyProvider,

    /// Amount in the currency's smallest unit.
    pub amount: i64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Subscriber phone number.
    pub phone_number: String,

    /// Payment description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Invoice settled by this payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
}

impl MobileMoneyParams {
    /// Creates parameters with the required fields, in XOF.
    #[must_use]
    pub fn new(
        provider: MobileMoneyProvider,
        amount: i64,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            amount,
            currency: DEFAULT_MOBILE_MONEY_CURRENCY.to_string(),
            phone_number: phone_number.into(),
            description: None,
            invoice_id: None,
        }
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the invoice being paid.
    #[must_use]
    pub fn with_invoice(mut self, invoice_id: impl Into<String>) -> Self {
        self.invoice_id = Some(invoice_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_stripe_intent_minimal() {
        let params = StripeIntentParams::new(5000, "payer@example.com");
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(
            value,
            json!({"amount": 5000, "currency": "EUR", "customer_email": "payer@example.com"})
        );
    }

    #[test]
    fn test_stripe_intent_zero_amount_is_sent() {
        let params = StripeIntentParams::new(0, "payer@example.com").with_description("");
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["amount"], json!(0));
        assert_eq!(value["description"], json!(""));
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_sepa_optional_fields() {
        let params = SepaDirectDebitParams::new(49.9, "FR7630006000011234567890189", "M-1", "C-1")
            .with_reference("INV-2024-001");
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["amount"], json!(49.9));
        assert_eq!(value["reference"], json!("INV-2024-001"));
        assert!(value.get("debtor_bic").is_none());
        assert!(value.get("due_date").is_none());
        assert_eq!(value.as_object().map(|o| o.len()), Some(6));
    }

    #[test]
    fn test_single_optional_fields_can_be_set_alone() {
        let stripe = StripeIntentParams::new(100, "payer@example.com")
            .with_return_url("https://app/ok");
        let value = serde_json::to_value(&stripe).expect("serialize");
        assert_eq!(value["return_url"], json!("https://app/ok"));
        assert!(value.get("cancel_url").is_none());

        let sepa = SepaDirectDebitParams::new(10.0, "DE89370400440532013000", "M-1", "C-1")
            .with_debtor_bic("COBADEFFXXX")
            .with_creditor_iban("FR1420041010050500013M02606");
        let value = serde_json::to_value(&sepa).expect("serialize");
        assert_eq!(value["debtor_bic"], json!("COBADEFFXXX"));
        assert_eq!(value["creditor_iban"], json!("FR1420041010050500013M02606"));
        assert!(value.get("debtor_name").is_none());
        assert!(value.get("creditor_name").is_none());
    }

    #[test]
    fn test_mobile_money_provider_serialization() {
        let params = MobileMoneyParams::new(MobileMoneyProvider::Orange, 10_000, "+22501020304");
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["provider"], json!("orange"));
        assert_eq!(value["currency"], json!("XOF"));
        assert!(value.get("invoice_id").is_none());
        assert_eq!(MobileMoneyProvider::Mtn.to_string(), "mtn");
    }
}
