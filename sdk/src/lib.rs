//! EDUZEN SDK - Rust client library for the EDUZEN platform API.
//!
//! This crate wraps the EDUZEN REST API: two-factor authentication, users,
//! students, payments, documents, QR attendance, sessions and compliance.
//!
//! # Client
//!
//! - [`EduzenClient`] — async HTTP client, one method per endpoint
//! - [`ClientConfig`] — base URL, credentials and timeout
//! - [`ClientError`] — [`ApiError`] for HTTP error statuses, network errors
//!   for everything else
//!
//! # Parameters
//!
//! Operations with optional inputs take a parameter struct from [`types`].
//! Unset optional fields are left out of the request; explicit `false`, `0`
//! and `""` values are sent.
//!
//! # Example
//!
//! ```rust
//! use eduzen_sdk::{ClientConfig, EduzenClient};
//!
//! let config = ClientConfig::new("https://app.eduzen.com/api/").with_api_key("key");
//! let client = EduzenClient::new(config).expect("valid config");
//! assert_eq!(client.url("/sessions/active"), "https://app.eduzen.com/api/sessions/active");
//! ```

pub mod client;
pub mod types;

pub use client::{ApiError, ClientConfig, ClientError, EduzenClient};
pub use reqwest::Method;
pub use types::{
    CreateUserParams, DocumentFormat, GenerateDocumentParams, GenerateQrCodeParams,
    MobileMoneyParams, MobileMoneyProvider, ScanQrCodeParams, SepaDirectDebitParams,
    StripeIntentParams, StudentsQuery, TimeoutRulesParams,
};
