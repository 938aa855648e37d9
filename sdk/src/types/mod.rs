//! Request parameter types for the EDUZEN SDK.
//!
//! Each operation with optional inputs takes one of these structs. Optional
//! fields are `Option`s and are left out of the request only when `None`;
//! `false`, `0` and `""` are always sent.

pub mod attendance;
pub mod documents;
pub mod payments;
pub mod sessions;
pub mod students;
pub mod users;

pub use attendance::{GenerateQrCodeParams, ScanQrCodeParams};
pub use documents::{DocumentFormat, GenerateDocumentParams};
pub use payments::{
    MobileMoneyParams, MobileMoneyProvider, SepaDirectDebitParams, StripeIntentParams,
};
pub use sessions::TimeoutRulesParams;
pub use students::StudentsQuery;
pub use users::CreateUserParams;
