//! HTTP client for the EDUZEN REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use eduzen_sdk::client::{ClientConfig, EduzenClient};
//! use eduzen_sdk::types::CreateUserParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default().with_api_key("my-api-key");
//!     let client = EduzenClient::new(config)?;
//!
//!     let sessions = client.get_active_sessions().await?;
//!     println!("{sessions}");
//!
//!     let params = CreateUserParams::new("teacher@example.com", "Jane Smith", "org-123")
//!         .with_role("teacher");
//!     let created = client.create_user(&params).await?;
//!     println!("{created}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
mod endpoints;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ApiError, ClientError};
pub use http::EduzenClient;
