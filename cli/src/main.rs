//! EDUZEN command-line client.
//!
//! Thin front end over `eduzen-sdk` for poking at a deployment: each
//! subcommand maps to one SDK call and prints the JSON response on stdout.
//! Connection settings come from flags or the `EDUZEN_*` environment.
//!
//! # Usage
//!
//! ```bash
//! EDUZEN_API_KEY=... eduzen active-sessions
//! eduzen --base-url http://localhost:3000/api students --organization-id org-1 --limit 50
//! eduzen request POST /compliance/alerts/check
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eduzen_sdk::client::config::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_ACCESS_TOKEN, ENV_API_KEY, ENV_BASE_URL,
    ENV_TIMEOUT_SECS,
};
use eduzen_sdk::{ClientConfig, ClientError, EduzenClient, Method, StudentsQuery};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// EDUZEN API command-line client.
#[derive(Parser, Debug)]
#[command(name = "eduzen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = ENV_BASE_URL, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API key, sent as X-API-Key
    #[arg(long, env = ENV_API_KEY, hide_env_values = true)]
    api_key: Option<String>,

    /// Access token, sent as the sb-access-token cookie
    #[arg(long, env = ENV_ACCESS_TOKEN, hide_env_values = true)]
    access_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = ENV_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a 2FA secret
    Generate2faSecret,

    /// Confirm 2FA activation
    Verify2fa {
        /// Code from the authenticator app
        #[arg(long)]
        code: String,
    },

    /// List students of an organization
    Students {
        /// Organization ID
        #[arg(long)]
        organization_id: String,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 10)]
        limit: u32,

        /// Search term
        #[arg(long)]
        search: Option<String>,
    },

    /// List active sessions
    ActiveSessions,

    /// Revoke a session
    RevokeSession {
        /// Session ID
        #[arg(long)]
        session_id: String,
    },

    /// Run the compliance checks
    ComplianceCheck,

    /// Show the active QR code of a session
    ActiveQr {
        /// Session ID
        #[arg(long)]
        session_id: String,
    },

    /// Deactivate a QR code
    DeactivateQr {
        /// QR code ID
        #[arg(long)]
        qr_code_id: String,
    },

    /// Send an arbitrary request
    Request {
        /// HTTP method
        method: String,

        /// Path below the base URL, starting with '/'
        path: String,

        /// JSON request body
        #[arg(long)]
        body: Option<String>,

        /// JSON object of query parameters
        #[arg(long)]
        query: Option<String>,
    },
}

impl Cli {
    /// Resolves the connection flags the same way the SDK reads the
    /// environment, so an empty credential flag means no credential.
    fn client_config(&self) -> Result<ClientConfig, ClientError> {
        ClientConfig::from_lookup(|key| match key {
            ENV_BASE_URL => Some(self.base_url.clone()),
            ENV_API_KEY => self.api_key.clone(),
            ENV_ACCESS_TOKEN => self.access_token.clone(),
            ENV_TIMEOUT_SECS => Some(self.timeout_secs.to_string()),
            _ => None,
        })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,eduzen_sdk=info,eduzen_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(body) => match serde_json::to_string_pretty(&body) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Value> {
    let client = cli
        .client_config()
        .and_then(EduzenClient::new)
        .context("invalid client configuration")?;
    tracing::info!(base_url = %client.config().base_url, "EDUZEN client ready");

    let body = match cli.command {
        Command::Generate2faSecret => client.generate_2fa_secret().await?,
        Command::Verify2fa { code } => client.verify_2fa_activation(&code).await?,
        Command::Students {
            organization_id,
            page,
            limit,
            search,
        } => {
            let mut query = StudentsQuery::new(organization_id)
                .with_page(page)
                .with_limit(limit);
            if let Some(search) = search {
                query = query.with_search(search);
            }
            client.get_students(&query).await?
        }
        Command::ActiveSessions => client.get_active_sessions().await?,
        Command::RevokeSession { session_id } => client.revoke_session(&session_id).await?,
        Command::ComplianceCheck => client.check_compliance_alerts().await?,
        Command::ActiveQr { session_id } => client.get_active_qr_code(&session_id).await?,
        Command::DeactivateQr { qr_code_id } => client.deactivate_qr_code(&qr_code_id).await?,
        Command::Request {
            method,
            path,
            body,
            query,
        } => {
            let method = parse_method(&method)?;
            let body = parse_json("--body", body.as_deref())?;
            let query = parse_json("--query", query.as_deref())?;
            client
                .request(method, &path, body.as_ref(), query.as_ref())
                .await?
        }
    };

    Ok(body)
}

fn parse_method(raw: &str) -> Result<Method> {
    Method::from_bytes(raw.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP method {:?}", raw))
}

fn parse_json(flag: &str, raw: Option<&str>) -> Result<Option<Value>> {
    raw.map(|text| {
        serde_json::from_str(text).with_context(|| format!("{} is not valid JSON", flag))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_parse_students_command() {
        let cli = Cli::try_parse_from([
            "eduzen",
            "--base-url",
            "http://localhost:3000/api/",
            "students",
            "--organization-id",
            "org-1",
            "--limit",
            "50",
        ])
        .expect("parse");

        assert_eq!(cli.base_url, "http://localhost:3000/api/");
        match cli.command {
            Command::Students {
                organization_id,
                page,
                limit,
                search,
            } => {
                assert_eq!(organization_id, "org-1");
                assert_eq!(page, 1);
                assert_eq!(limit, 50);
                assert!(search.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_client_config_from_flags() {
        let cli = Cli::try_parse_from([
            "eduzen",
            "--base-url",
            "https://x/api",
            "--api-key",
            "k",
            "--access-token",
            "",
            "--timeout-secs",
            "5",
            "active-sessions",
        ])
        .expect("parse");

        let config = cli.client_config().expect("config");
        assert_eq!(config.base_url, "https://x/api");
        assert_eq!(config.api_key, Some("k".to_string()));
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_client_config_defaults_match_sdk() {
        let cli = Cli::try_parse_from(["eduzen", "--api-key", "", "active-sessions"])
            .expect("parse");
        let config = cli.client_config().expect("config");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_parse_request_command() {
        let cli = Cli::try_parse_from([
            "eduzen",
            "request",
            "post",
            "/sessions/revoke",
            "--body",
            r#"{"session_id":"s-1"}"#,
        ])
        .expect("parse");

        match cli.command {
            Command::Request { method, path, body, .. } => {
                assert_eq!(parse_method(&method).expect("method"), Method::POST);
                assert_eq!(path, "/sessions/revoke");
                let body = parse_json("--body", body.as_deref()).expect("json");
                assert_eq!(body, Some(serde_json::json!({"session_id": "s-1"})));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        assert!(parse_json("--body", Some("{not json")).is_err());
        assert_eq!(parse_json("--body", None).expect("none"), None);
    }
}
