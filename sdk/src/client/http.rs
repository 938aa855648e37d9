//! HTTP client implementation.
//!
//! Provides [`EduzenClient`] and its request pipeline. Every public
//! operation funnels through [`EduzenClient::request`], which builds the
//! URL, sends the call with the configured credentials, and maps the
//! outcome onto [`ClientError`].

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::{Method, Response, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::config::ClientConfig;
use super::error::{ApiError, ClientError};

/// Header carrying the API key (`X-API-Key`; header names are case-insensitive).
pub const API_KEY_HEADER: &str = "x-api-key";

/// Cookie carrying the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

/// HTTP client for the EDUZEN REST API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct EduzenClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl EduzenClient {
    /// Creates a new client with the given configuration.
    ///
    /// Trailing slashes are stripped from the base URL first.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a credential is not
    /// a valid header value, or the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let config = config.normalized();
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config)?)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a new client with the given base URL and no credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Sends a request and returns the decoded JSON body unchanged.
    ///
    /// `query` must be a JSON object when present; its entries are appended
    /// to the URL, strings verbatim and other values in their JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for 4xx/5xx statuses and
    /// [`ClientError::Network`] for every other failure, including a
    /// success body that is not JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let mut url = Url::parse(&self.url(path)).map_err(ClientError::network)?;
        if let Some(query) = query {
            append_query(&mut url, query)?;
        }

        debug!(
            %method,
            %url,
            api_key = has_credential(self.config.api_key.as_deref()),
            access_token = has_credential(self.config.access_token.as_deref()),
            "sending request"
        );

        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "request failed");
            ClientError::network(e)
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if status.is_client_error() || status.is_server_error() {
            let err = api_error(response).await;
            warn!(
                status = status.as_u16(),
                code = %err.code,
                "API returned an error"
            );
            return Err(ClientError::Api(err));
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read response body");
            ClientError::network(e)
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(error = %e, "response body is not valid JSON");
            ClientError::network(e)
        })
    }

    /// Makes a GET request to the given path.
    pub(crate) async fn get(
        &self,
        path: &str,
        query: Option<&Value>,
    ) -> Result<Value, ClientError> {
        self.request(Method::GET, path, None, query).await
    }

    /// Makes a POST request to the given path.
    pub(crate) async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        self.request(Method::POST, path, body, None).await
    }
}

/// Serializes request parameters into a JSON value.
///
/// `None` fields are already dropped by the parameter types' serde
/// attributes, so the result holds exactly the provided parameters.
pub(crate) fn to_json<T: Serialize>(params: &T) -> Result<Value, ClientError> {
    serde_json::to_value(params).map_err(|e| ClientError::Serialization(e.to_string()))
}

/// Empty credentials count as not configured and are never sent.
fn has_credential(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn default_headers(config: &ClientConfig) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(api_key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
        let mut value = HeaderValue::from_str(api_key).map_err(|_| {
            ClientError::InvalidConfig("api_key is not a valid header value".to_string())
        })?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
    }

    if let Some(token) = config.access_token.as_deref().filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("{}={}", ACCESS_TOKEN_COOKIE, token))
            .map_err(|_| {
                ClientError::InvalidConfig("access_token is not a valid header value".to_string())
            })?;
        value.set_sensitive(true);
        headers.insert(COOKIE, value);
    }

    Ok(headers)
}

fn append_query(url: &mut Url, query: &Value) -> Result<(), ClientError> {
    let entries = query.as_object().ok_or_else(|| {
        ClientError::Serialization("query parameters must be a JSON object".to_string())
    })?;

    let pairs: Vec<(&String, String)> = entries
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key, query_value(value)))
        .collect();

    if !pairs.is_empty() {
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
    }

    Ok(())
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds the API error for a 4xx/5xx response.
///
/// A JSON body is mined for `message`, `code` and `details`. Any other body
/// falls back to the status error's text and an `HTTP_<status>` code.
async fn api_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let transport_message = match response.error_for_status_ref() {
        Err(e) => e.to_string(),
        Ok(_) => format!("HTTP status {}", status),
    };

    match response.bytes().await {
        Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
            Ok(body) => ApiError::from_body(status, &body),
            Err(_) => ApiError::undecodable(status, transport_message),
        },
        Err(_) => ApiError::undecodable(status, transport_message),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_client_new() {
        let config = ClientConfig::new("https://api.example.com");
        let client = EduzenClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_defaults() {
        let client = EduzenClient::with_defaults().expect("client creation");
        assert_eq!(client.config().base_url, "https://app.eduzen.com/api");
    }

    #[test]
    fn test_client_invalid_config() {
        let client = EduzenClient::new(ClientConfig::new(""));
        assert!(matches!(client, Err(ClientError::InvalidConfig(_))));

        let client = EduzenClient::new(ClientConfig::default().with_timeout(Duration::ZERO));
        assert!(matches!(client, Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_client_rejects_unsendable_credentials() {
        let config = ClientConfig::default().with_api_key("bad\nkey");
        assert!(matches!(
            EduzenClient::new(config),
            Err(ClientError::InvalidConfig(_))
        ));

        let config = ClientConfig::default().with_access_token("bad\ntoken");
        assert!(matches!(
            EduzenClient::new(config),
            Err(ClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = EduzenClient::with_base_url("https://x/api/").expect("client creation");
        assert_eq!(client.config().base_url, "https://x/api");
        assert_eq!(client.url("/foo"), "https://x/api/foo");
    }

    #[test]
    fn test_client_config_access() {
        let config = ClientConfig::new("https://api.example.com")
            .with_api_key("test-key")
            .with_access_token("test-token");
        let client = EduzenClient::new(config).expect("client creation");
        assert_eq!(client.config().api_key, Some("test-key".to_string()));
        assert_eq!(client.config().access_token, Some("test-token".to_string()));
    }

    #[test]
    fn test_default_headers_include_both_credentials() {
        let config = ClientConfig::default()
            .with_api_key("key-1")
            .with_access_token("tok-1");
        let headers = default_headers(&config).expect("headers");
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(
            headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()),
            Some("key-1")
        );
        assert_eq!(
            headers.get(COOKIE).and_then(|v| v.to_str().ok()),
            Some("sb-access-token=tok-1")
        );
    }

    #[test]
    fn test_default_headers_without_credentials() {
        let headers = default_headers(&ClientConfig::default()).expect("headers");
        assert_eq!(headers.len(), 1);
        assert!(headers.get(API_KEY_HEADER).is_none());
        assert!(headers.get(COOKIE).is_none());
    }

    #[test]
    fn test_default_headers_skip_empty_credentials() {
        let config = ClientConfig::default()
            .with_api_key("")
            .with_access_token("");
        let headers = default_headers(&config).expect("headers");
        assert_eq!(headers.len(), 1);
        assert!(headers.get(API_KEY_HEADER).is_none());
        assert!(headers.get(COOKIE).is_none());
        assert!(!has_credential(config.api_key.as_deref()));
        assert!(!has_credential(config.access_token.as_deref()));
    }

    #[test]
    fn test_append_query_formats_values() {
        let mut url = Url::parse("https://x/api/v1/students").expect("url");
        let query = json!({
            "organization_id": "org 1",
            "page": 2,
            "active": false,
            "search": "",
            "skipped": null
        });
        append_query(&mut url, &query).expect("query");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("organization_id".to_string(), "org 1".to_string())));
        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("active".to_string(), "false".to_string())));
        assert!(pairs.contains(&("search".to_string(), String::new())));
        assert!(!pairs.iter().any(|(k, _)| k == "skipped"));
    }

    #[test]
    fn test_append_query_empty_object_leaves_url_untouched() {
        let mut url = Url::parse("https://x/api/sessions/active").expect("url");
        append_query(&mut url, &json!({})).expect("query");
        assert_eq!(url.as_str(), "https://x/api/sessions/active");
    }

    #[test]
    fn test_append_query_rejects_non_object() {
        let mut url = Url::parse("https://x/api").expect("url");
        let err = append_query(&mut url, &json!(["a"])).unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }
}
