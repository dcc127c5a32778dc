//! Request execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct, which sends requests to the
//! v2 API with Basic auth, version headers and status code mapping.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
};
use tracing::{Span, instrument};
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, AuthError, ClientError, ConfigError};
use crate::format::WireFormat;
use crate::logging::log_body;
use crate::method::RestMethod;
use crate::resource::ResourcePath;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API version sent with every request.
pub const API_VERSION: &str = "2.29";

const USER_AGENT: &str = concat!("recurly-rust/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    config: Config,
    base_url: Option<Url>,
    timeout: Duration,
    default_headers: HeaderMap,
    format: WireFormat,
    accept_language: Option<String>,
}

impl ApiClientBuilder {
    fn new(config: Config) -> Self {
        Self {
            config,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            format: WireFormat::default(),
            accept_language: None,
        }
    }

    /// Sends requests to `base_url` instead of `https://<subdomain>.recurly.com/v2/`.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = ApiClient::builder(Config::new("key"))
    ///     .base_url(Url::parse(&format!("{}/v2/", mock_server.uri()))?)
    ///     .build()?;
    /// ```
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let header_name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::invalid_header(name.as_ref(), e.to_string()))?;
        let header_value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(name.as_ref(), e.to_string()))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Selects the body encoding. XML unless set.
    pub fn format(mut self, format: WireFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets `Accept-Language` so server messages come back localized.
    pub fn accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = Some(language.into());
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the API key is empty or cannot be sent as a
    /// header, a header is invalid, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        if self.config.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }
        HeaderValue::try_from(self.config.api_key.as_str())
            .map_err(|_| AuthError::InvalidKeyFormat)?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => self.config.base_url()?,
        };

        let mut headers = self.default_headers;
        headers.insert(ACCEPT, HeaderValue::from_static(self.format.accept()));
        headers.insert(
            HeaderName::from_static("x-api-version"),
            HeaderValue::from_static(API_VERSION),
        );
        if let Some(language) = &self.accept_language {
            let value = HeaderValue::try_from(language.as_str())
                .map_err(|e| ConfigError::invalid_header("Accept-Language", e.to_string()))?;
            headers.insert(ACCEPT_LANGUAGE, value);
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url,
            config: self.config,
            format: self.format,
        })
    }
}

/// A successful response, fully read.
#[derive(Debug, Clone)]
pub(crate) struct Response {
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub(crate) fn body(&self) -> &[u8] {
        &self.body
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Async client for the Recurly v2 API.
///
/// The client wraps `reqwest::Client` with connection pooling and carries a
/// [`Config`] snapshot, so it never reads thread-local settings while a
/// request is in flight. It is cheap to clone.
///
/// ## Examples
///
/// ```rust,ignore
/// use recurly::{ApiClient, Config};
/// use recurly::resources::Account;
///
/// let client = ApiClient::new(Config::new("my-private-key"))?;
/// let account = client.find::<Account>("verena").await?;
/// println!("{:?}", account.email);
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    config: Config,
    format: WireFormat,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(config: Config) -> ApiClientBuilder {
        ApiClientBuilder::new(config)
    }

    /// Creates a new API client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        Self::builder(config).build()
    }

    /// Creates a client from the settings visible to the calling thread.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no API key is configured.
    pub fn from_config() -> Result<Self, ApiError> {
        Self::new(Config::current()?)
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configuration snapshot.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the body encoding.
    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub(crate) fn url_for(&self, path: &ResourcePath) -> Result<Url, ApiError> {
        Ok(path.to_url(&self.base_url)?)
    }

    /// Sends one request and maps non-success statuses to errors.
    ///
    /// `root` is the element name of the resource involved; it is stripped
    /// from field paths in validation errors.
    #[instrument(
        name = "api_request",
        skip(self, method, url, body),
        fields(
            http.method = %method,
            http.url = %url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn send(
        &self,
        method: RestMethod,
        url: Url,
        root: &str,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        let mut request = self.client.request(method.to_reqwest(), url);
        request = self.apply_auth(request);

        if let Some(body) = body {
            log_body("request", body.as_bytes());
            request = request
                .header(CONTENT_TYPE, self.format.content_type())
                .body(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                Span::current().record("otel.status_code", "ERROR");
                return Err(ClientError::Request(e).into());
            }
        };

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);
        tracing::debug!(status = status_code, "recurly response");

        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(ClientError::Request)?;
        log_body("response", &body);

        if status.is_success() {
            Span::current().record("otel.status_code", "OK");
            return Ok(Response { headers, body });
        }

        let otel_status = if status.is_server_error() {
            "ERROR"
        } else {
            "UNSET"
        };
        Span::current().record("otel.status_code", otel_status);

        Err(self.status_error(method, status, root, &body))
    }

    fn status_error(
        &self,
        method: RestMethod,
        status: reqwest::StatusCode,
        root: &str,
        body: &[u8],
    ) -> ApiError {
        if status.as_u16() == 422 {
            return ApiError::Invalid(self.format.decode_field_errors(root, body));
        }

        let mut message = self.format.decode_error_message(body);
        if message.is_empty() {
            message = status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string();
        }

        match status.as_u16() {
            401 => AuthError::AuthenticationFailed { message }.into(),
            403 => AuthError::InsufficientPermissions {
                operation: format!("{method} {root}"),
            }
            .into(),
            404 => ApiError::NotFound { message },
            code if status.is_server_error() => ClientError::Server {
                status: code,
                message,
            }
            .into(),
            code => ClientError::HttpStatus {
                status: code,
                message,
            }
            .into(),
        }
    }

    /// HTTP Basic with the API key as the user name and no password.
    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.basic_auth(&self.config.api_key, None::<&str>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        let base_url = Url::parse(&format!("{}/v2/", server.uri())).unwrap();
        ApiClient::builder(Config::new("test-key"))
            .base_url(base_url)
            .build()
            .unwrap()
    }

    fn accounts_url(client: &ApiClient) -> Url {
        client.url_for(&ResourcePath::new("accounts")).unwrap()
    }

    #[tokio::test]
    async fn test_sends_auth_and_version_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/accounts"))
            .and(header("authorization", "Basic dGVzdC1rZXk6"))
            .and(header("x-api-version", API_VERSION))
            .and(header("accept", "application/xml"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<accounts/>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await
            .unwrap();
        assert_eq!(response.body(), b"<accounts/>");
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_request_span_is_emitted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await
            .unwrap();

        assert!(logs_contain("api_request"));
        assert!(logs_contain("recurly response"));
    }

    #[tokio::test]
    async fn test_sends_body_with_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/accounts"))
            .and(header("content-type", "application/xml; charset=utf-8"))
            .and(body_string("<account><account_code>a</account_code></account>"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client
            .send(
                RestMethod::Post,
                accounts_url(&client),
                "account",
                Some("<account><account_code>a</account_code></account>".to_string()),
            )
            .await
            .unwrap();
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_accept_language_and_json_format() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/accounts"))
            .and(header("accept", "application/json"))
            .and(header("accept-language", "fr"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let base_url = Url::parse(&format!("{}/v2/", server.uri())).unwrap();
        let client = ApiClient::builder(Config::new("test-key"))
            .base_url(base_url)
            .format(WireFormat::Json)
            .accept_language("fr")
            .build()
            .unwrap();
        client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_http_error_401() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("HTTP Basic: Access denied."))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await;
        match result {
            Err(ApiError::Auth(AuthError::AuthenticationFailed { message })) => {
                assert_eq!(message, "HTTP Basic: Access denied.");
            }
            other => panic!("expected authentication failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_error_403() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .send(RestMethod::Delete, accounts_url(&client), "account", None)
            .await;
        assert!(matches!(
            result,
            Err(ApiError::Auth(AuthError::InsufficientPermissions { ref operation }))
                if operation == "DELETE account"
        ));
    }

    #[tokio::test]
    async fn test_http_error_404() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                "<error><symbol>not_found</symbol>\
                 <description>Couldn't find Account with account_code = nobody</description></error>",
            ))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await;
        match result {
            Err(ApiError::NotFound { message }) => {
                assert_eq!(message, "Couldn't find Account with account_code = nobody");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_error_422() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string(
                r#"<errors><error field="account.email" symbol="invalid_email">is not a valid email address</error></errors>"#,
            ))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .send(
                RestMethod::Post,
                accounts_url(&client),
                "account",
                Some("<account/>".to_string()),
            )
            .await;
        let err = result.unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get("email"),
            ["is not a valid email address"]
        );
    }

    #[tokio::test]
    async fn test_http_error_500() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await;
        assert!(matches!(
            result,
            Err(ApiError::Client(ClientError::Server { status: 500, .. }))
        ));
    }

    #[tokio::test]
    async fn test_other_status_keeps_code() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(402))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await;
        match result {
            Err(ApiError::Client(ClientError::HttpStatus { status, message })) => {
                assert_eq!(status, 402);
                assert_eq!(message, "Payment Required");
            }
            other => panic!("expected http status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let server = MockServer::start().await;
        let base_url = Url::parse(&format!("{}/v2/", server.uri())).unwrap();
        drop(server);

        let client = ApiClient::builder(Config::new("test-key"))
            .base_url(base_url)
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let result = client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await;
        match result {
            Err(ApiError::Client(e)) => assert!(e.is_transport_failure()),
            other => panic!("expected transport failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_default_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("x-custom-header", "custom-value"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let base_url = Url::parse(&format!("{}/v2/", server.uri())).unwrap();
        let client = ApiClient::builder(Config::new("test-key"))
            .base_url(base_url)
            .default_header("X-Custom-Header", "custom-value")
            .unwrap()
            .build()
            .unwrap();
        client
            .send(RestMethod::Get, accounts_url(&client), "account", None)
            .await
            .unwrap();
    }

    #[test]
    fn test_invalid_default_header() {
        let result = ApiClient::builder(Config::new("test-key")).default_header("bad header", "x");
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidHeader { .. }))
        ));
    }

    #[test]
    fn test_build_rejects_missing_or_malformed_key() {
        assert!(matches!(
            ApiClient::new(Config::new("")),
            Err(ApiError::Config(ConfigError::MissingApiKey))
        ));
        assert!(matches!(
            ApiClient::new(Config::new("bad\nkey")),
            Err(ApiError::Auth(AuthError::InvalidKeyFormat))
        ));
    }

    #[test]
    fn test_default_base_url_uses_subdomain() {
        let mut config = Config::new("test-key");
        config.subdomain = "acme".to_string();
        let client = ApiClient::new(config).unwrap();
        assert_eq!(client.base_url().as_str(), "https://acme.recurly.com/v2/");
        assert_eq!(client.format(), WireFormat::Xml);
    }
}
