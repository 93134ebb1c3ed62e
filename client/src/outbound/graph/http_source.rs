//! Reqwest-backed graph API source adapter.
//!
//! This adapter owns transport details only: endpoint URL construction,
//! the single GET per call, and classification of every outcome into
//! `GraphSourceError`. Classification is pure and synchronously testable;
//! the network touches nothing but `get_json`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use super::dto::{ErrorObjectDto, PagedDto, PhotoDto, PostDto, ProfileDto};
use crate::domain::error::GraphSourceError;
use crate::domain::feed::{Photo, Post};
use crate::domain::ports::GraphSource;
use crate::domain::profile::Profile;
use crate::domain::token::AccessToken;

/// Default base URL of the remote graph API.
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";
/// Default versioned path prefix appended to the base URL.
pub const DEFAULT_API_VERSION: &str = "v24.0";

/// API error code meaning the access token is invalid or expired.
const INVALID_TOKEN_CODE: i64 = 190;

/// Where requests go: base URL plus versioned path prefix.
///
/// Both values were global constants in earlier iterations; they are explicit
/// configuration so the adapter is pointable at a stub server in tests.
#[derive(Debug, Clone)]
pub struct GraphApiConfig {
    /// Absolute base URL, scheme and host only.
    pub base_url: Url,
    /// Version segment inserted between the base URL and endpoint paths.
    pub version: String,
}

/// Failures constructing a [`GraphHttpSource`].
#[derive(Debug, Error)]
pub enum GraphSourceBuildError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct the HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The configured base URL cannot carry endpoint path segments.
    #[error("base URL cannot be a base for endpoint paths")]
    InvalidBaseUrl,
}

/// An endpoint: fixed path, field selection, and page limit. The token is
/// appended per request and never stored here.
struct Endpoint {
    path: &'static str,
    fields: &'static [&'static str],
    limit: Option<u32>,
}

const PROFILE_ENDPOINT: Endpoint = Endpoint {
    path: "me",
    fields: &[
        "id",
        "name",
        "email",
        "location",
        "age_range",
        "gender",
        "birthday",
        "hometown",
        "picture",
    ],
    limit: None,
};

const POSTS_ENDPOINT: Endpoint = Endpoint {
    path: "me/posts",
    fields: &["id", "message", "created_time", "story"],
    limit: Some(10),
};

const PHOTOS_ENDPOINT: Endpoint = Endpoint {
    path: "me/photos",
    fields: &["id", "created_time", "images"],
    limit: Some(12),
};

/// Graph source adapter performing one HTTP GET per fetch, no retries.
///
/// No request timeout is set; whatever the transport's default is applies.
pub struct GraphHttpSource {
    client: Client,
    base_url: Url,
    version: String,
}

impl GraphHttpSource {
    /// Build an adapter from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// base URL cannot carry path segments.
    pub fn new(config: GraphApiConfig) -> Result<Self, GraphSourceBuildError> {
        if config.base_url.cannot_be_a_base() {
            return Err(GraphSourceBuildError::InvalidBaseUrl);
        }
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
            version: config.version,
        })
    }

    fn endpoint_url(&self, endpoint: &Endpoint, token: &AccessToken) -> Result<Url, GraphSourceError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| GraphSourceError::transport("base URL cannot carry path segments"))?;
            segments.pop_if_empty();
            segments.push(&self.version);
            segments.extend(endpoint.path.split('/'));
        }
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("fields", &endpoint.fields.join(","));
            if let Some(limit) = endpoint.limit {
                query.append_pair("limit", &limit.to_string());
            }
            query.append_pair("access_token", token.as_str());
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        token: &AccessToken,
    ) -> Result<T, GraphSourceError> {
        let url = self.endpoint_url(endpoint, token)?;
        // The URL carries the token; log the path only.
        tracing::debug!(path = endpoint.path, "issuing graph request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        let outcome = decode_payload(status, body.as_ref());
        if let Err(error) = &outcome {
            tracing::debug!(
                path = endpoint.path,
                status = status.as_u16(),
                ?error,
                "graph request classified as failure",
            );
        }
        outcome
    }
}

#[async_trait]
impl GraphSource for GraphHttpSource {
    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile, GraphSourceError> {
        let dto: ProfileDto = self.get_json(&PROFILE_ENDPOINT, token).await?;
        Ok(dto.into_profile())
    }

    async fn fetch_posts(&self, token: &AccessToken) -> Result<Vec<Post>, GraphSourceError> {
        let page: PagedDto<PostDto> = self.get_json(&POSTS_ENDPOINT, token).await?;
        Ok(page.data.into_iter().map(PostDto::into_post).collect())
    }

    async fn fetch_photos(&self, token: &AccessToken) -> Result<Vec<Photo>, GraphSourceError> {
        let page: PagedDto<PhotoDto> = self.get_json(&PHOTOS_ENDPOINT, token).await?;
        Ok(page.data.into_iter().map(PhotoDto::into_photo).collect())
    }
}

fn map_transport_error(error: reqwest::Error) -> GraphSourceError {
    GraphSourceError::transport(error.to_string())
}

/// Classify a decoded response, in order: unparseable body is a transport
/// failure; an error envelope (any status, including `200 OK`) classifies by
/// code and status; a non-200 status without an envelope fails mechanically;
/// anything else is the success payload.
fn decode_payload<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, GraphSourceError> {
    let value: Value = serde_json::from_slice(body).map_err(|error| {
        GraphSourceError::transport(format!("response body is not valid JSON: {error}"))
    })?;
    if let Some(envelope) = extract_error_envelope(&value) {
        return Err(classify_api_error(status, &envelope));
    }
    if status != StatusCode::OK {
        return Err(GraphSourceError::http(status.as_u16()));
    }
    serde_json::from_value(value)
        .map_err(|error| GraphSourceError::transport(format!("unexpected response shape: {error}")))
}

fn extract_error_envelope(value: &Value) -> Option<ErrorObjectDto> {
    value
        .get("error")
        .and_then(|error| serde_json::from_value(error.clone()).ok())
}

fn classify_api_error(status: StatusCode, envelope: &ErrorObjectDto) -> GraphSourceError {
    if envelope.code == Some(INVALID_TOKEN_CODE) || status == StatusCode::UNAUTHORIZED {
        return GraphSourceError::InvalidToken;
    }
    match status {
        StatusCode::FORBIDDEN => GraphSourceError::PermissionDenied,
        StatusCode::NOT_FOUND => GraphSourceError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => GraphSourceError::RateLimited,
        _ => GraphSourceError::api(envelope.message.clone()),
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network classification and URL helpers.

    use super::*;
    use rstest::rstest;

    fn source() -> GraphHttpSource {
        let config = GraphApiConfig {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"),
            version: DEFAULT_API_VERSION.to_owned(),
        };
        GraphHttpSource::new(config).expect("source should build")
    }

    fn token() -> AccessToken {
        AccessToken::new("0123456789").expect("token should validate")
    }

    #[test]
    fn builds_versioned_urls_with_fields_limit_and_token() {
        let url = source()
            .endpoint_url(&POSTS_ENDPOINT, &token())
            .expect("URL should build");
        let rendered = url.as_str();
        assert!(rendered.starts_with("https://graph.facebook.com/v24.0/me/posts?"));
        assert!(rendered.contains("fields=id%2Cmessage%2Ccreated_time%2Cstory"));
        assert!(rendered.contains("limit=10"));
        assert!(rendered.ends_with("access_token=0123456789"));
    }

    #[test]
    fn profile_endpoint_has_no_limit() {
        let url = source()
            .endpoint_url(&PROFILE_ENDPOINT, &token())
            .expect("URL should build");
        assert!(url.as_str().contains("/v24.0/me?"));
        assert!(!url.as_str().contains("limit="));
    }

    #[rstest]
    #[case::code_190_any_status(StatusCode::BAD_REQUEST, Some(190), GraphSourceError::InvalidToken)]
    #[case::status_401_without_code(StatusCode::UNAUTHORIZED, None, GraphSourceError::InvalidToken)]
    #[case::status_403(StatusCode::FORBIDDEN, Some(10), GraphSourceError::PermissionDenied)]
    #[case::status_404(StatusCode::NOT_FOUND, Some(803), GraphSourceError::NotFound)]
    #[case::status_429(StatusCode::TOO_MANY_REQUESTS, Some(4), GraphSourceError::RateLimited)]
    fn classifies_error_envelopes_by_code_and_status(
        #[case] status: StatusCode,
        #[case] code: Option<i64>,
        #[case] expected: GraphSourceError,
    ) {
        let envelope = ErrorObjectDto {
            code,
            message: "whatever the server said".to_owned(),
        };
        assert_eq!(classify_api_error(status, &envelope), expected);
    }

    #[test]
    fn surfaces_unrecognised_api_errors_verbatim() {
        let envelope = ErrorObjectDto {
            code: Some(100),
            message: "Unsupported get request".to_owned(),
        };
        assert_eq!(
            classify_api_error(StatusCode::BAD_REQUEST, &envelope),
            GraphSourceError::api("Unsupported get request"),
        );
    }

    #[test]
    fn ok_with_error_envelope_classifies_like_the_failing_status() {
        let body = br#"{"error":{"code":190,"message":"Session expired"}}"#;
        let via_ok = decode_payload::<Value>(StatusCode::OK, body).expect_err("envelope fails");
        let via_status =
            decode_payload::<Value>(StatusCode::BAD_REQUEST, body).expect_err("envelope fails");
        assert_eq!(via_ok, via_status);
        assert_eq!(via_ok, GraphSourceError::InvalidToken);
    }

    #[test]
    fn non_json_bodies_are_transport_failures() {
        let error =
            decode_payload::<Value>(StatusCode::OK, b"<html>gateway</html>").expect_err("not JSON");
        assert!(matches!(error, GraphSourceError::Transport { .. }));
    }

    #[test]
    fn non_200_without_envelope_fails_with_the_status() {
        let error = decode_payload::<Value>(StatusCode::INTERNAL_SERVER_ERROR, b"{}")
            .expect_err("status fails");
        assert_eq!(error, GraphSourceError::http(500));
    }

    #[test]
    fn decodes_profile_payloads_into_the_domain_shape() {
        let body = br#"{
            "id": "1234567890",
            "name": "Jane Doe",
            "location": { "name": "Edinburgh" },
            "hometown": { "name": "" },
            "age_range": { "min": 21 },
            "picture": { "data": { "url": "https://cdn.test/pic.jpg" } }
        }"#;
        let profile = decode_payload::<ProfileDto>(StatusCode::OK, body)
            .expect("profile should decode")
            .into_profile();
        assert_eq!(profile.id.as_deref(), Some("1234567890"));
        assert_eq!(profile.location.as_deref(), Some("Edinburgh"));
        assert_eq!(profile.hometown, None, "empty place names are dropped");
        assert_eq!(profile.age_range.and_then(|range| range.min), Some(21));
        assert_eq!(profile.age_range.and_then(|range| range.max), None);
        assert_eq!(profile.picture_url.as_deref(), Some("https://cdn.test/pic.jpg"));
        assert_eq!(profile.email, None);
    }

    #[test]
    fn missing_data_field_decodes_as_an_empty_page() {
        let page = decode_payload::<PagedDto<PostDto>>(StatusCode::OK, b"{}")
            .expect("page should decode");
        assert!(page.data.is_empty());
    }

    #[test]
    fn decodes_photo_pages_including_sourceless_entries() {
        let body = br#"{"data":[
            { "id": "a", "created_time": "2015-03-21T14:30:00+0000", "images": [] },
            { "id": "b", "created_time": "2015-03-21T14:30:00+0000",
              "images": [ { "source": "https://cdn.test/b.jpg" }, { "source": "small" } ] }
        ]}"#;
        let photos: Vec<Photo> = decode_payload::<PagedDto<PhotoDto>>(StatusCode::OK, body)
            .expect("page should decode")
            .data
            .into_iter()
            .map(PhotoDto::into_photo)
            .collect();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].primary_source(), None);
        assert_eq!(photos[1].primary_source(), Some("https://cdn.test/b.jpg"));
    }

    #[test]
    fn non_object_error_values_are_not_envelopes() {
        let body = br#"{"error": "broken", "id": "1"}"#;
        let profile = decode_payload::<ProfileDto>(StatusCode::OK, body)
            .expect("payload should decode as success");
        assert_eq!(profile.into_profile().id.as_deref(), Some("1"));
    }
}
