//! Stateless HTTP request builder and response parser for the client API.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiResponse, Client};

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Synchronous, stateless client for `/api/client`.
///
/// The caller is responsible for executing the HTTP round-trip between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ClientApiClient {
    base_url: String,
}

impl ClientApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_find_by_id(&self, id: i32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/client/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The tax id is opaque here and is percent-encoded as a single path
    /// segment.
    pub fn build_find_by_tax_id(&self, tax_id: &str) -> HttpRequest {
        let segment = utf8_percent_encode(tax_id, PATH_SEGMENT);
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/client/taxid/{segment}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_save(&self, client: &Client) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(client)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/client", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_find_by_id(&self, response: HttpResponse) -> Result<Client, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_find_by_tax_id(&self, response: HttpResponse) -> Result<Client, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_save(&self, response: HttpResponse) -> Result<Client, ApiError> {
        parse_envelope(response)
    }
}

/// Decode the envelope for the statuses the API produces (200, 400, 500) and
/// map everything else to `HttpError`.
fn parse_envelope(response: HttpResponse) -> Result<Client, ApiError> {
    if !matches!(response.status, 200 | 400 | 500) {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }

    let envelope: ApiResponse<Client> = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))?;

    match response.status {
        200 => envelope.data.ok_or(ApiError::MissingData),
        400 => Err(ApiError::Consistency(envelope.errors)),
        _ => Err(ApiError::Server(envelope.errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ClientApiClient {
        ClientApiClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_find_by_id_produces_correct_request() {
        let req = client().build_find_by_id(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/client/7");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_find_by_tax_id_produces_correct_request() {
        let req = client().build_find_by_tax_id("12345678900");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:3000/api/client/taxid/12345678900"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_find_by_tax_id_encodes_reserved_characters() {
        let c = client();
        assert_eq!(
            c.build_find_by_tax_id("123/456").path,
            "http://localhost:3000/api/client/taxid/123%2F456"
        );
        assert_eq!(
            c.build_find_by_tax_id("123?x=1").path,
            "http://localhost:3000/api/client/taxid/123%3Fx%3D1"
        );
        assert_eq!(
            c.build_find_by_tax_id("123 456").path,
            "http://localhost:3000/api/client/taxid/123%20456"
        );
    }

    #[test]
    fn build_save_produces_correct_request() {
        let req = client().build_save(&Client::new("Ana", "12345678900")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/client");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Ana", "taxId": "12345678900" }));
    }

    #[test]
    fn parse_success_returns_data() {
        let found = client()
            .parse_find_by_id(response(
                200,
                r#"{"data":{"id":1,"name":"Ana","taxId":"12345678900"},"errors":[]}"#,
            ))
            .unwrap();
        assert_eq!(found.id, Some(1));
        assert_eq!(found.name, "Ana");
    }

    #[test]
    fn parse_success_without_data_is_missing_data() {
        let err = client()
            .parse_find_by_id(response(200, r#"{"data":null,"errors":[]}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingData));
    }

    #[test]
    fn parse_bad_request_returns_consistency_messages() {
        let err = client()
            .parse_find_by_id(response(
                400,
                r#"{"data":null,"errors":["Client not found for id 9"]}"#,
            ))
            .unwrap_err();
        match err {
            ApiError::Consistency(errors) => assert_eq!(errors, vec!["Client not found for id 9"]),
            other => panic!("expected Consistency, got {other:?}"),
        }
    }

    #[test]
    fn parse_server_error_returns_server_messages() {
        let err = client()
            .parse_save(response(
                500,
                r#"{"data":null,"errors":["An error occurred in the application"]}"#,
            ))
            .unwrap_err();
        assert!(matches!(err, ApiError::Server(ref e) if e.len() == 1));
    }

    #[test]
    fn parse_unexpected_status_is_http_error() {
        let err = client()
            .parse_find_by_tax_id(response(404, "Not Found"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 404, .. }));
    }

    #[test]
    fn parse_bad_json_is_deserialization_error() {
        let err = client().parse_save(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ClientApiClient::new("http://localhost:3000/");
        let req = client.build_find_by_id(1);
        assert_eq!(req.path, "http://localhost:3000/api/client/1");
    }

    #[test]
    fn consistency_error_display_joins_messages() {
        let err = ApiError::Consistency(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "rejected: a; b");
    }
}
