//! External-id decoding against the platform API.

use crate::error::RecopsError;
use crate::platform::{PlatformClient, PlatformError};
use crate::ui::Status;

/// Translate an external id into the platform's internal id.
///
/// A non-success response is a reported condition, not a process failure:
/// the server body is printed verbatim and the caller gets `Ok(None)` so
/// the command still exits cleanly. Only network/shape errors propagate.
pub async fn decode_id(
    client: &PlatformClient,
    status: &Status,
    external_id: &str,
) -> Result<Option<String>, RecopsError> {
    match client.decode_id(external_id).await {
        Ok(internal_id) => Ok(Some(internal_id)),
        Err(PlatformError::Api { body, .. }) => {
            status.fail(&format!("Error decoding id {external_id}: {body}"));
            Ok(None)
        }
        Err(other) => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn login(server: &MockServer) -> PlatformClient {
        Mock::given(method("PUT"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {"fields": {"token": "tok"}}
            })))
            .mount(server)
            .await;
        PlatformClient::login(&server.uri(), "e", "p").await.unwrap()
    }

    #[tokio::test]
    async fn decodes_known_id() {
        let server = MockServer::start().await;
        let client = login(&server).await;
        Mock::given(method("GET"))
            .and(path("/decode_id/ext-9"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"internal_id": "int-42"})),
            )
            .mount(&server)
            .await;

        let decoded = decode_id(&client, &Status::new(), "ext-9").await.unwrap();
        assert_eq!(decoded.as_deref(), Some("int-42"));
    }

    #[tokio::test]
    async fn unknown_id_is_reported_not_fatal() {
        let server = MockServer::start().await;
        let client = login(&server).await;
        Mock::given(method("GET"))
            .and(path("/decode_id/bogus"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such id"))
            .mount(&server)
            .await;

        // The API rejection prints the body and yields None instead of Err.
        let decoded = decode_id(&client, &Status::new(), "bogus").await.unwrap();
        assert!(decoded.is_none());
    }
}
