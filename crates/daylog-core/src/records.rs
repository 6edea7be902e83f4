//! Records API client
//!
//! HTTP client for the remote records service: schedule creation and
//! listing, plus the multipart image upload used by the add-entry form.
//! Uploads carry a `type` field naming the image category (`meal` or
//! `exercise`) so the service can route storage.
//!
//! # Example
//!
//! ```ignore
//! use daylog_core::{NewSchedule, RecordsClient, ScheduleTag};
//!
//! let client = RecordsClient::new("http://localhost:3000/api");
//!
//! // Upload a photo for a diet entry
//! let url = client
//!     .upload_record_image("photo.jpg", jpeg_bytes, ScheduleTag::Diet)
//!     .await?;
//!
//! // Save the entry
//! let record = client
//!     .create_schedule(&NewSchedule {
//!         content: "salad".into(),
//!         tag: ScheduleTag::Diet,
//!         image: Some(url),
//!     })
//!     .await?;
//! ```

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::error::{RecordsError, RecordsResult};
use crate::types::{NewSchedule, ScheduleRecord, ScheduleTag};

/// Maximum accepted image upload: 10 MB, matching the records service limit
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Successful upload response body
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Error response body the records API uses for non-2xx answers
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Client for the records API.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    base_url: String,
    http: reqwest::Client,
}

impl RecordsClient {
    /// Create a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Upload an image for a schedule entry and return its canonical URL.
    ///
    /// The payload goes out as a multipart form with a `file` part and a
    /// `type` field in {"meal", "exercise"} derived from the entry's tag.
    pub async fn upload_record_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        tag: ScheduleTag,
    ) -> RecordsResult<String> {
        if bytes.len() > MAX_UPLOAD_SIZE {
            return Err(RecordsError::ImageTooLarge(bytes.len()));
        }

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")?;
        let form = Form::new()
            .part("file", part)
            .text("type", tag.upload_kind());

        let response = self
            .http
            .post(self.endpoint("records/images"))
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;

        let body = response.text().await?;
        let url = parse_upload_response(&body)?;
        debug!(%url, kind = tag.upload_kind(), "record image uploaded");
        Ok(url)
    }

    /// Save a new schedule entry and return the stored record.
    pub async fn create_schedule(&self, schedule: &NewSchedule) -> RecordsResult<ScheduleRecord> {
        let response = self
            .http
            .post(self.endpoint("schedules"))
            .json(schedule)
            .send()
            .await?;
        let response = check_status(response).await?;

        let record = response.json::<ScheduleRecord>().await?;
        debug!(id = %record.id, tag = record.tag.as_str(), "schedule created");
        Ok(record)
    }

    /// Fetch all stored schedule entries, newest first.
    pub async fn list_schedules(&self) -> RecordsResult<Vec<ScheduleRecord>> {
        let response = self.http.get(self.endpoint("schedules")).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Map non-success responses to an API error carrying the body's message.
async fn check_status(response: reqwest::Response) -> RecordsResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(parse_api_error(status.as_u16(), &body))
}

fn parse_api_error(status: u16, body: &str) -> RecordsError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Records API returned status {status}"));
    RecordsError::Api { status, message }
}

fn parse_upload_response(body: &str) -> RecordsResult<String> {
    let parsed: UploadResponse = serde_json::from_str(body)
        .map_err(|e| RecordsError::InvalidResponse(format!("bad upload body: {e}")))?;
    if parsed.url.is_empty() {
        return Err(RecordsError::InvalidResponse(
            "upload response carried an empty url".to_string(),
        ));
    }
    Ok(parsed.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let client = RecordsClient::new("http://localhost:3000/api/");
        assert_eq!(
            client.endpoint("records/images"),
            "http://localhost:3000/api/records/images"
        );
        assert_eq!(
            client.endpoint("/schedules"),
            "http://localhost:3000/api/schedules"
        );
    }

    #[test]
    fn test_parse_upload_response() {
        let url = parse_upload_response(r#"{"url":"https://cdn/x.jpg"}"#).unwrap();
        assert_eq!(url, "https://cdn/x.jpg");
    }

    #[test]
    fn test_parse_upload_response_rejects_garbage() {
        assert!(matches!(
            parse_upload_response("not json"),
            Err(RecordsError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_upload_response(r#"{"url":""}"#),
            Err(RecordsError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_api_error_uses_body_message() {
        let err = parse_api_error(422, r#"{"message":"content required"}"#);
        assert_eq!(format!("{err}"), "content required");
    }

    #[test]
    fn test_api_error_falls_back_to_status() {
        let err = parse_api_error(502, "<html>bad gateway</html>");
        assert_eq!(format!("{err}"), "Records API returned status 502");

        // An empty message field also falls back
        let err = parse_api_error(500, r#"{"message":"  "}"#);
        assert_eq!(format!("{err}"), "Records API returned status 500");
    }
}
