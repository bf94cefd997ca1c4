//! Map YouTube Data API v3 payloads to domain entities.
//!
//! Wire DTOs live here with the mapping, so the client only deals in
//! requests and status codes.

use crate::domain::{CommentPage, DomainError, VideoId, VideoPage};
use serde::Deserialize;

/// `search.list` response (part=id).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

/// `commentThreads.list` response (part=snippet).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub text_display: String,
}

/// Error envelope: `{"error": {"code": 403, "message": "...", "errors": [{"reason": "..."}]}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub reason: String,
}

/// Reason code YouTube returns (HTTP 403) when a video has comments turned off.
pub const REASON_COMMENTS_DISABLED: &str = "commentsDisabled";

/// Map a search page to video ids. Every item must carry `id.videoId`.
pub fn search_to_domain(resp: SearchListResponse) -> Result<VideoPage, DomainError> {
    let ids = resp
        .items
        .into_iter()
        .map(|item| {
            item.id.video_id.map(VideoId::new).ok_or_else(|| {
                DomainError::MalformedResponse(format!(
                    "search item without id.videoId (kind: {})",
                    item.id.kind.as_deref().unwrap_or("unknown")
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(VideoPage::new(ids, resp.next_page_token))
}

/// Map a comment-thread page to top-level comment texts, in page order.
pub fn comment_threads_to_domain(resp: CommentThreadListResponse) -> CommentPage {
    let texts = resp
        .items
        .into_iter()
        .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
        .collect();
    CommentPage::new(texts, resp.next_page_token)
}

/// Parse the error body. Returns `None` if it is not the standard envelope.
pub fn parse_error_body(body: &str) -> Option<ApiErrorBody> {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|e| e.error)
}

/// True if the error body carries the `commentsDisabled` reason.
pub fn is_comments_disabled(body: &str) -> bool {
    parse_error_body(body)
        .map(|e| e.errors.iter().any(|d| d.reason == REASON_COMMENTS_DISABLED))
        .unwrap_or(false)
}

/// Map a non-success HTTP status and body to a domain error.
pub fn error_from_status(status: u16, body: &str) -> DomainError {
    let parsed = parse_error_body(body);
    let message = parsed
        .as_ref()
        .map(|e| e.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.chars().take(200).collect());
    let has_reason = |reason: &str| {
        parsed
            .as_ref()
            .map(|e| e.errors.iter().any(|d| d.reason == reason))
            .unwrap_or(false)
    };

    match status {
        401 | 403 => DomainError::Authorization(message),
        400 if has_reason("keyInvalid") || has_reason("keyExpired") => {
            DomainError::Authorization(message)
        }
        404 => DomainError::NotFound(message),
        500..=599 => DomainError::TransientNetwork(format!("server error {}: {}", status, message)),
        _ => DomainError::Api { status, message },
    }
}
