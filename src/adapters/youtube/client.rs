//! Implements VideoPlatform against the YouTube Data API v3 using reqwest.
//!
//! API-key auth only. No retry, backoff or timeout layer: every failure is
//! mapped to a DomainError and returned to the caller.

use crate::adapters::youtube::mapper::{self, CommentThreadListResponse, SearchListResponse};
use crate::domain::{CommentPage, DomainError, VideoId, VideoPage};
use crate::ports::VideoPlatform;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// YouTube Data API adapter.
pub struct YouTubeApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeApiClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - API root without trailing slash (e.g. "https://www.googleapis.com/youtube/v3")
    /// * `api_key` - YouTube Data API key
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// GET `{base_url}/{resource}` with the given query, returning the status and body text.
    async fn get(
        &self,
        resource: &str,
        query: &[(&str, String)],
    ) -> Result<(reqwest::StatusCode, String), DomainError> {
        let url = format!("{}/{}", self.base_url, resource);
        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;
        Ok((status, body))
    }
}

/// Transport-level failures (DNS, connect, timeout, broken body) are transient.
fn map_transport_error(e: reqwest::Error) -> DomainError {
    if e.is_decode() {
        DomainError::MalformedResponse(e.to_string())
    } else {
        DomainError::TransientNetwork(e.to_string())
    }
}

/// Query for one `search` page: newest first, videos only, ids only.
pub fn search_query(
    channel_id: &str,
    page_size: u32,
    page_token: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("part", "id".to_string()),
        ("channelId", channel_id.to_string()),
        ("maxResults", page_size.to_string()),
        ("order", "date".to_string()),
        ("type", "video".to_string()),
    ];
    if let Some(token) = page_token {
        query.push(("pageToken", token.to_string()));
    }
    query
}

/// Query for one `commentThreads` page, comment text as plain text.
pub fn comment_threads_query(
    video_id: &VideoId,
    page_size: u32,
    page_token: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("part", "snippet".to_string()),
        ("videoId", video_id.to_string()),
        ("maxResults", page_size.to_string()),
        ("textFormat", "plainText".to_string()),
    ];
    if let Some(token) = page_token {
        query.push(("pageToken", token.to_string()));
    }
    query
}

fn parse_body<T: DeserializeOwned>(resource: &str, body: &str) -> Result<T, DomainError> {
    serde_json::from_str(body).map_err(|e| {
        warn!(
            resource,
            error = %e,
            body = %body.chars().take(200).collect::<String>(),
            "unexpected API payload"
        );
        DomainError::MalformedResponse(format!("{}: {}", resource, e))
    })
}

#[async_trait]
impl VideoPlatform for YouTubeApiClient {
    async fn search_channel_videos(
        &self,
        channel_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<VideoPage, DomainError> {
        let query = search_query(channel_id, page_size, page_token);
        let (status, body) = self.get("search", &query).await?;
        if !status.is_success() {
            warn!(status = %status, channel_id, "search request failed");
            return Err(mapper::error_from_status(status.as_u16(), &body));
        }

        let resp: SearchListResponse = parse_body("search", &body)?;
        let page = mapper::search_to_domain(resp)?;
        debug!(
            channel_id,
            count = page.items.len(),
            has_next = page.next_page_token.is_some(),
            "search page received"
        );
        Ok(page)
    }

    async fn list_comment_threads(
        &self,
        video_id: &VideoId,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentPage, DomainError> {
        let query = comment_threads_query(video_id, page_size, page_token);
        let (status, body) = self.get("commentThreads", &query).await?;
        if status == reqwest::StatusCode::FORBIDDEN && mapper::is_comments_disabled(&body) {
            warn!(video_id = %video_id, "comments disabled, treating as empty");
            return Ok(CommentPage::empty());
        }
        if !status.is_success() {
            warn!(status = %status, video_id = %video_id, "commentThreads request failed");
            return Err(mapper::error_from_status(status.as_u16(), &body));
        }

        let resp: CommentThreadListResponse = parse_body("commentThreads", &body)?;
        let page = mapper::comment_threads_to_domain(resp);
        debug!(
            video_id = %video_id,
            count = page.items.len(),
            has_next = page.next_page_token.is_some(),
            "comment page received"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_search_query_newest_videos_first() {
        let query = search_query("UC1", 3, None);

        assert_eq!(param(&query, "part"), Some("id"));
        assert_eq!(param(&query, "channelId"), Some("UC1"));
        assert_eq!(param(&query, "maxResults"), Some("3"));
        assert_eq!(param(&query, "order"), Some("date"));
        assert_eq!(param(&query, "type"), Some("video"));
        assert_eq!(param(&query, "pageToken"), None);
    }

    #[test]
    fn test_search_query_carries_page_token() {
        let query = search_query("UC1", 50, Some("CDIQAA"));
        assert_eq!(param(&query, "pageToken"), Some("CDIQAA"));
    }

    #[test]
    fn test_comment_threads_query() {
        let id = VideoId::new("vid1");

        let first = comment_threads_query(&id, 100, None);
        assert_eq!(param(&first, "part"), Some("snippet"));
        assert_eq!(param(&first, "videoId"), Some("vid1"));
        assert_eq!(param(&first, "maxResults"), Some("100"));
        assert_eq!(param(&first, "textFormat"), Some("plainText"));
        assert_eq!(param(&first, "pageToken"), None);

        let next = comment_threads_query(&id, 100, Some("QURTSl9p"));
        assert_eq!(param(&next, "pageToken"), Some("QURTSl9p"));
    }

    #[test]
    fn test_key_never_in_built_query() {
        assert_eq!(param(&search_query("UC1", 5, None), "key"), None);
    }
}
