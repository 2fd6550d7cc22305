//! HTTP plumbing for the postboard terminal client.
//!
//! [`ApiClient`] speaks to the forum's REST collaborators: the post
//! collection, the deletion endpoint, the session provider and the
//! per-post like/comment lookups the embedded widgets use. Every call
//! returns an explicit `Result`; reload policy after a delete belongs
//! to the caller, not here.

mod error;

pub use error::ClientError;

use postboard_core::config::PostboardConfig;
use postboard_core::post::Post;
use postboard_core::state::{CommentsResponse, LikesResponse, MeResponse, PostResponse, PostsResponse};
use postboard_core::Viewer;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &PostboardConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.server_url)
            .map_err(|e| ClientError::BadBaseUrl(format!("{}: {e}", config.server_url)))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::BadBaseUrl(config.server_url.clone()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::custom_error(format!("Unable to build client: {e}")))?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, parts: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(parts);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        response.json::<T>().await.map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch the full post collection. The caller owns pagination and
    /// filtering; the server hands back everything in one envelope.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError> {
        let response: PostsResponse = self.get_json(self.endpoint(&["posts"])).await?;
        Ok(response.posts)
    }

    /// Fetch a single post, the detail-view target.
    pub async fn fetch_post(&self, id: &str) -> Result<Post, ClientError> {
        let response: PostResponse = self.get_json(self.endpoint(&["posts", id])).await?;
        Ok(response.post)
    }

    /// Issue a deletion request for one post. Success is judged by the
    /// HTTP status alone; no response body is relied upon. The caller
    /// decides what to do next (the browser reloads the whole list).
    pub async fn delete_post(&self, id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&["posts", id]);
        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        Ok(())
    }

    /// The session context, used only for ownership gating. Not being
    /// signed in is a normal state, not an error.
    pub async fn current_viewer(&self) -> Result<Viewer, ClientError> {
        let url = self.endpoint(&["users", "me"]);
        match self.get_json::<MeResponse>(url).await {
            Ok(me) => Ok(Viewer::with_id(me.user.id)),
            Err(ClientError::Status { status, .. })
                if status == StatusCode::UNAUTHORIZED
                    || status == StatusCode::FORBIDDEN
                    || status == StatusCode::NOT_FOUND =>
            {
                Ok(Viewer::anonymous())
            }
            Err(e) => Err(e),
        }
    }

    /// Like count for one post, for the embedded like widget.
    pub async fn like_count(&self, post_id: &str) -> Result<usize, ClientError> {
        let url = self.endpoint(&["posts", post_id, "likes"]);
        match self.get_json::<LikesResponse>(url).await {
            Ok(response) => Ok(response.likes.len()),
            // The server answers 404 when a post has no likes yet.
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// Comment count for one post, for the embedded comment widget.
    pub async fn comment_count(&self, post_id: &str) -> Result<usize, ClientError> {
        let url = self.endpoint(&["posts", post_id, "comments"]);
        match self.get_json::<CommentsResponse>(url).await {
            Ok(response) => Ok(response.comments.len()),
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND => Ok(0),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(server_url: &str) -> ApiClient {
        let config = PostboardConfig {
            server_url: server_url.into(),
            timeout_secs: 5,
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn endpoints_join_onto_the_base_url() {
        let api = client("http://localhost:3000");
        assert_eq!(
            api.endpoint(&["posts"]).as_str(),
            "http://localhost:3000/posts"
        );
        assert_eq!(
            api.endpoint(&["posts", "p1", "likes"]).as_str(),
            "http://localhost:3000/posts/p1/likes"
        );
    }

    #[test]
    fn trailing_slash_and_path_prefix_are_respected() {
        let api = client("https://forum.example.com/api/");
        assert_eq!(
            api.endpoint(&["posts", "p1"]).as_str(),
            "https://forum.example.com/api/posts/p1"
        );
    }

    #[test]
    fn rejects_an_unusable_base_url() {
        let config = PostboardConfig {
            server_url: "not a url".into(),
            timeout_secs: 5,
        };
        assert!(ApiClient::new(&config).is_err());
    }
}
