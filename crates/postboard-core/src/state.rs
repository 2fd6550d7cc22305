//! Response envelopes for the forum API. Every endpoint wraps its
//! payload in a single-key object (`{"posts": [...]}`, `{"post": {...}}`).

use crate::post::Post;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PostResponse {
    pub post: Post,
}

/// `GET /users/me`: the session the delete gating compares against.
#[derive(Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub user: SessionUser,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub name: String,
}

/// `GET /posts/{id}/likes`: the like widget only needs the count.
#[derive(Serialize, Deserialize, Debug)]
pub struct LikesResponse {
    pub likes: Vec<LikeEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LikeEntry {
    pub id: String,
    pub user_id: String,
}

/// `GET /posts/{id}/comments`: the comment widget only needs the count.
#[derive(Serialize, Deserialize, Debug)]
pub struct CommentsResponse {
    pub comments: Vec<CommentEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentEntry {
    pub id: String,
    pub user_id: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_envelope_round_trips_from_server_json() {
        let raw = r#"{
            "posts": [{
                "id": "p1",
                "title": "Hello",
                "content": "World",
                "userId": "u1",
                "createdAt": "2024-01-15T10:30:00Z",
                "updatedAt": "2024-01-15T10:30:00Z"
            }]
        }"#;
        let parsed: PostsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.posts.len(), 1);
        assert_eq!(parsed.posts[0].id(), "p1");
    }

    #[test]
    fn me_envelope_parses() {
        let raw = r#"{"user": {"id": "u1", "username": "vel", "name": "Vel"}}"#;
        let parsed: MeResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.user.id, "u1");
    }
}
