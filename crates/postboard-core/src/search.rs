//! Client-side search over an already-fetched post list.
//!
//! Filtering happens upstream of the view: the parent holds the full
//! collection, derives the filtered list from the live query and
//! passes only that down. The view itself keeps no filter state.

use crate::post::Post;

/// Case-insensitive substring match on title or content. The empty
/// query matches every post.
pub fn matches(post: &Post, query: &str) -> bool {
    let query = query.to_lowercase();
    post.title.to_lowercase().contains(&query)
        || post.content.to_lowercase().contains(&query)
}

/// Derive the filtered list the view renders from.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| matches(post, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(title: &str, content: &str) -> Post {
        Post::new(
            "p1",
            title,
            content,
            "user-1",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn matches_title_and_content_case_insensitively() {
        let p = post("Rust on the Frontend", "Some thoughts on WASM");
        assert!(matches(&p, "rust"));
        assert!(matches(&p, "FRONTEND"));
        assert!(matches(&p, "wasm"));
        assert!(!matches(&p, "golang"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let posts = vec![post("a", "b"), post("c", "d")];
        assert_eq!(filter_posts(&posts, "").len(), 2);
    }

    #[test]
    fn filtering_preserves_order() {
        let posts = vec![
            post("alpha news", "x"),
            post("beta", "y"),
            post("alphabet soup", "z"),
        ];
        let filtered = filter_posts(&posts, "alpha");
        let titles: Vec<&str> = filtered.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["alpha news", "alphabet soup"]);
    }
}
