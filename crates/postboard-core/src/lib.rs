//! Core types for postboard: the post model, page state, search
//! filtering and the post-list view. No I/O lives here; the client
//! crate owns the wire.
mod error;
pub mod post;
pub mod page;
pub mod search;
pub mod view;
pub mod config;
pub mod state;

pub use error::{PostboardError, PostboardResult};

pub mod constant {
    pub const POSTS_PER_PAGE: usize = 10;
    pub const CARD_WIDTH: usize = 60;
    pub const CONFIG_DIR: &str = ".postboard";
    pub const CONFIG_FILE: &str = "postboard.toml";
    pub const CONFIG_ENV: &str = "POSTBOARDCONF";
    pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
    /// India Standard Time is UTC+05:30.
    pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;
}

/// Session context for the viewing user. Passed explicitly into the
/// view instead of being read from an ambient provider, so ownership
/// gating stays testable. Gating is a client-side convenience only;
/// the server performs the authoritative check.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewer {
    pub user_id: Option<String>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            user_id: Some(id.into()),
        }
    }

    /// Whether this viewer owns the resource with the given owner id.
    pub fn owns(&self, owner_id: &str) -> bool {
        self.user_id.as_deref() == Some(owner_id)
    }
}
