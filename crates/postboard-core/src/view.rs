//! The post listing view: the one stateful component of the UI.
//!
//! Rendering is a pure derivation from `(posts, loading, viewer)` plus
//! the view's own page index, returned as a [`RenderedList`] value so
//! any front end (terminal, tests) can draw it. Interactions come back
//! in through [`PostCard::click`], which also models the
//! stop-propagation behavior of the nested like/comment widgets.

use crate::page::{PageControls, PageState};
use crate::post::Post;
use crate::Viewer;
use std::fmt::{Display, Formatter};

pub const EMPTY_MESSAGE: &str = "No posts found. Be the first to post!";
pub const LISTING_ROOT: &str = "/";

pub fn detail_route(post_id: &str) -> String {
    format!("/posts/{post_id}")
}

/// The post listing component. Holds nothing but its page state; the
/// post list, loading flag and session context are inputs per render.
#[derive(Debug, Default)]
pub struct PostListView {
    page: PageState,
}

impl PostListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    /// Derive what the current frame of the list looks like.
    pub fn render(
        &self,
        posts: Option<&[Post]>,
        loading: bool,
        viewer: &Viewer,
    ) -> RenderedList {
        if loading {
            return RenderedList::Loading;
        }

        let posts = match posts {
            Some(posts) if !posts.is_empty() => posts,
            _ => {
                return RenderedList::Empty {
                    message: EMPTY_MESSAGE,
                    home_route: LISTING_ROOT,
                }
            }
        };

        let total_pages = self.page.total_pages(posts.len());
        let cards = self
            .page
            .slice(posts)
            .iter()
            .map(|post| PostCard::derive(post, viewer))
            .collect();

        RenderedList::Page {
            cards,
            controls: self.page.controls(posts.len()),
            current_page: self.page.current_page(),
            total_pages,
        }
    }
}

/// One rendered frame of the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedList {
    /// The parent is still fetching; nothing else is computed.
    Loading,
    /// No posts to show. Terminal state with a link back to the root.
    Empty {
        message: &'static str,
        home_route: &'static str,
    },
    /// The visible slice plus navigation controls.
    Page {
        cards: Vec<PostCard>,
        controls: Option<PageControls>,
        current_page: usize,
        total_pages: usize,
    },
}

/// A per-post summary card with everything pre-derived: the formatted
/// timestamp, the ownership-gated delete affordance and the two
/// widget slots keyed by post id.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub post_id: String,
    pub title: String,
    pub posted_on: String,
    pub content: String,
    pub can_delete: bool,
    pub detail_route: String,
    pub likes_widget: WidgetSlot,
    pub comments_widget: WidgetSlot,
}

impl PostCard {
    fn derive(post: &Post, viewer: &Viewer) -> Self {
        PostCard {
            post_id: post.id().to_owned(),
            title: post.title.clone(),
            posted_on: post.posted_on(),
            content: post.content.clone(),
            can_delete: post.is_owned_by(viewer),
            detail_route: detail_route(post.id()),
            likes_widget: WidgetSlot {
                kind: WidgetKind::Likes,
                post_id: post.id().to_owned(),
            },
            comments_widget: WidgetSlot {
                kind: WidgetKind::Comments,
                post_id: post.id().to_owned(),
            },
        }
    }

    /// Resolve an interaction with the card to an action. The nested
    /// widgets stop propagation, so clicks on them never bubble up to
    /// the card navigation; delete never navigates either.
    pub fn click(&self, target: ClickTarget) -> Option<Action> {
        match target {
            ClickTarget::Card | ClickTarget::Title => {
                Some(Action::Navigate(self.detail_route.clone()))
            }
            ClickTarget::Delete if self.can_delete => {
                Some(Action::RequestDelete(self.post_id.clone()))
            }
            ClickTarget::Delete => None,
            ClickTarget::Likes | ClickTarget::Comments => None,
        }
    }
}

/// Where inside a card an activation landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickTarget {
    Card,
    Title,
    Delete,
    Likes,
    Comments,
}

/// What the parent should do in response to a card interaction.
/// Deletion is only *requested* here: the parent owns the confirmation
/// prompt, the HTTP call and the reload policy.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(String),
    RequestDelete(String),
}

/// Embedded external widget slot; the view passes only the post id
/// and never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSlot {
    pub kind: WidgetKind,
    pub post_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetKind {
    Likes,
    Comments,
}

impl Display for PostCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Posted on {}", self.posted_on)?;
        if self.can_delete {
            writeln!(f, "[you own this post; it can be deleted]")?;
        }
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn posts(n: usize) -> Vec<Post> {
        (1..=n)
            .map(|i| {
                Post::new(
                    format!("post-{i}"),
                    format!("Title {i}"),
                    format!("Content {i}"),
                    if i % 2 == 0 { "user-even" } else { "user-odd" },
                    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
                )
            })
            .collect()
    }

    fn page_of(rendered: RenderedList) -> (Vec<PostCard>, Option<PageControls>) {
        match rendered {
            RenderedList::Page { cards, controls, .. } => (cards, controls),
            other => panic!("expected a page, got {other:?}"),
        }
    }

    #[test]
    fn loading_suspends_everything_else() {
        let view = PostListView::new();
        let posts = posts(12);
        let rendered = view.render(Some(&posts), true, &Viewer::anonymous());
        assert_eq!(rendered, RenderedList::Loading);
    }

    #[test]
    fn absent_and_empty_lists_render_the_empty_state() {
        let view = PostListView::new();
        let no_posts: Vec<Post> = Vec::new();
        for input in [None, Some(no_posts.as_slice())] {
            match view.render(input, false, &Viewer::anonymous()) {
                RenderedList::Empty { message, home_route } => {
                    assert_eq!(message, EMPTY_MESSAGE);
                    assert_eq!(home_route, LISTING_ROOT);
                }
                other => panic!("expected the empty state, got {other:?}"),
            }
        }
    }

    #[test]
    fn twelve_posts_render_two_pages() {
        let all = posts(12);
        let mut view = PostListView::new();

        let (cards, controls) = page_of(view.render(Some(&all), false, &Viewer::anonymous()));
        assert_eq!(cards.len(), 10);
        assert_eq!(cards[0].title, "Title 1");
        assert_eq!(cards[9].title, "Title 10");
        let controls = controls.unwrap();
        assert!(!controls.show_prev);
        assert!(controls.show_next);

        view.page_mut().next(all.len());
        let (cards, controls) = page_of(view.render(Some(&all), false, &Viewer::anonymous()));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Title 11");
        assert_eq!(cards[1].title, "Title 12");
        let controls = controls.unwrap();
        assert!(controls.show_prev);
        assert!(!controls.show_next);
    }

    #[test]
    fn one_page_means_no_controls() {
        let all = posts(10);
        let view = PostListView::new();
        let (cards, controls) = page_of(view.render(Some(&all), false, &Viewer::anonymous()));
        assert_eq!(cards.len(), 10);
        assert!(controls.is_none());
    }

    #[test]
    fn rendering_is_idempotent() {
        let all = posts(23);
        let mut view = PostListView::new();
        view.page_mut().set_page(2, all.len());
        let viewer = Viewer::with_id("user-even");
        let first = view.render(Some(&all), false, &viewer);
        let second = view.render(Some(&all), false, &viewer);
        assert_eq!(first, second);
    }

    #[test]
    fn delete_is_gated_on_ownership() {
        let all = posts(4);
        let view = PostListView::new();

        let (cards, _) = page_of(view.render(Some(&all), false, &Viewer::with_id("user-even")));
        let deletable: Vec<&str> = cards
            .iter()
            .filter(|c| c.can_delete)
            .map(|c| c.post_id.as_str())
            .collect();
        assert_eq!(deletable, vec!["post-2", "post-4"]);

        let (cards, _) = page_of(view.render(Some(&all), false, &Viewer::anonymous()));
        assert!(cards.iter().all(|c| !c.can_delete));
    }

    #[test]
    fn widget_clicks_do_not_navigate() {
        let all = posts(1);
        let view = PostListView::new();
        let (cards, _) = page_of(view.render(Some(&all), false, &Viewer::anonymous()));
        let card = &cards[0];

        assert_eq!(card.click(ClickTarget::Likes), None);
        assert_eq!(card.click(ClickTarget::Comments), None);
        assert_eq!(
            card.click(ClickTarget::Card),
            Some(Action::Navigate("/posts/post-1".into()))
        );
        assert_eq!(
            card.click(ClickTarget::Title),
            Some(Action::Navigate("/posts/post-1".into()))
        );
    }

    #[test]
    fn delete_clicks_request_deletion_without_navigating() {
        let all = posts(2);
        let view = PostListView::new();
        let (cards, _) = page_of(view.render(Some(&all), false, &Viewer::with_id("user-even")));

        // post-1 belongs to user-odd; the affordance is absent so the
        // click resolves to nothing.
        assert_eq!(cards[0].click(ClickTarget::Delete), None);
        assert_eq!(
            cards[1].click(ClickTarget::Delete),
            Some(Action::RequestDelete("post-2".into()))
        );
    }

    #[test]
    fn widget_slots_are_keyed_by_post_id() {
        let all = posts(1);
        let view = PostListView::new();
        let (cards, _) = page_of(view.render(Some(&all), false, &Viewer::anonymous()));
        assert_eq!(cards[0].likes_widget.post_id, "post-1");
        assert_eq!(cards[0].likes_widget.kind, WidgetKind::Likes);
        assert_eq!(cards[0].comments_widget.post_id, "post-1");
        assert_eq!(cards[0].comments_widget.kind, WidgetKind::Comments);
    }
}
