//! Interactive post browser. Plays the role of the listing page: it
//! fetches the full collection once, derives the filtered list from
//! the live search query and drives the `PostListView` over it.

use clap::Parser;
use client::{ApiClient, ClientError};
use postboard_core::config::PostboardConfig;
use postboard_core::post::Post;
use postboard_core::search;
use postboard_core::view::{Action, ClickTarget, PostListView, RenderedList};
use postboard_core::Viewer;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about=None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    /// Path to config file; defaults to ~/.postboard/postboard.toml
    config: Option<PathBuf>,

    #[arg(short, long)]
    /// Base URL of the forum API server, overrides the config file
    server_url: Option<String>,
}

struct Browser {
    api: ApiClient,
    view: PostListView,
    viewer: Viewer,
    posts: Vec<Post>,
    filtered: Vec<Post>,
    query: String,
    loading: bool,
}

impl Browser {
    fn new(api: ApiClient) -> Self {
        Self {
            api,
            view: PostListView::new(),
            viewer: Viewer::anonymous(),
            posts: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            loading: true,
        }
    }

    /// Full reload: refetch the collection and the session, drop the
    /// query and page state.
    async fn reload(&mut self) -> Result<(), ClientError> {
        self.loading = true;
        self.draw_frame().await;

        self.viewer = self.api.current_viewer().await?;
        self.posts = self.api.fetch_posts().await?;
        self.query.clear();
        self.filtered = self.posts.clone();
        self.view = PostListView::new();
        self.loading = false;
        info!(count = self.posts.len(), "fetched post collection");
        Ok(())
    }

    /// Re-derive the filtered list from the current query. The page
    /// index is clamped afterwards so a shrinking result set cannot
    /// strand the view past the last page.
    fn apply_search(&mut self, query: &str) {
        self.query = query.to_owned();
        self.filtered = search::filter_posts(&self.posts, &self.query);
        self.view.page_mut().clamp(self.filtered.len());
    }

    async fn draw_frame(&self) {
        match self.view.render(Some(&self.filtered), self.loading, &self.viewer) {
            RenderedList::Loading => println!("Loading posts..."),
            RenderedList::Empty { message, home_route } => {
                println!("{message}");
                println!("(back to {home_route}: press 'r' to reload, '/' to clear the search)");
            }
            RenderedList::Page {
                cards,
                controls,
                current_page,
                total_pages,
            } => {
                if !self.query.is_empty() {
                    println!("Search: \"{}\"", self.query);
                }
                for (idx, card) in cards.iter().enumerate() {
                    println!("\n#{}", idx + 1);
                    println!("{card}");

                    // The like/comment widgets are their own
                    // components; they fetch per post id and failures
                    // stay inside the widget.
                    let likes = self.api.like_count(&card.likes_widget.post_id).await;
                    let comments = self
                        .api
                        .comment_count(&card.comments_widget.post_id)
                        .await;
                    println!(
                        "likes: {}  comments: {}",
                        likes.unwrap_or(0),
                        comments.unwrap_or(0)
                    );
                }
                println!();
                if let Some(controls) = controls {
                    println!("Page {current_page}/{total_pages}:  {controls}");
                }
            }
        }
    }

    /// Confirmation-gated delete of the card numbered `n` on screen.
    async fn delete_card(&mut self, n: usize) {
        let cards = match self.view.render(Some(&self.filtered), false, &self.viewer) {
            RenderedList::Page { cards, .. } => cards,
            _ => {
                println!("Nothing to delete.");
                return;
            }
        };
        let Some(card) = cards.get(n.wrapping_sub(1)) else {
            println!("No card #{n} on this page.");
            return;
        };

        let post_id = match card.click(ClickTarget::Delete) {
            Some(Action::RequestDelete(id)) => id,
            _ => {
                println!("You can only delete your own posts.");
                return;
            }
        };

        if !confirm("Are you sure you want to delete this post?") {
            return;
        }

        match self.api.delete_post(&post_id).await {
            Ok(()) => {
                info!(%post_id, "post deleted");
                // Blunt invalidation: refetch everything rather than
                // splice the deleted post out locally.
                if let Err(e) = self.reload().await {
                    error!("Failed to reload after delete: {e}");
                }
            }
            Err(e) => {
                // Logged, otherwise swallowed; nothing visible changes.
                error!(%post_id, "Error deleting post: {e}");
            }
        }
    }

    /// Navigate to the detail view of the card numbered `n`.
    async fn open_card(&self, n: usize) {
        let cards = match self.view.render(Some(&self.filtered), false, &self.viewer) {
            RenderedList::Page { cards, .. } => cards,
            _ => {
                println!("Nothing to open.");
                return;
            }
        };
        let Some(card) = cards.get(n.wrapping_sub(1)) else {
            println!("No card #{n} on this page.");
            return;
        };

        if let Some(Action::Navigate(route)) = card.click(ClickTarget::Title) {
            println!("-> {route}");
        }
        match self.api.fetch_post(&card.post_id).await {
            Ok(post) => println!("{post}"),
            Err(e) => error!("Error fetching post: {e}"),
        }
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush().expect("Unable to flush stdout");
    let mut buf = String::new();
    if std::io::stdin().read_line(&mut buf).is_err() {
        return false;
    }
    matches!(buf.trim(), "y" | "Y" | "yes")
}

fn read_command() -> Option<String> {
    print!("postboard> ");
    std::io::stdout().flush().expect("Unable to flush stdout");
    let mut buf = String::new();
    std::io::stdin().read_line(&mut buf).ok()?;
    Some(buf.trim().to_owned())
}

fn print_help() {
    println!("Commands:");
    println!("  n            next page");
    println!("  p            previous page");
    println!("  g <N>        go to page N");
    println!("  /<text>      search title/content; bare / clears it");
    println!("  o <N>        open card N (detail view)");
    println!("  d <N>        delete card N (owner only, asks first)");
    println!("  r            reload everything from the server");
    println!("  q            quit");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = PostboardConfig::load(cli.config)?;
    if let Some(server_url) = cli.server_url {
        config.server_url = server_url;
    }

    let api = ApiClient::new(&config)?;
    info!(server = %api.base_url(), "connecting");

    let mut browser = Browser::new(api);
    if let Err(e) = browser.reload().await {
        error!("Failed to fetch posts: {e}");
        return Err(e.into());
    }

    browser.draw_frame().await;
    print_help();

    loop {
        let Some(line) = read_command() else { break };
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line.as_str(), ""),
        };

        match cmd {
            "" => {}
            "q" | "quit" => break,
            "h" | "help" => {
                print_help();
                continue;
            }
            "n" | "next" => browser.view.page_mut().next(browser.filtered.len()),
            "p" | "prev" => browser.view.page_mut().prev(),
            "g" | "goto" => match arg.parse::<usize>() {
                Ok(n) => {
                    let len = browser.filtered.len();
                    browser.view.page_mut().set_page(n, len);
                }
                Err(_) => {
                    println!("Usage: g <page>");
                    continue;
                }
            },
            "o" | "open" => match arg.parse::<usize>() {
                Ok(n) => {
                    browser.open_card(n).await;
                    continue;
                }
                Err(_) => {
                    println!("Usage: o <card>");
                    continue;
                }
            },
            "d" | "delete" => match arg.parse::<usize>() {
                Ok(n) => browser.delete_card(n).await,
                Err(_) => {
                    println!("Usage: d <card>");
                    continue;
                }
            },
            "r" | "reload" => {
                if let Err(e) = browser.reload().await {
                    error!("Failed to fetch posts: {e}");
                }
            }
            query if query.starts_with('/') => {
                let q = line.trim_start_matches('/').trim().to_owned();
                browser.apply_search(&q);
            }
            other => {
                println!("Unknown command '{other}'; 'h' for help");
                continue;
            }
        }

        browser.draw_frame().await;
    }

    Ok(())
}
