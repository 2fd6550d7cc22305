//! One-shot CLI for the forum API: list a page of posts, show one,
//! delete one. Scripting-friendly counterpart of the interactive
//! browser; `--json` prints raw payloads instead of cards.

use clap::{ArgAction, Parser, Subcommand};
use client::ApiClient;
use postboard_core::config::PostboardConfig;
use postboard_core::search;
use postboard_core::view::{PostListView, RenderedList};
use postboard_core::{PostboardError, PostboardResult, Viewer};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about=None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    /// Path to config file; defaults to ~/.postboard/postboard.toml
    config: Option<PathBuf>,

    #[arg(short, long)]
    /// Base URL of the forum API server. For ex, http://localhost:3000
    server_url: Option<String>,

    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Select if the output should be json
    json: bool,

    #[command(subcommand)]
    command: PostboardCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum PostboardCommand {
    /// List one page of posts, optionally filtered by a search query
    List {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show a single post
    Show { id: String },

    /// Delete a post you own
    Delete {
        id: String,
        #[arg(short, long, action = ArgAction::SetTrue)]
        /// Skip the confirmation prompt
        yes: bool,
    },

    /// Print the current session user id, if any
    Whoami {},
}

async fn list(api: &ApiClient, page: usize, query: Option<String>, json: bool) -> PostboardResult<()> {
    let viewer = api.current_viewer().await?;
    let posts = api.fetch_posts().await?;
    let filtered = match query.as_deref() {
        Some(q) => search::filter_posts(&posts, q),
        None => posts,
    };

    let mut view = PostListView::new();
    let total_pages = view.page().total_pages(filtered.len());
    if !filtered.is_empty() && (page < 1 || page > total_pages) {
        return Err(PostboardError::PageOutOfRange {
            requested: page,
            total_pages,
        }
        .into());
    }
    view.page_mut().set_page(page, filtered.len());

    if json {
        let rendered = view.page().slice(&filtered);
        println!("{}", serde_json::to_string_pretty(rendered)?);
        return Ok(());
    }

    match view.render(Some(&filtered), false, &viewer) {
        RenderedList::Empty { message, .. } => println!("{message}"),
        RenderedList::Page {
            cards,
            controls,
            current_page,
            total_pages,
        } => {
            for card in cards.iter() {
                println!("{}  {}", card.post_id, card.title);
                println!("  Posted on {}", card.posted_on);
            }
            if let Some(controls) = controls {
                println!("\nPage {current_page}/{total_pages}:  {controls}");
            }
        }
        RenderedList::Loading => unreachable!("one-shot listing never renders mid-fetch"),
    }
    Ok(())
}

async fn show(api: &ApiClient, id: &str, json: bool) -> PostboardResult<()> {
    let post = api.fetch_post(id).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("{post}");
        let likes = api.like_count(id).await?;
        let comments = api.comment_count(id).await?;
        println!("likes: {likes}  comments: {comments}");
    }
    Ok(())
}

async fn delete(api: &ApiClient, id: &str, yes: bool) -> PostboardResult<()> {
    if !yes {
        print!("Are you sure you want to delete this post? [y/N] ");
        std::io::stdout().flush()?;
        let mut buf = String::new();
        std::io::stdin().read_line(&mut buf)?;
        if !matches!(buf.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }
    api.delete_post(id).await?;
    println!("Deleted {id}");
    Ok(())
}

async fn whoami(api: &ApiClient) -> PostboardResult<()> {
    match api.current_viewer().await? {
        Viewer { user_id: Some(id) } => println!("{id}"),
        Viewer { user_id: None } => println!("not signed in"),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = PostboardConfig::load(cli.config).expect("Unable to load config");
    if let Some(server_url) = cli.server_url {
        config.server_url = server_url;
    }
    let api = ApiClient::new(&config).expect("Unable to build API client");

    let result = match cli.command {
        PostboardCommand::List { page, query } => list(&api, page, query, cli.json).await,
        PostboardCommand::Show { id } => show(&api, &id, cli.json).await,
        PostboardCommand::Delete { id, yes } => delete(&api, &id, yes).await,
        PostboardCommand::Whoami {} => whoami(&api).await,
    };

    if let Err(e) = result {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
