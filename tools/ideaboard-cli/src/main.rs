//! Terminal front end for the idea board.
//!
//! Drives the same state objects as the web app: `list` mounts a feed,
//! `post` goes through the compose form and refreshes the feed on success,
//! `like` counts locally then sends the like, and `create` runs the
//! confirmation dialog.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ideaboard_client::{
    AppShell, ClientConfig, CompositionView, ConfirmationDialog, DismissReason, FeedView,
    IdeaStoreClient, ScrollFlag,
};
use ideaboard_common::{Idea, IdeaId, DEFAULT_USERNAME};

#[derive(Parser)]
#[command(name = "ideaboard", about = "Read, post and like ideas on the idea board")]
struct Cli {
    /// Base URL of the idea store (e.g. "http://localhost:8000").
    #[arg(long, env = "IDEA_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the feed in store order.
    List,
    /// Post a new idea, then show the refreshed feed.
    Post {
        /// The idea itself (up to 100 characters; longer input is cut).
        content: String,
        #[arg(long, default_value = DEFAULT_USERNAME)]
        username: String,
        /// Optional longer description (up to 2000 characters).
        #[arg(long)]
        description: Option<String>,
    },
    /// Like an idea by id.
    Like { id: u64 },
    /// Ask to build an idea.
    Create {
        id: u64,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ideaboard_client=info,ideaboard_cli=info")),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let store = IdeaStoreClient::new(ClientConfig::new(cli.api_url));
    tracing::debug!(base_url = ?store.base_url(), "Using idea store");

    match cli.command {
        Command::List => {
            let mut feed = FeedView::new();
            feed.refresh(&store).await;
            show_feed(&feed)
        }
        Command::Post {
            content,
            username,
            description,
        } => {
            let mut shell = AppShell::new();
            let mut compose = CompositionView::new();
            compose.set_username(&username);
            compose.set_content(&content);
            if let Some(description) = description {
                compose.toggle_description();
                compose.set_description(&description);
            }

            if !compose.submit(&store, || shell.notify_post_success()).await {
                bail!(compose.error().unwrap_or("投稿できませんでした。").to_string());
            }
            println!("投稿しました。");

            let mut feed = FeedView::new();
            feed.sync(shell.refresh_signal(), &store).await;
            show_feed(&feed)
        }
        Command::Like { id } => {
            let id = IdeaId(id);
            let mut feed = FeedView::new();
            feed.refresh(&store).await;
            if let Some(err) = feed.error() {
                bail!(err.to_string());
            }

            let (task, _ticket) = feed
                .like(id, &store)
                .ok_or_else(|| anyhow!("idea {id} is not in the feed"))?;
            task.run().await;

            if let Some(idea) = feed.position_of(id).map(|pos| &feed.ideas()[pos]) {
                println!("{} likes", idea.likes);
            }
            Ok(())
        }
        Command::Create { id, yes } => {
            let mut dialog = ConfirmationDialog::new(ScrollFlag::new());
            dialog.open(Some(IdeaId(id)));

            if !yes && !ask("このアイデアを作成しますか？ [y/N] ")? {
                dialog.dismiss(DismissReason::Cancel);
                return Ok(());
            }
            dialog.confirm(&store, || println!("作成リクエストを送信しました。")).await;
            Ok(())
        }
    }
}

fn ask(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "はい"))
}

fn show_feed(feed: &FeedView) -> Result<()> {
    println!("みんなのアイデア");
    for idea in feed.ideas() {
        print_idea(idea);
    }
    match feed.error() {
        Some(err) => bail!(err.to_string()),
        None => Ok(()),
    }
}

fn print_idea(idea: &Idea) {
    println!();
    println!(
        "[{}] ({}) {}  {}",
        idea.idea_id,
        idea.avatar_initial(),
        idea.username,
        idea.display_timestamp()
    );
    for line in idea.explanations() {
        println!("    {line}");
    }
    if !idea.description.is_empty() {
        println!("    -- {}", idea.description);
    }
    println!("    {} likes", idea.likes);
}
