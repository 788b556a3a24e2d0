mod commands;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use pokemontcg_catalog::{
    config, render, CatalogClient, CatalogController, ClauseJoin, Header, TypeFilter,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::Command;

#[derive(Debug, Parser)]
#[command(about = "Browse the Pokémon TCG card catalog from the terminal")]
struct Args {
    /// API root URL.
    #[arg(long, env = "POKEMONTCG_API_BASE", default_value = config::API_BASE)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Separate name and type clauses with a space in the `q` expression.
    #[arg(long)]
    spaced_query: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = CatalogClient::builder()
        .base_url(args.base_url)
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    info!(%client, "catalog client ready");

    let join = if args.spaced_query {
        ClauseJoin::Space
    } else {
        ClauseJoin::Concatenate
    };
    let mut catalog = CatalogController::new(client, join);
    let header = Header::default();

    catalog.start();
    catalog.settle().await?;
    print!("{}", render::screen(&header, catalog.view()));
    println!("{}", commands::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match commands::parse(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if let Err(e) = apply(&mut catalog, command) {
            println!("{}", e);
            continue;
        }
        if let Err(e) = catalog.settle().await {
            error!(error = %e, "fetch task failed");
        }
        print!("{}", render::screen(&header, catalog.view()));
    }
    Ok(())
}

fn apply(catalog: &mut CatalogController<CatalogClient>, command: Command) -> Result<()> {
    let pagination = catalog.view().pagination();
    match command {
        Command::Search(text) => {
            catalog.set_search_input(text);
            let suggestions = catalog.view().suggestions();
            if suggestions.is_empty() {
                println!("no suggestions on this page");
            } else {
                println!("suggestions: {}", suggestions.join(", "));
            }
        }
        Command::Pick(name) => catalog.commit_search(Some(name))?,
        Command::Clear => catalog.commit_search(None)?,
        Command::Type(t) => {
            let filter = t.map(TypeFilter::Only).unwrap_or(TypeFilter::All);
            if let TypeFilter::Only(name) = &filter {
                if !catalog.view().types().contains(name) {
                    anyhow::bail!("unknown type '{}'; known: {}", name, catalog.view().types().join(", "));
                }
            }
            catalog.select_type(filter);
        }
        Command::Page(n) => catalog.change_page(pagination.clamp(n)),
        Command::Next => {
            if let Some(p) = pagination.next() {
                catalog.change_page(p);
            }
        }
        Command::Prev => {
            if let Some(p) = pagination.prev() {
                catalog.change_page(p);
            }
        }
        Command::Open(id) => {
            catalog.open_detail(&id)?;
        }
        Command::Close => catalog.close_detail(),
        Command::Refresh => catalog.refresh(),
        Command::Help => println!("{}", commands::HELP),
        Command::Quit => {}
    }
    Ok(())
}
