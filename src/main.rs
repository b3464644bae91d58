use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use doggodex::api::DogApiClient;
use doggodex::cli::{render_breed_detail, render_home, Cli, Command, Flow, Shell};
use doggodex::config::Config;
use doggodex::detail::{load_breed_detail, parse_breed_id};
use doggodex::logging;
use doggodex::pagination;
use doggodex::state::catalog::browse_total_pages;
use doggodex::state::{SearchInput, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let client = DogApiClient::new(&config.api)?;
    tracing::info!(base_url = %client.base_url(), "Starting doggodex");
    let store = Store::new(client);

    match cli.command() {
        Command::Browse { page } => {
            let total_pages = browse_total_pages();
            let Some(index) = pagination::page_index(i64::from(page), total_pages) else {
                anyhow::bail!("Page {} is out of range (1-{})", page, total_pages);
            };
            store.set_current_page(index);
            store.fetch_page(index).await;
            println!("{}", store.read(render_home));
        }
        Command::Search { query } => {
            store.search(&query.join(" ")).await;
            println!("{}", store.read(render_home));
        }
        Command::Show { id } => {
            let id = parse_breed_id(&id)?;
            let breed = load_breed_detail(store.gateway(), id).await?;
            let detail =
                store.read(|s| render_breed_detail(&breed, &s.collections, &config.api.image_cdn_url));
            println!("{}", detail);
        }
        Command::Shell => run_shell(store, &config).await?,
    }

    Ok(())
}

async fn run_shell(store: Store<DogApiClient>, config: &Config) -> anyhow::Result<()> {
    let search = SearchInput::from_config(store.clone(), &config.search);
    let shell = Shell::new(store, search, config.api.image_cdn_url.clone());

    println!("{}", shell.start().await);
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("doggodex> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match shell.execute_line(&line).await {
            Flow::Continue(output) if output.is_empty() => {}
            Flow::Continue(output) => println!("{}", output),
            Flow::Quit => break,
        }
    }

    Ok(())
}
