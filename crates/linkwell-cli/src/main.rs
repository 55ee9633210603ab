use anyhow::Result;
use clap::Parser;
use linkwell_cli::cli::{Cli, Commands};
use linkwell_cli::commands;
use linkwell_cli::config::Config;
use linkwell_sqlite::{ArticleStore, SqliteConfig, SqlitePool};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(cli) {
        eprintln!("error: {:#}", error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let db_path = config.resolve_db_path(cli.db.as_deref())?;

    let pool = SqlitePool::new(SqliteConfig::new(db_path))?;
    let store = ArticleStore::new(pool);

    match cli.command {
        Commands::Search { query } => commands::search(&store, &query),
        Commands::Print { url } => commands::print_article(&store, &url),
        Commands::View { url } => commands::view(&store, &url),
        Commands::ViewBacklinks { url } => commands::view_backlinks(&store, &url),
        Commands::ViewTags { url } => commands::view_tags(&store, &url),
        Commands::Create { url, tags } => commands::create(&store, &url, tags),
        Commands::Update { url } => commands::update(&store, &url),
        Commands::Edit { url } => commands::edit(&store, &url),
        Commands::SetTags { url, tags } => commands::set_tags(&store, &url, tags),
        Commands::Delete { url } => commands::delete(&store, &url),
    }
}
