use anyhow::Context;
use clap::Parser;
use shop_cli::{commands, AppState, Args, Command, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "shop=debug,shop_cli=debug,shop_catalog=debug,shop_cart=debug"
    } else {
        "shop=info,shop_cli=info,shop_catalog=info,shop_cart=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load(&args.config_dir).with_context(|| {
        format!("Failed to load config from {}", args.config_dir.display())
    })?;
    let mut state = AppState::from_config(&config)?;

    let command = args.command.unwrap_or(Command::Demo);
    tracing::debug!(?command, "Running command");

    let output = commands::run(&command, &mut state, args.json)?;
    print!("{output}");
    Ok(())
}
