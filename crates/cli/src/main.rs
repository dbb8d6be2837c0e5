use clap::{Parser, Subcommand};
use sidestep_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "sidestep")]
#[command(version)]
#[command(about = "Sidestep - reach DNS-blocked sites through DoH-resolved addresses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Record file path
    #[arg(short = 's', long, value_name = "FILE")]
    store: Option<String>,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(short = 'r', long, value_name = "URL")]
    resolver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Keep records in memory only
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the record table and keep it swept until Ctrl-C
    Run,
    /// Look a domain up and store its address
    Resolve { domain: String },
    /// Show stored records
    List {
        #[arg(long)]
        json: bool,
    },
    /// Re-enable automatic unblocking for a domain
    Enable { domain: String },
    /// Stop automatically unblocking a domain
    Disable { domain: String },
    /// Run one expiry sweep
    Sweep,
    /// Show the directive emitted for a request to URL
    Rewrite {
        url: String,
        /// Treat the request as a top-level navigation
        #[arg(long)]
        main_frame: bool,
    },
    /// Show the unblock affordance state for a displayed URL
    State { url: String },
    /// Unblock a domain URL, or re-block an IP-addressed one
    Toggle { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        store_path: cli.store.clone(),
        resolver_endpoint: cli.resolver.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Sidestep v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config, cli.ephemeral)?;
    let use_cases = di::UseCases::new(&services);

    match cli.command {
        Command::Run => commands::run(&config, &services).await?,
        Command::Resolve { domain } => commands::resolve(&services, &domain).await?,
        Command::List { json } => commands::list(&use_cases, json)?,
        Command::Enable { domain } => commands::set_enabled(&use_cases, &domain, true)?,
        Command::Disable { domain } => commands::set_enabled(&use_cases, &domain, false)?,
        Command::Sweep => commands::sweep(&services).await?,
        Command::Rewrite { url, main_frame } => commands::rewrite(&use_cases, &url, main_frame),
        Command::State { url } => commands::state(&use_cases, &url),
        Command::Toggle { url } => commands::toggle(&use_cases, &url).await?,
    }

    Ok(())
}
