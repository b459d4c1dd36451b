use clap::{Parser, Subcommand};
use probewire_domain::CliOverrides;
use tracing::{debug, error};

mod bootstrap;
mod commands;
mod di;
mod payload;

#[derive(Parser)]
#[command(name = "probewire")]
#[command(version)]
#[command(about = "Build and parse NTP, DNS and NAPTR discovery probe payloads")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Zone for NTP timestamps: local, utc or an IANA name
    #[arg(long, value_name = "ZONE", global = true)]
    tz: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// NTP client request / response
    Ntp {
        #[command(subcommand)]
        action: commands::NtpAction,
    },

    /// DNS A/AAAA question / first-answer address
    Dns {
        #[command(subcommand)]
        action: commands::DnsAction,
    },

    /// NAPTR discovery question / endpoint selection
    Scb {
        #[command(subcommand)]
        action: commands::ScbAction,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        timezone: cli.tz.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config.clone().or_else(probewire_domain::Config::get_config_path),
        "probewire starting"
    );

    let codecs = di::Codecs::new(&config)?;

    let output = match cli.command {
        Command::Ntp { action } => commands::ntp::run(action, &codecs),
        Command::Dns { action } => commands::dns::run(action),
        Command::Scb { action } => commands::scb::run(action, &codecs),
    }
    .inspect_err(|e| error!(error = %e, "Command failed"))?;

    println!("{}", output);
    Ok(())
}
