//! parentdesk - Parent portal navigation shell

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "parentdesk",
    version,
    about = "Parent portal navigation shell",
    long_about = "Serves the parent portal sidebar and inspects its navigation menu.\n\
                  \n\
                  Examples:\n\
                    parentdesk serve                         # Serve on 127.0.0.1:3333\n\
                    parentdesk serve --port 8080             # Custom port\n\
                    parentdesk nav --current /parent/bookings\n\
                    parentdesk nav --json                    # Menu as JSON\n\
                  \n\
                  Environment Variables:\n\
                    PARENTDESK_HOST                          # Bind address for serve\n\
                    PARENTDESK_PORT                          # Port for serve\n\
                    RUST_LOG                                 # Overrides --log-level"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info", env = "PARENTDESK_LOG_LEVEL")]
    log_level: String,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server
    Serve {
        /// Address to bind
        #[arg(long, env = "PARENTDESK_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        host: IpAddr,
        /// Port for web server
        #[arg(long, env = "PARENTDESK_PORT", default_value = "3333")]
        port: u16,
    },
    /// Print the navigation menu and exit
    Nav {
        /// Location to resolve the active link against
        #[arg(long, short = 'c')]
        current: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = format!("parentdesk={0},parentdesk_web={0}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.mode {
        Mode::Serve { host, port } => {
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting parentdesk");
            parentdesk_web::run(SocketAddr::new(host, port)).await?;
        }
        Mode::Nav { current, json } => {
            let menu = parentdesk_types::NavMenu::parent();
            println!("{}", cli::format_menu(&menu, current.as_deref(), json)?);
        }
    }

    Ok(())
}
