//! Galaxy masthead and invocation glue
//!
//! Usage:
//! ```bash
//! # Serve a page with the masthead embedded
//! galaxy-masthead --config galaxy.yml serve
//!
//! # Print the masthead fragment for a page render
//! galaxy-masthead --config galaxy.yml render --active-view analysis
//!
//! # List the 150 most recent workflow invocations of a user
//! GALAXY_URL=https://usegalaxy.org/ galaxy-masthead invocations --user-id f2db41e1fa331b3e
//! ```

mod settings;

use anyhow::Context;
use clap::{Parser, Subcommand};
use galaxy_core::Session;
use galaxy_egress::InvocationsClient;
use galaxy_ui::{TransContext, UiServer, render_masthead};
use settings::ServerSettings;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "galaxy-masthead")]
#[command(about = "Galaxy masthead bootstrapping and invocation listing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to settings file (YAML or TOML)
    #[arg(short, long, value_name = "FILE", env = "GALAXY_SETTINGS", global = true)]
    config: Option<String>,

    /// Galaxy application config file, replaces the `galaxy` section of settings
    #[arg(long, value_name = "FILE", env = "GALAXY_APP_CONFIG", global = true)]
    app_config: Option<String>,

    /// Override an application setting, e.g. `--set brand=MyLab`
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    overrides: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve a page that embeds the masthead (default if no command specified)
    Serve,
    /// Print the masthead fragment to stdout
    Render {
        /// Navigation item to highlight
        #[arg(long)]
        active_view: Option<String>,

        /// Render as an administrator
        #[arg(long)]
        admin: bool,

        /// Current-user summary as JSON
        #[arg(long, value_name = "JSON")]
        user_json: Option<String>,
    },
    /// Fetch the most recent workflow invocations for a user
    Invocations {
        #[arg(long, env = "GALAXY_USER_ID")]
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = ServerSettings::load(cli.config.as_deref(), cli.app_config.as_deref())?;

    // Logging first so warnings from merging the environment are reported
    init_logging(&settings.initial_log_level())?;

    if let Some(path) = &cli.config {
        debug!("Loaded settings from {}", path);
    }

    settings.merge_env();

    for key in settings.apply_overrides(&cli.overrides)? {
        warn!("Ignoring unknown setting '{}'", key);
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(settings).await,
        Commands::Render {
            active_view,
            admin,
            user_json,
        } => {
            let html = render_fragment(&settings, active_view.as_deref(), admin, user_json.as_deref())?;
            println!("{}", html);
            Ok(())
        }
        Commands::Invocations { user_id } => invocations(&settings, user_id).await,
    }
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::new(level);
    // stdout carries command output
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn serve(settings: ServerSettings) -> anyhow::Result<()> {
    let trans = TransContext::anonymous(settings.root_path()?);
    info!("Serving masthead for {}", settings.base_url);

    UiServer::new(settings.ui, settings.galaxy, trans).serve().await
}

/// Parse `--user-json`, defaulting to an empty summary
fn parse_user_json(raw: Option<&str>) -> anyhow::Result<serde_json::Value> {
    match raw {
        Some(raw) => serde_json::from_str(raw).context("--user-json is not valid JSON"),
        None => Ok(serde_json::Value::Object(Default::default())),
    }
}

fn render_fragment(
    settings: &ServerSettings,
    active_view: Option<&str>,
    admin: bool,
    user_json: Option<&str>,
) -> anyhow::Result<String> {
    let trans = TransContext::new(admin, parse_user_json(user_json)?, settings.root_path()?);
    Ok(render_masthead(active_view, &settings.galaxy, Some(&trans))?)
}

async fn invocations(settings: &ServerSettings, user_id: String) -> anyhow::Result<()> {
    let client = InvocationsClient::new(&settings.http_client_config())?;
    let session = Session::new(user_id, settings.base_url.clone());

    let response = client.recent_invocations(&session).await?;
    info!("Invocations request returned {}", response.status());

    println!("{}", response.text().await?);
    Ok(())
}
