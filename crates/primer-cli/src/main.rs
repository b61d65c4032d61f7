mod config;
mod draft_cmd;
mod serve_cmd;

#[cfg(test)]
mod test_util;

use clap::{Parser, Subcommand};

use config::PrimerConfig;

#[derive(Parser)]
#[command(name = "primer", about = "Homeschool draft-plan service")]
struct Cli {
    /// Completion model (overrides PRIMER_MODEL env var)
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a primer config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Draft a summary from a form file
    Draft {
        /// Path to the form TOML file
        file: String,
        /// Render the offline template even when a credential is configured
        #[arg(long)]
        offline: bool,
    },
    /// Run the draft-plan HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 4180)]
        port: u16,
    },
}

/// Execute the `primer init` command: write config file.
fn cmd_init(model: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        completion: config::CompletionSection {
            model: model.to_string(),
            base_url: config::DEFAULT_BASE_URL.to_string(),
            api_key: None,
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  completion.model = {model}");
    println!("  completion.base_url = {}", config::DEFAULT_BASE_URL);
    println!();
    println!(
        "No API key configured: primer runs offline. Set PRIMER_API_KEY (or \
         completion.api_key in the config file) to enable generated summaries."
    );

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            let model = cli.model.as_deref().unwrap_or(config::DEFAULT_MODEL);
            cmd_init(model, force)?;
        }
        Commands::Draft { file, offline } => {
            let config = PrimerConfig::resolve(cli.model.as_deref())?;
            draft_cmd::run_draft(&config, &file, offline).await?;
        }
        Commands::Serve { bind, port } => {
            let config = PrimerConfig::resolve(cli.model.as_deref())?;
            let service = config.summary_service();
            serve_cmd::run_serve(service, &bind, port).await?;
        }
    }

    Ok(())
}
