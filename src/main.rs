use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::cli::SubmitArgs;
use folio_contact::SubmissionState;

/// folio - portfolio contact client
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Send a message through the portfolio contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a contact message
    Submit(SubmitArgs),
    /// Print the contact endpoint in use
    Endpoint,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Submit(args) => {
            let state = folio::cli::submit(config, args, &mut std::io::stdout()).await?;
            if state != SubmissionState::Succeeded {
                std::process::exit(1);
            }
        }
        Commands::Endpoint => println!("{}", config.endpoint().map_err(|e| anyhow::anyhow!(e))?),
    }

    Ok(())
}
