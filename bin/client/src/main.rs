//! Files API client

mod config;
mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use transfer::{TransferClient, UploadMetadata};

#[derive(Parser)]
#[command(name = "file-transfer")]
#[command(about = "Upload files to and download files from the files API")]
struct Cli {
    /// Base URL of the files API (overrides --config and FILE_API_URL)
    #[arg(short, long, global = true)]
    url: Option<String>,
    /// JSON settings file with `url`, `download_path` and `timeout_secs`
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file to {url}/api/files
    Upload {
        /// File to upload
        path: PathBuf,
        /// Value of the userId field
        #[arg(long)]
        user_id: Option<String>,
        /// Value of the comment field
        #[arg(long)]
        comment: Option<String>,
        /// Value of the isPrimary field
        #[arg(long)]
        primary: Option<bool>,
    },
    /// Download a file and save it locally
    Download {
        /// URL to fetch
        #[arg(value_name = "URL")]
        source: String,
        /// Output path (default: download_path setting, TempFile.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let cli = Cli::parse();
    let settings = config::resolve_settings(cli.url.as_deref(), cli.config.as_deref())?;
    info!(url = %settings.url, "Using files API");
    let client = TransferClient::new(settings).context("Failed to create HTTP client")?;

    match cli.command {
        Commands::Upload {
            path,
            user_id,
            comment,
            primary,
        } => {
            let defaults = UploadMetadata::default();
            let metadata = UploadMetadata::new(
                user_id.unwrap_or(defaults.user_id),
                comment.unwrap_or(defaults.comment),
                primary.unwrap_or(defaults.is_primary),
            );
            let response = client
                .upload_with(&path, &metadata)
                .await
                .with_context(|| format!("Upload failed for {:?}", path))?;
            println!("{}", response);
        }
        Commands::Download { source, output } => {
            let saved = match output {
                Some(output) => client.download_to(&source, output).await,
                None => client.download(&source).await,
            }
            .with_context(|| format!("Download failed for {}", source))?;
            println!("File saved to: {}", saved.display());
        }
    }

    Ok(())
}
