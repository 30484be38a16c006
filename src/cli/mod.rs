use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod caption;
pub mod chat;
pub mod embed;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the web UI and API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8501")]
        port: String,
    },
    /// Start a chat session in the terminal
    Chat {},
    /// Caption an image file
    Caption {
        /// Path to a jpg/jpeg/png image
        #[arg(long)]
        image: String,
    },
    /// Get the embedding vector for a piece of text
    Embed {
        #[arg(long)]
        text: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Chat {}) => {
            chat::run().await?;
        }
        Some(Command::Caption { image }) => {
            caption::run(&image).await?;
        }
        Some(Command::Embed { text }) => {
            embed::run(&text).await?;
        }
        None => {}
    }

    Ok(())
}
