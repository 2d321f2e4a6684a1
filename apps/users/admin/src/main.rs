//! Terminal admin client for the users API.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_cli_tracing, install_color_eyre};

mod app;
mod client;
mod form;
mod prompt;
#[cfg(test)]
mod testing;
mod view;

use app::AdminApp;
use client::UsersClient;
use prompt::DialoguerPrompter;

#[derive(Parser)]
#[command(name = "users-admin", version, about = "Manage users through the users API")]
struct Cli {
    /// Base URL of the users resource
    #[arg(
        long,
        env = "USERS_API_URL",
        default_value = "http://localhost:3000/api/users"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the user table
    List,
    /// Create a user; missing fields are prompted for
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user by id
    Delete {
        id: i32,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Menu loop: add, delete, reload, exit (default)
    Interactive,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    dotenvy::dotenv().ok();
    init_cli_tracing("warn");

    let cli = Cli::parse();
    let client = UsersClient::new(cli.api_url)?;
    let mut app = AdminApp::new(client, DialoguerPrompter);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::List => {
            app.reload().await;
        }
        Commands::Add { name, email } => {
            app.add(name, email).await?;
        }
        Commands::Delete { id, yes } => {
            app.delete(id, yes).await?;
        }
        Commands::Interactive => {
            app.run_interactive().await?;
        }
    }

    Ok(())
}
