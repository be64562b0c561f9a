pub mod entries;
pub mod init;
pub mod login;
pub mod logout;
pub mod sync;
pub mod track;

use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log in to the vault")]
    Login(login::LoginArgs),
    #[command(about = "Log out and forget cached credentials")]
    Logout,
    #[command(about = "Track working time on a set of files", arg_required_else_help = true)]
    Track(track::TrackArgs),
    #[command(about = "Push queued offline entries to the vault")]
    Sync,
    #[command(about = "Display recorded time entries")]
    Entries(entries::EntriesArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<(), Box<dyn Error>> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args).map_err(Into::into),
            Commands::Login(args) => login::cmd(args).await.map_err(Into::into),
            Commands::Logout => logout::cmd().map_err(Into::into),
            Commands::Track(args) => track::cmd(args).await.map_err(Into::into),
            Commands::Sync => sync::cmd().await.map_err(Into::into),
            Commands::Entries(args) => entries::cmd(args).await.map_err(Into::into),
        }
    }
}
