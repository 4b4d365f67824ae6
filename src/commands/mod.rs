pub mod absence;
pub mod init;
pub mod login;
pub mod logout;
pub mod prefs;
pub mod today;
pub mod watch;
pub mod week;
pub mod widget;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Authenticate against the badge portal")]
    Login,
    #[command(about = "Drop the session and clear local caches")]
    Logout,
    #[command(about = "Show the weekly dashboard")]
    Week(week::WeekArgs),
    #[command(about = "Show today's punches and timeline")]
    Today,
    #[command(about = "Record or clear an absence")]
    Absence(absence::AbsenceArgs),
    #[command(about = "Update theme and weekly objective")]
    Prefs(prefs::PrefsArgs),
    #[command(about = "Publish or clear the widget snapshot")]
    Widget(widget::WidgetArgs),
    #[command(about = "Refresh from the portal on an interval")]
    Watch(watch::WatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd(),
            Commands::Week(args) => week::cmd(args).await,
            Commands::Today => today::cmd(),
            Commands::Absence(args) => absence::cmd(args),
            Commands::Prefs(args) => prefs::cmd(args).await,
            Commands::Widget(args) => widget::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
        }
    }
}
