use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use mikocli::{
    cli, config, error,
    management::{Theme, ViewMode},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in to the miko server
    Login(LoginOptions),

    /// Log out and clear the stored token
    Logout,

    /// Show the profile of the logged-in user
    Me,

    /// Show the server dashboard
    Dashboard,

    /// Browse the library
    Library(LibraryOptions),

    /// Show an album with its songs
    Album(IdOption),

    /// Show an artist with their albums
    Artist(IdOption),

    /// Show a directory listing
    Directory(IdOption),

    /// Search artists, albums and songs
    Search(SearchOptions),

    /// List all users (admin)
    Users,

    /// Show a single user
    User(UserOption),

    /// List music folders
    Folders,

    /// Show or trigger a library scan
    Scan(ScanOptions),

    /// Download cover art
    Cover(CoverOptions),

    /// Show or set the theme preference
    Theme(ThemeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// Username on the server
    username: String,

    /// Password; read from stdin when omitted
    #[clap(long)]
    password: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LibraryOptions {
    /// Library scope to list
    #[clap(value_parser = cli::parse_library_scope, default_value = "albums")]
    scope: cli::LibraryScope,

    /// Display mode (table or grid); persisted per scope
    #[clap(long, value_parser = cli::parse_view_mode)]
    view: Option<ViewMode>,

    /// Narrow the listing with a search term
    #[clap(long)]
    search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    /// Server-side id of the item
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct UserOption {
    /// Username to look up
    username: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search term
    query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ScanOptions {
    /// Trigger a new scan instead of showing the status
    #[clap(long)]
    start: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CoverOptions {
    /// Cover art id (song, album, or artist)
    id: String,

    /// Output file; defaults to <id>.jpg in the working directory
    #[clap(long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ThemeOptions {
    /// Theme to set (light, dark, or system)
    #[clap(value_parser = cli::parse_theme)]
    value: Option<Theme>,

    /// Cycle light -> dark -> system
    #[clap(long)]
    toggle: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Login(opt) => cli::login(opt.username, opt.password).await,
        Command::Logout => cli::logout().await,
        Command::Me => cli::me().await,
        Command::Dashboard => cli::dashboard().await,
        Command::Library(opt) => cli::library(opt.scope, opt.view, opt.search).await,
        Command::Album(opt) => cli::album(opt.id).await,
        Command::Artist(opt) => cli::artist(opt.id).await,
        Command::Directory(opt) => cli::directory(opt.id).await,
        Command::Search(opt) => cli::search(opt.query).await,
        Command::Users => cli::users().await,
        Command::User(opt) => cli::user(opt.username).await,
        Command::Folders => cli::folders().await,
        Command::Scan(opt) => cli::scan(opt.start).await,
        Command::Cover(opt) => cli::cover(opt.id, opt.output).await,
        Command::Theme(opt) => cli::theme(opt.value, opt.toggle).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
