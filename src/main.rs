use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotauth::{
    cli::{self, ServeOptions},
    types::Variant,
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
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the authorization server (default)
    Serve(ServeArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Deployment variant: JSON file + JSON responses, or environment + plain text
    #[clap(long, value_enum, default_value = "extended")]
    pub variant: Variant,

    /// Read credentials from this JSON file instead of the variant default
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on (defaults to SERVER_ADDRESS, then the variant default)
    #[clap(long)]
    pub bind: Option<String>,

    /// Open the authorization flow in the default browser once listening
    #[clap(long)]
    pub open: bool,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            variant: Variant::Extended,
            config: None,
            bind: None,
            open: false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(opt) => {
            cli::serve(ServeOptions {
                variant: opt.variant,
                config: opt.config,
                bind: opt.bind,
                open: opt.open,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
