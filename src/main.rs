//! NoGo: a two-player capture game where the first player to leave a string
//! without liberties loses.
//!
//! ## Usage
//!
//! - `nogo h c 9 9` - Human (`O`) against computer (`X`) on a 9x9 board
//! - `nogo c c game.txt` - Resume a saved game with two computer players
//!
//! Type `row col` to move, or `w<path>` to save the game.

use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use nogo::config::GameConfig;
use nogo::console::Console;
use nogo::error::NogoError;

/// NoGo: place tokens, and never leave one of your strings without liberties
///
/// Arguments are taken verbatim, including ones that start with `-`, so that
/// they are validated in the game's own order. Help and version are only
/// available as long flags.
#[derive(Parser)]
#[command(name = "nogo")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "nogo p1type p2type [height width | filename]")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Player types for O and X (h or c), then the board height and width or
    /// the path of a saved game
    #[arg(value_name = "ARGS", allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,

    /// Print help
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), NogoError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return Err(NogoError::Usage),
    };

    let mut game = GameConfig::from_args(&cli.args)?.build()?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    console.run(&mut game)?;
    Ok(())
}
