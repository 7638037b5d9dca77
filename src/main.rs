mod artifacts;
mod commands;
mod core;
mod ui;

use clap::Parser;
use clap::error::ErrorKind;
use crate::core::error::{ExitCode, SyncError, print_error};

/// Propagate a release version into pyproject.toml, the instrument specification, and the AOS schema
///
/// A lone `--help` or `--version` is answered by the CLI itself and exits 0;
/// any other single argument not starting with `-` is taken as the version.
#[derive(Parser)]
#[command(name = "sync-version")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Version string to write (used verbatim, not validated)
  #[arg(value_name = "VERSION")]
  new_version: String,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => match err.kind() {
      ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
      // Wrong argument count: usage on stdout, nothing touched
      _ => {
        ui::output::print_usage();
        std::process::exit(ExitCode::User.as_i32());
      }
    },
  };

  // Artifacts are resolved against the directory the release job runs in
  let root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => handle_error(SyncError::with_help(
      format!("Failed to get current directory: {}", e),
      "Run sync-version from inside the repository checkout.",
    )),
  };

  if let Err(err) = commands::run_sync(&root, &cli.new_version) {
    handle_error(err);
  }
}

fn handle_error(err: SyncError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
