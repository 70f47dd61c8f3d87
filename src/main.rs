use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{run, symbols, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "resym")]
#[command(version = VERSION)]
#[command(about = "Batch-prefix a C library's public API symbols from rlparser JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename symbols across the source tree into a mirrored output tree
    Run(run::RunArgs),
    /// Collect and list the symbols a run would rename
    Symbols(symbols::SymbolsArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    tty::status("resym is working...");

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
