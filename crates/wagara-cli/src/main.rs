//! wagara - CLI for Japanese geometric pattern tiling
//!
//! Usage:
//!   wagara motifs                     List available motifs
//!   wagara render <motif> [options]   Tile a motif across a region
//!   wagara hexagon <motif> [options]  Draw one hexagon cell
//!   wagara swatches [options]         Generate a swatch sheet
//!   wagara recipe <file.yaml>         Render a layered recipe

use std::env;
use std::process::ExitCode;

use env_logger::Env;
use wagara::Motif;

mod cli;

use cli::{CliResult, cmd_hexagon, cmd_recipe, cmd_render, cmd_swatches};

fn main() -> ExitCode {
    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).format_timestamp(None).init();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("wagara");

    let Some(command) = args.get(1) else {
        print_usage(prog);
        return ExitCode::FAILURE;
    };

    let rest = &args[2..];
    let result = match command.as_str() {
        "motifs" => {
            cmd_motifs();
            Ok(())
        }
        "render" => cmd_render(rest),
        "hexagon" => cmd_hexagon(rest),
        "swatches" => cmd_swatches(rest),
        "recipe" => cmd_recipe(rest),
        "help" | "--help" | "-h" => {
            print_usage(prog);
            Ok(())
        }
        other => {
            log::error!("Unknown command '{}'", other);
            print_usage(prog);
            return ExitCode::FAILURE;
        }
    };

    finish(result, command)
}

fn finish(result: CliResult<()>, command: &str) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            if e.is_usage() {
                eprintln!("Run 'wagara {} --help' for usage.", command);
            }
            ExitCode::FAILURE
        }
    }
}

fn cmd_motifs() {
    println!("Available motifs:");
    for motif in Motif::all() {
        println!("  {:<16} {}", motif.name(), motif.description());
    }
}

fn print_usage(prog: &str) {
    eprintln!("wagara - Japanese geometric patterns on a hexagonal lattice");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} motifs", prog);
    eprintln!("  {} render <motif> [options]", prog);
    eprintln!("  {} hexagon <motif> [options]", prog);
    eprintln!("  {} swatches [options]", prog);
    eprintln!("  {} recipe <file.yaml> [-o out.svg] [--example]", prog);
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  -o, --output <file>       Output file (default: <millis>_<motif>.svg)");
    eprintln!("  -c, --columns <n>         Hexagon columns (default: 2)");
    eprintln!("  -r, --rotation <deg>      Pattern rotation (default: 0)");
    eprintln!("  --region <x> <y> <w> <h>  Region to tile");
    eprintln!("  --canvas <w> <h>          Canvas size (default: 600 600)");
    eprintln!("  --plot                    Flattened line output for plotters");
    eprintln!("  --json                    Plot lines as JSON");
    eprintln!("  --png <file>              Also write a PNG");
    eprintln!();
    eprintln!("Each command accepts --help for its full option list.");
    eprintln!("Set RUST_LOG=debug for lattice details.");
}
