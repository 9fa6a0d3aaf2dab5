//! Mooring console entry point.

use std::env;
use std::process::ExitCode;

use mooring_runtime::{Repl, SessionConfig, demo_world, init_tracing};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    programmer: bool,
    no_color: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-p" | "--programmer" => config.programmer = true,
            "--no-color" => config.no_color = true,
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("mooring {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing();

    let mut session_config = SessionConfig::from_env();
    if config.no_color {
        session_config = session_config.with_color(false);
    }

    let demo = demo_world(config.programmer)?;
    tracing::info!(player = %demo.player, programmer = config.programmer, "starting console");

    let mut repl = Repl::new(demo.world, demo.player, session_config)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mMooring\x1b[0m - Per-player command dispatch for shared text worlds

\x1b[1mUSAGE:\x1b[0m
    mooring [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -p, --programmer    Embody a programmer (enables eval and full errors)
        --no-color      Disable ANSI styling of output

\x1b[1mENVIRONMENT:\x1b[0m
    MOORING_LOG         Log filter (falls back to RUST_LOG, default mooring=info)
    MOORING_COLOR       Set to 0/false/off to disable styling
    MOORING_EVAL_DEPTH  Nesting shown for eval results (default 1)

\x1b[1mCOMMANDS:\x1b[0m
    look, say, emote, take, drop, go, inventory, put <thing> in <thing>
    ;<code>             Evaluate code (programmers only)
    quit                Leave the world"
    );
}
