use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Build scripts can't reach src/, so the command tree from src/main.rs is mirrored here
fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("flowni")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert editor documents to Atlassian Document Format")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List the rule table in application order")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a flowni.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document to ADF (default command)")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Write single-line JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-envelope")
                        .long("no-envelope")
                        .help("Do not wrap the result in {\"version\": 1, ...}")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Report which rules fire on a document")
                .arg(input_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "flowni", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "flowni", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "flowni", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
