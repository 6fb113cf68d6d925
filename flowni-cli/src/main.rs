// Command-line interface for flowni-adf
//
// Converts documents produced by the product's rich-text editor into Atlassian Document Format,
// the shape Jira expects for issue descriptions. All conversion logic lives in flowni-adf; this
// binary reads files, applies configuration and writes results.
//
// Usage:
//  flowni <input> [--output <file>]               - Convert a document (default)
//  flowni convert <input> [--output <file>]       - Same as above (explicit)
//  flowni inspect <input> [--json]                - Report which rules fired
//  flowni --list-rules                            - List the rule table
//
// <input> may be "-" to read from stdin.
//
// Extra Parameters:
//
// One-off configuration overrides can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies the value over the loaded config.
// Example:
//  flowni doc.json --extra-code-language rust --extra-disable-rule emoji-shortname

mod logging;

use clap::{Arg, ArgAction, Command, ValueHint};
use flowni_adf::{convert_str, Converter, RuleRegistry};
use flowni_config::{FlowniConfig, LogFormat, Loader};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info, warn};

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
///
/// A repeated key is joined with commas, so `disable-rule` can be given twice.
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params: HashMap<String, String> = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            let value = if has_value {
                i += 2;
                args[i - 1].clone()
            } else {
                i += 1;
                "true".to_string()
            };

            extra_params
                .entry(key.to_string())
                .and_modify(|existing| {
                    existing.push(',');
                    existing.push_str(&value);
                })
                .or_insert(value);
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Insert the "convert" subcommand before the first positional argument
///
/// Leading global flags (and the value of `--config`) are skipped, so
/// `flowni -v doc.json` becomes `flowni -v convert doc.json`. Returns `None`
/// when the first positional is already a subcommand or there is none.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--config" {
            i += 2;
        } else if arg == "-" || !arg.starts_with('-') {
            break;
        } else {
            i += 1;
        }
    }

    let first = args.get(i)?;
    if matches!(first.as_str(), "convert" | "inspect" | "help") {
        return None;
    }

    let mut new_args = args[..i].to_vec();
    new_args.push("convert".to_string());
    new_args.extend_from_slice(&args[i..]);
    Some(new_args)
}

fn build_cli() -> Command {
    Command::new("flowni")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert editor documents to Atlassian Document Format")
        .long_about(
            "flowni converts rich-text documents from the product editor into\n\
            Atlassian Document Format (ADF) for the Jira REST API.\n\n\
            Commands:\n  \
            - convert: Rewrite a document into ADF (default)\n  \
            - inspect: Report which rules fired on a document\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration for one run.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            flowni doc.json                             # Convert to stdout\n  \
            flowni doc.json -o issue.json               # Convert to a file\n  \
            cat doc.json | flowni convert -             # Read from stdin\n  \
            flowni doc.json --extra-code-language rust  # Override the code block fallback",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document to ADF (default command)")
                .long_about(
                    "Convert an editor JSON document to Atlassian Document Format.\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\
                    By default the result is wrapped as {\"version\": 1, ...}, ready\n\
                    to be used as a Jira issue description.\n\n\
                    Examples:\n  \
                    flowni convert doc.json                   # Pretty ADF on stdout\n  \
                    flowni convert doc.json --compact         # Single-line output\n  \
                    flowni convert doc.json --no-envelope     # Bare converted tree\n  \
                    flowni doc.json -o issue.json             # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
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
                .long_about(
                    "Run the conversion and print, per rule, how many nodes it rewrote\n\
                    or deleted. The converted document itself is not printed.\n\n\
                    Examples:\n  \
                    flowni inspect doc.json          # Table of rule counts\n  \
                    flowni inspect doc.json --json   # Same, as JSON",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&cleaned_args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    logging::init_logging(
        config.logging.format,
        &config.logging.level,
        matches.get_count("verbose"),
    );
    for key in extra_params.keys() {
        warn!(parameter = %key, "ignoring unknown --extra parameter");
    }

    if matches.get_flag("list-rules") {
        handle_list_rules_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            if sub_matches.get_flag("compact") {
                config.output.pretty = false;
            }
            if sub_matches.get_flag("no-envelope") {
                config.output.envelope = false;
            }
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_inspect_command(input, sub_matches.get_flag("json"), &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, config: &FlowniConfig) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    info!(input, "converting document");
    let options = config.convert_options();
    let text = convert_str(&source, &options).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            debug!(path, "wrote converted document");
        }
        None => println!("{text}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, as_json: bool, config: &FlowniConfig) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });
    let document: Value = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    let converter = Converter::from_options(&config.convert_options()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let (_, report) = converter.convert_with_report(document);

    if as_json {
        let text = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
        println!("{text}");
        return;
    }

    println!("Objects visited: {}", report.objects_visited);
    println!("Nodes deleted:   {}", report.nodes_deleted);
    println!("\nRewrites:");
    for rule in converter.registry().iter() {
        println!("  {:<22} {}", rule.name(), report.count(rule.name()));
    }
}

/// Handle the list-rules command
fn handle_list_rules_command(config: &FlowniConfig) {
    println!("Rules (in application order):\n");
    let registry = RuleRegistry::with_code_language(&config.convert.default_code_language);
    for rule in registry.iter() {
        let disabled = config
            .convert
            .disabled_rules
            .iter()
            .any(|name| name == rule.name());
        let marker = if disabled { " (disabled)" } else { "" };
        println!("  {:<22} {}{marker}", rule.name(), rule.description());
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> FlowniConfig {
    let loader = Loader::new().with_optional_file("flowni.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut FlowniConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["code-language", "language"]) {
        config.convert.default_code_language = raw;
    }

    if let Some(raw) = take_override(extra_params, &["disable-rule", "disable-rules"]) {
        for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if !config.convert.disabled_rules.iter().any(|n| n == name) {
                config.convert.disabled_rules.push(name.to_string());
            }
        }
    }

    if let Some(raw) = extra_params.remove("envelope") {
        config.output.envelope = parse_bool_arg("envelope", &raw);
    }
    if let Some(raw) = extra_params.remove("pretty") {
        config.output.pretty = parse_bool_arg("pretty", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["log-level"]) {
        config.logging.level = raw;
    }
    if let Some(raw) = take_override(extra_params, &["log-json"]) {
        config.logging.format = if parse_bool_arg("log-json", &raw) {
            LogFormat::Json
        } else {
            LogFormat::Human
        };
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
