//! Command-line interface for filterex
//! This binary validates, splits and renders boolean filter expressions.
//!
//! Usage:
//!   filterex validate `<expr>`                                     - Check an expression against the grammar
//!   filterex split `<expr>` [--by parens|or|and]                   - Print the fragments as JSON
//!   filterex render `<expr>` [--format sql|json|yaml] [--column `<name>`] [--config `<file>`]
//!
//! An expression given as `-` is read from stdin. `render` reads `filterex.toml` from the working
//! directory when it exists; `--config` and `--column` are layered over it.

mod renderer;

use std::io::Read;

use clap::{Arg, ArgAction, ArgMatches, Command};
use filterex::expression::{split_and, split_or, split_parentheses};
use filterex_config::{ConfigError, FilterexConfig, Loader, OutputFormat, LOCAL_FILE};
use log::LevelFilter;

fn main() {
    let matches = Command::new("filterex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking and rendering boolean filter expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser decisions to stderr (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("validate")
                .about("Check an expression against the grammar")
                .arg(expression_arg()),
        )
        .subcommand(
            Command::new("split")
                .about("Split an expression and print the fragments as JSON")
                .arg(expression_arg())
                .arg(
                    Arg::new("by")
                        .long("by")
                        .short('b')
                        .help("Splitting stage")
                        .value_parser(["parens", "or", "and"])
                        .default_value("parens"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Build an expression and print the rendered predicate")
                .arg(expression_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default from configuration: sql)")
                        .value_parser(["sql", "json", "yaml"]),
                )
                .arg(
                    Arg::new("column")
                        .long("column")
                        .help("Column leaf terms are compared against in SQL output"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults and ./filterex.toml"),
                ),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("validate", validate_matches)) => {
            handle_validate_command(&read_expression(validate_matches));
        }
        Some(("split", split_matches)) => {
            let by = split_matches
                .get_one::<String>("by")
                .expect("by has a default");
            handle_split_command(&read_expression(split_matches), by);
        }
        Some(("render", render_matches)) => {
            handle_render_command(&read_expression(render_matches), render_matches);
        }
        _ => unreachable!(),
    }
}

fn expression_arg() -> Arg {
    Arg::new("expression")
        .help("The filter expression, or '-' to read it from stdin")
        .required(true)
        .index(1)
}

fn init_logging(verbosity: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

/// The expression argument, or stdin when it is `-`
fn read_expression(matches: &ArgMatches) -> String {
    let expression = matches
        .get_one::<String>("expression")
        .expect("expression is required");
    if expression != "-" {
        return expression.clone();
    }

    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        });
    source.trim_end_matches(['\n', '\r']).to_string()
}

/// Handle the validate command
fn handle_validate_command(expression: &str) {
    if filterex::is_valid(expression) {
        println!("valid");
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}

/// Handle the split command
fn handle_split_command(expression: &str, by: &str) {
    let fragments = match by {
        "or" => split_or(expression),
        "and" => split_and(expression),
        _ => split_parentheses(expression),
    }
    .unwrap_or_else(|e| {
        eprintln!("Split error: {}", e);
        std::process::exit(1);
    });

    let json = serde_json::to_string(&fragments).unwrap_or_else(|e| {
        eprintln!("Error formatting fragments: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

/// Handle the render command
fn handle_render_command(expression: &str, matches: &ArgMatches) {
    let config = load_config(matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => OutputFormat::Json,
        Some("yaml") => OutputFormat::Yaml,
        Some(_) => OutputFormat::Sql,
        None => config.output.format,
    };

    let rendered = renderer::render(expression, format, &config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    println!("{}", rendered.trim_end());
}

fn load_config(matches: &ArgMatches) -> Result<FilterexConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(column) = matches.get_one::<String>("column") {
        loader = loader.set_override("render.column", column.as_str())?;
    }
    loader.build()
}
