use anyhow::Context;
use clap::{Parser, Subcommand};
use coffeeshop::error::MenuError;
use coffeeshop::output::{ErrorResponse, OutputFormat};
use coffeeshop::output_common::{is_json_format, render_json_response, render_menu};
use coffeeshop::{logging, MenuCatalog, Shell};
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "coffeeshop",
    version = env!("CARGO_PKG_VERSION"),
    about = "In-memory coffee-shop menu with an interactive prompt"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = OutputFormat::Human)]
    output: OutputFormat,

    /// JSON file with the start-up menu (read only)
    #[arg(long, global = true, conflicts_with = "house_menu")]
    menu: Option<PathBuf>,

    /// Start from the built-in sample menu
    #[arg(long, global = true)]
    house_menu: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Run the interactive prompt loop (default)
    #[command(after_help = SHELL_EXAMPLES)]
    Shell,
    /// Print the start-up menu and exit
    List,
}

const SHELL_EXAMPLES: &str = r#"
Options at the prompt:
  1   print the menu
  2   add an item by name
  3   set the price of one size of an item
  q   quit

Examples:
  coffeeshop
  coffeeshop --house-menu shell
  COFFEESHOP_LOG=debug coffeeshop --menu menu.json
"#;

fn main() {
    if let Err(err) = init_logging() {
        eprintln!("WARN: {:#}", err);
    }

    let cli = Cli::parse();
    if let Err(err) = dispatch(&cli) {
        emit_error(&cli, &err);
        std::process::exit(1);
    }
}

fn init_logging() -> anyhow::Result<()> {
    logging::init().context("failed to install log subscriber")
}

fn dispatch(cli: &Cli) -> Result<(), MenuError> {
    let mut catalog = load_catalog(cli)?;

    match cli.command.as_ref().unwrap_or(&Command::Shell) {
        Command::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(stdin.lock(), stdout.lock(), &mut catalog).run()?;
            debug!(items = catalog.len(), "session finished");
        }
        Command::List => {
            let rendered = render_menu(&catalog, cli.output)?;
            if is_json_format(cli.output) {
                println!("{}", rendered);
            } else {
                print!("{}", rendered);
            }
        }
    }
    Ok(())
}

fn load_catalog(cli: &Cli) -> Result<MenuCatalog, MenuError> {
    if let Some(path) = &cli.menu {
        return MenuCatalog::load_json(path);
    }
    if cli.house_menu {
        return Ok(MenuCatalog::house_menu());
    }
    Ok(MenuCatalog::new())
}

fn emit_error(cli: &Cli, err: &MenuError) {
    match cli.output {
        OutputFormat::Human => {
            eprintln!("ERROR [{}]: {}", err.error_code(), err);
            if let Some(hint) = err.remediation() {
                eprintln!("Hint: {}", hint);
            }
        }
        OutputFormat::Json | OutputFormat::Pretty => {
            let error = ErrorResponse {
                code: err.error_code().to_string(),
                error: err.severity().to_string(),
                message: err.to_string(),
                remediation: err.remediation().map(|s| s.to_string()),
            };
            match render_json_response(&error, cli.output) {
                Ok(payload) => println!("{}", payload),
                Err(ser_err) => eprintln!("ERROR: {}", ser_err),
            }
        }
    }
}
