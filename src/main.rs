use anyhow::{anyhow, Context, Result};
use calcbook::config::Settings;
use calcbook::input::OperandForm;
use calcbook::render::{banner, operation_menu};
use calcbook::shell::Shell;
use calcbook::{logging, Calculator};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "calcbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculator with a session history"
)]
struct Cli {
    /// Path to a custom calcbook.toml file
    #[arg(short, long, global = true, env = "CALCBOOK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive calculator (default)
    Repl,

    /// Evaluate a single operation and print the result
    Eval {
        /// Operation key, e.g. add, sub, mul, div, pow, sqrt, log10, fact
        operation: String,

        /// First operand
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Second operand, required by binary operations
        #[arg(allow_hyphen_values = true)]
        b: Option<String>,
    },

    /// List the available operations
    Ops,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())
        .map_err(|error| anyhow!("failed to load configuration: {error}"))?;
    logging::init_with_config(&settings.logging);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let mut shell = Shell::new(settings.display);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell
                .run(stdin.lock(), &mut stdout)
                .context("terminal I/O failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Eval { operation, a, b } => {
            let mut form = OperandForm::new(operation, a);
            form.operand_b = b;

            let result = Calculator::new().submit_form(&form);
            let banner = banner(&result);
            if banner.is_error() {
                eprintln!("{}", banner.text);
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", banner.text);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Ops => {
            for line in operation_menu() {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
