//! Line-oriented terminal front end.
//!
//! The shell plays the role of the form UI: it reads an operation key and
//! operands per line, submits them to a [`Calculator`] and prints the banner
//! and history. Input and output are injected so the loop is testable.

use crate::config::DisplayConfig;
use crate::input::OperandForm;
use crate::render::{banner, history_lines, operation_menu};
use crate::session::Calculator;
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Enter an operation key followed by its operands, e.g. `add 2 3` or `sqrt 16`.
Commands:
  ops            list operations
  history        show the last 20 results
  history json   show the last 20 results as JSON
  help           show this message
  quit, exit     leave the calculator";

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Evaluate(OperandForm),
    History,
    HistoryJson,
    Operations,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Self::Empty,
            ["quit"] | ["exit"] => Self::Quit,
            ["help"] => Self::Help,
            ["ops"] => Self::Operations,
            ["history"] => Self::History,
            ["history", "json"] => Self::HistoryJson,
            [key] => Self::Evaluate(OperandForm::new(*key, "")),
            [key, a] => Self::Evaluate(OperandForm::new(*key, *a)),
            [key, a, b] => Self::Evaluate(OperandForm::new(*key, *a).with_operand_b(*b)),
            _ => Self::Invalid(format!(
                "expected `<operation> <a> [b]`, got {} values",
                tokens.len()
            )),
        }
    }
}

/// Interactive session over arbitrary input and output streams.
pub struct Shell {
    calculator: Calculator,
    display: DisplayConfig,
}

impl Shell {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            display,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Read lines until end of input or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        write!(output, "{}", self.display.prompt)?;
        output.flush()?;

        for line in input.lines() {
            let command = Command::parse(&line?);
            debug!(?command, "parsed input line");

            if command == Command::Quit {
                break;
            }
            self.execute(command, output)?;

            write!(output, "{}", self.display.prompt)?;
            output.flush()?;
        }

        writeln!(output)
    }

    /// Run one command, writing its output.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        match command {
            Command::Evaluate(form) => {
                let result = self.calculator.submit_form(&form);
                writeln!(output, "{}", banner(&result).text)?;

                if result.is_success() && self.display.show_history {
                    self.write_history(output)?;
                }
            }
            Command::History => self.write_history(output)?,
            Command::HistoryJson => {
                let json = self
                    .calculator
                    .history()
                    .to_json()
                    .map_err(io::Error::other)?;
                writeln!(output, "{json}")?;
            }
            Command::Operations => {
                for line in operation_menu() {
                    writeln!(output, "{line}")?;
                }
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Invalid(message) => writeln!(output, "{message}")?,
            Command::Quit | Command::Empty => {}
        }
        Ok(())
    }

    fn write_history<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "History:")?;
        for line in history_lines(self.calculator.history()) {
            writeln!(output, "{line}")?;
        }
        Ok(())
    }
}
