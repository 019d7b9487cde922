//! Interactive prompt loop over a [`MenuCatalog`].
//!
//! The shell owns nothing but its reader and writer; the catalog is
//! borrowed for the session so callers (and tests) decide where it lives.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalog::{parse_price, MenuCatalog};
use crate::error::MenuError;

const PROMPT: &str = "Please select an option\n\
                      1) Print menu\n\
                      2) Add item\n\
                      3) Set price\n\
                      q) Quit";

/// A single parsed line from the option prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    PrintMenu,
    AddItem,
    SetPrice,
    Quit,
    Unknown,
}

impl Choice {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => Choice::PrintMenu,
            "2" => Choice::AddItem,
            "3" => Choice::SetPrice,
            "q" => Choice::Quit,
            _ => Choice::Unknown,
        }
    }
}

/// Whether the loop should keep going after a command.
enum Flow {
    Continue,
    Stop,
}

pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    catalog: &'a mut MenuCatalog,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, output: W, catalog: &'a mut MenuCatalog) -> Self {
        Self {
            input,
            output,
            catalog,
        }
    }

    /// Run until `q` or end of input.
    ///
    /// Catalog rejections are printed and the loop continues. Only I/O
    /// failures on the reader or writer end it with an error.
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            writeln!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed, leaving shell");
                break;
            };

            match self.dispatch(Choice::parse(&line))? {
                Flow::Continue => {}
                Flow::Stop => break,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> Result<Flow, MenuError> {
        match choice {
            Choice::PrintMenu => {
                write!(self.output, "{}", self.catalog.render())?;
            }
            Choice::AddItem => return self.add_item(),
            Choice::SetPrice => return self.set_price(),
            Choice::Quit => return Ok(Flow::Stop),
            Choice::Unknown => {
                writeln!(self.output, "Unknown option")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn add_item(&mut self) -> Result<Flow, MenuError> {
        let Some(name) = self.ask("Please enter the name of the new item")? else {
            return Ok(Flow::Stop);
        };
        let result = self.catalog.append(&name).map(|_| ());
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn set_price(&mut self) -> Result<Flow, MenuError> {
        let Some(name) = self.ask("Please enter the name of the item")? else {
            return Ok(Flow::Stop);
        };
        let Some(size) = self.ask("Please enter the size")? else {
            return Ok(Flow::Stop);
        };
        let Some(raw_price) = self.ask("Please enter the price")? else {
            return Ok(Flow::Stop);
        };

        let result =
            parse_price(&raw_price).and_then(|price| self.catalog.set_price(&name, &size, price));
        self.report(result)?;
        Ok(Flow::Continue)
    }

    /// Print a recoverable error for the user; propagate anything else.
    fn report(&mut self, result: Result<(), MenuError>) -> Result<(), MenuError> {
        match result {
            Ok(()) => Ok(()),
            Err(err) if err.is_recoverable() => {
                debug!(code = err.error_code(), "reported to user: {}", err);
                writeln!(self.output, "invalid input: {}", err)?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, MenuError> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next raw line, or `None` once the input is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read.
    fn read_line(&mut self) -> Result<Option<String>, MenuError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn run_session(catalog: &mut MenuCatalog, input: &str) -> String {
        run_session_bytes(catalog, input.as_bytes())
    }

    fn run_session_bytes(catalog: &mut MenuCatalog, input: &[u8]) -> String {
        let mut output = Vec::new();
        Shell::new(input, &mut output, catalog)
            .run()
            .expect("session");
        String::from_utf8(output).expect("utf8 transcript")
    }

    #[test_case("1" => Choice::PrintMenu)]
    #[test_case(" 2\n" => Choice::AddItem)]
    #[test_case("3\r\n" => Choice::SetPrice)]
    #[test_case("q" => Choice::Quit)]
    #[test_case("Q" => Choice::Unknown ; "quit is lowercase only")]
    #[test_case("" => Choice::Unknown ; "blank line")]
    fn parse_choice(line: &str) -> Choice {
        Choice::parse(line)
    }

    #[test]
    fn invalid_utf8_name_does_not_end_session() {
        let mut catalog = MenuCatalog::new();
        run_session_bytes(&mut catalog, b"2\nCaf\xe9\n2\nTea\nq\n");

        let names: Vec<_> = catalog.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Caf\u{FFFD}", "Tea"]);
    }

    #[test]
    fn quit_immediately() {
        let mut catalog = MenuCatalog::new();
        let transcript = run_session(&mut catalog, "q\n");
        assert_eq!(transcript, format!("{}\n", PROMPT));
        assert!(catalog.is_empty());
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut catalog = MenuCatalog::new();
        let transcript = run_session(&mut catalog, "");
        assert_eq!(transcript.matches("Please select an option").count(), 1);
    }

    #[test]
    fn add_then_print() {
        let mut catalog = MenuCatalog::new();
        let transcript = run_session(&mut catalog, "2\nCoffee\n2\n  Tea  \n1\nq\n");

        assert_eq!(catalog.len(), 2);
        assert!(transcript.contains("Please enter the name of the new item"));
        assert!(transcript.contains("Coffee\n----------\nTea\n----------\n"));
    }

    #[test]
    fn duplicate_is_reported_and_session_continues() {
        let mut catalog = MenuCatalog::new();
        let transcript = run_session(&mut catalog, "2\nCoffee\n2\nCoffee \n2\nTea\nq\n");

        assert!(transcript.contains("invalid input: menu item already exists: Coffee"));
        let names: Vec<_> = catalog.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Coffee", "Tea"]);
    }

    #[test]
    fn unknown_option_is_reported() {
        let mut catalog = MenuCatalog::new();
        let transcript = run_session(&mut catalog, "latte please\nq\n");
        assert!(transcript.contains("Unknown option"));
        assert_eq!(transcript.matches("Please select an option").count(), 2);
    }

    #[test]
    fn set_price_through_prompts() {
        let mut catalog = MenuCatalog::new();
        let transcript = run_session(&mut catalog, "2\nChai\n3\nChai\nlarge\n2.50\n1\nq\n");

        assert!(transcript.contains("Please enter the size"));
        assert!(transcript.contains("Chai\n----------\n\t     large      2.50\n"));
        assert_eq!(catalog.get("Chai").unwrap().prices["large"], 2.5);
    }

    #[test]
    fn bad_price_is_reported() {
        let mut catalog = MenuCatalog::new();
        let transcript = run_session(&mut catalog, "2\nChai\n3\nChai\nlarge\nfree\nq\n");
        assert!(transcript.contains("invalid input: invalid price: free"));
        assert!(catalog.get("Chai").unwrap().prices.is_empty());
    }

    #[test]
    fn price_for_missing_item_is_reported() {
        let mut catalog = MenuCatalog::new();
        let transcript = run_session(&mut catalog, "3\nMocha\nsmall\n3.00\nq\n");
        assert!(transcript.contains("invalid input: menu item not found: Mocha"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn input_closed_mid_prompt_ends_session() {
        let mut catalog = MenuCatalog::new();
        run_session(&mut catalog, "2\n");
        assert!(catalog.is_empty());
    }
}
