//! Interactive numbered menu over a loaded catalog.
//!
//! The loop reads one line per prompt from any `BufRead` and writes to any
//! `Write`, so the binary drives it with stdin/stdout and tests drive it
//! with in-memory buffers.

use std::io::{BufRead, Write};

use crate::cli::commands;
use crate::engine::{Catalog, Query};
use crate::types::{PsearchError, PsearchResult, Strategy};

/// One of the options offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Leave the menu.
    Exit,
    /// Run a search.
    FindPerson,
    /// List every record.
    PrintAll,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn from_input(input: &str) -> PsearchResult<Self> {
        match input.trim() {
            "0" => Ok(Self::Exit),
            "1" => Ok(Self::FindPerson),
            "2" => Ok(Self::PrintAll),
            other => Err(PsearchError::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// The menu loop state.
pub struct Menu<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu reading from `input` and printing to `output`.
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> PsearchResult<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuChoice::from_input(&line) {
                Ok(MenuChoice::Exit) => break,
                Ok(MenuChoice::FindPerson) => {
                    if !self.find_person()? {
                        break;
                    }
                }
                Ok(MenuChoice::PrintAll) => {
                    writeln!(self.output)?;
                    commands::cmd_list(&mut self.output, self.catalog, false)?;
                }
                Err(e) => {
                    log::debug!("{}", e);
                    writeln!(self.output, "\nIncorrect option! Try again.")?;
                }
            }
        }

        writeln!(self.output, "Bye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> PsearchResult<()> {
        writeln!(self.output, "\n=== Menu ===")?;
        writeln!(self.output, "1. Find a person")?;
        writeln!(self.output, "2. Print all people")?;
        writeln!(self.output, "0. Exit")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt for a strategy and query words, then print the result.
    /// Returns `false` if input ended before the search could run.
    fn find_person(&mut self) -> PsearchResult<bool> {
        writeln!(
            self.output,
            "Select a matching strategy: {}",
            Strategy::joined_names()
        )?;
        self.output.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(false);
        };
        let Some(strategy) = Strategy::from_name(&name) else {
            log::debug!("Abandoning search: unknown strategy {:?}", name);
            return Ok(true);
        };

        writeln!(
            self.output,
            "\nEnter a name or email to search all matching people."
        )?;
        self.output.flush()?;
        let Some(text) = self.read_line()? else {
            return Ok(false);
        };

        let query = Query::from_text(strategy, &text);
        let matches = self.catalog.find(&query);
        commands::render_matches(&mut self.output, self.catalog, &matches)?;
        Ok(true)
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> PsearchResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::from_input("0").unwrap(), MenuChoice::Exit);
        assert_eq!(MenuChoice::from_input(" 1\n").unwrap(), MenuChoice::FindPerson);
        assert_eq!(MenuChoice::from_input("2").unwrap(), MenuChoice::PrintAll);
        assert!(matches!(
            MenuChoice::from_input("7"),
            Err(PsearchError::InvalidMenuChoice(_))
        ));
        assert!(MenuChoice::from_input("abc").is_err());
    }
}
