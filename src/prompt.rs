// src/prompt.rs

//! Operator prompts.
//!
//! [`TerminalPrompt`] drives dialoguer widgets on a TTY. [`LinePrompt`] reads
//! plain lines from any reader, which covers piped stdin and tests. Invalid
//! entries never fail: they are ignored or fall back to a safe answer.

use std::io::{BufRead, IsTerminal, Write};

use dialoguer::{Confirm, Input, MultiSelect, Password, Select};

use crate::error::Result;
use crate::utils::label::parse_selection;

/// Questions the session asks the operator.
pub trait Prompt {
    /// Pick one option. `None` when nothing valid was chosen.
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<Option<usize>>;

    /// Pick any number of options, in the order chosen.
    fn multi_select(&mut self, prompt: &str, options: &[String]) -> Result<Vec<usize>>;

    /// Yes/no question, defaulting to no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Free text line.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Secret input that is never echoed.
    fn password(&mut self, prompt: &str) -> Result<String>;
}

/// Checks if both stdin and stdout are connected to a terminal.
pub fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Dialoguer-backed prompts for an interactive terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

// dialoguer refuses empty item lists, so an empty menu is answered without
// touching the terminal.
impl Prompt for TerminalPrompt {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }
        Ok(Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()?)
    }

    fn multi_select(&mut self, prompt: &str, options: &[String]) -> Result<Vec<usize>> {
        if options.is_empty() {
            return Ok(Vec::new());
        }
        let picked = MultiSelect::new()
            .with_prompt(format!("{prompt} (space to toggle, enter to confirm)"))
            .items(options)
            .interact_opt()?;
        Ok(picked.unwrap_or_default())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        Ok(Password::new().with_prompt(prompt).interact()?)
    }
}

/// Numbered-menu prompts over plain lines of text.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompt and return the writer, e.g. to inspect output in tests.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        // End of input reads as an empty answer.
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn show_menu(&mut self, prompt: &str, options: &[String]) -> Result<()> {
        writeln!(self.writer, "\n{prompt}")?;
        for (idx, option) in options.iter().enumerate() {
            writeln!(self.writer, "{}. {}", idx + 1, option)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        self.show_menu(prompt, options)?;
        let answer = self.ask("Enter number: ")?;
        Ok(answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < options.len()))
    }

    fn multi_select(&mut self, prompt: &str, options: &[String]) -> Result<Vec<usize>> {
        self.show_menu(prompt, options)?;
        let answer = self.ask("Enter comma-separated numbers (e.g. 1,3): ")?;
        Ok(parse_selection(&answer, options))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(&format!("{prompt} (y/n): "))?;
        Ok(answer.to_lowercase().starts_with('y'))
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        self.ask(&format!("{prompt}: "))
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        self.ask(&format!("{prompt}: "))
    }
}
