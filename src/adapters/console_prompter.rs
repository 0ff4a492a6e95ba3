use crate::{VehicleError, ports::Prompter};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Line-based multi-select prompt.
///
/// Choices are listed with numbers, `page_size` per block. The user answers
/// with numbers or names separated by commas or spaces; an empty or invalid
/// answer asks again.
pub struct ConsolePrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    input: R,
    output: W,
}

impl<R, W> ConsolePrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn render(&mut self, title: &str, choices: &[String], page_size: usize) -> std::io::Result<()> {
        writeln!(self.output, "{}", title.green())?;
        for (page, chunk) in choices.chunks(page_size.max(1)).enumerate() {
            if page > 0 {
                writeln!(self.output)?;
            }
            for (offset, choice) in chunk.iter().enumerate() {
                let number = page * page_size.max(1) + offset + 1;
                writeln!(self.output, "  {number}) {choice}")?;
            }
        }
        write!(
            self.output,
            "{} ",
            "(numbers or names, separated by commas or spaces)>".bright_black()
        )?;
        self.output.flush()
    }
}

/// Resolves one answer line against `choices`.
///
/// Entries are separated by commas or whitespace. A comma separated entry is
/// first matched whole, so multi-word names such as "Global Pandemic" work;
/// otherwise each whitespace separated piece must match on its own.
///
/// Returns the picked choices in answer order without duplicates, or the
/// first entry that matched nothing.
pub fn parse_selection(line: &str, choices: &[String]) -> Result<Vec<String>, String> {
    let mut selected: Vec<String> = Vec::new();

    for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let picked = match resolve(token, choices) {
            Some(choice) => vec![choice],
            None => token
                .split_whitespace()
                .map(|piece| resolve(piece, choices))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| token.to_string())?,
        };

        for choice in picked {
            if !selected.contains(choice) {
                selected.push(choice.clone());
            }
        }
    }

    Ok(selected)
}

/// Matches a 1-based choice number or a case-insensitive choice name.
fn resolve<'c>(entry: &str, choices: &'c [String]) -> Option<&'c String> {
    match entry.parse::<usize>() {
        Ok(number) if (1..=choices.len()).contains(&number) => Some(&choices[number - 1]),
        Ok(_) => None,
        Err(_) => choices.iter().find(|c| c.eq_ignore_ascii_case(entry)),
    }
}

impl<R, W> Prompter for ConsolePrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    fn multi_select(
        &mut self,
        title: &str,
        choices: &[String],
        page_size: usize,
    ) -> Result<Vec<String>, VehicleError> {
        loop {
            self.render(title, choices, page_size)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(VehicleError::PromptAborted);
            }

            match parse_selection(&line, choices) {
                Ok(selected) if selected.is_empty() => {
                    writeln!(self.output, "{}", "Please select at least one option.".red())?;
                }
                Ok(selected) => {
                    debug!(title, ?selected, "prompt answered");
                    return Ok(selected);
                }
                Err(token) => {
                    writeln!(
                        self.output,
                        "{}",
                        format!("'{token}' is not one of the choices.").red()
                    )?;
                }
            }
        }
    }
}
