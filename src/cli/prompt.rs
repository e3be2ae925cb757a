//! Interactive prompt helpers. Invalid entries are handled locally by
//! re-prompting; EOF is surfaced as None so the session can wind down
//! instead of looping.

use crate::errors::AppResult;
use crate::ui::messages;
use std::io::{BufRead, Write};

fn read_answer(input: &mut impl BufRead, question: &str) -> AppResult<Option<String>> {
    print!("{question}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until `parse` accepts the answer; None on EOF.
pub fn ask_until<T>(
    input: &mut impl BufRead,
    question: &str,
    invalid: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> AppResult<Option<T>> {
    loop {
        let Some(answer) = read_answer(input, question)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Some(value) => return Ok(Some(value)),
            None => messages::warning(invalid),
        }
    }
}

/// Yes/no gate: "yes" or "y" continues, anything else (including EOF) stops.
pub fn confirm(input: &mut impl BufRead, question: &str) -> AppResult<bool> {
    let Some(answer) = read_answer(input, question)? else {
        return Ok(false);
    };
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}
