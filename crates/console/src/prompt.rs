//! Retrying prompts layered over [`LineIo`]. Malformed input is reported and
//! asked again; only cancellation or an I/O failure leaves these loops.

use crate::constants::{INVALID_INTEGER, INVALID_YES_NO, PROMPT_CHOICE};
use crate::io::{ConsoleError, LineIo};
use crate::menu::{self, MenuChoice};
use crate::model::TaskId;

const YES_TOKENS: [&str; 2] = ["y", "yes"];
const NO_TOKENS: [&str; 2] = ["n", "no"];

pub fn read_int<I: LineIo + ?Sized>(io: &mut I, prompt: &str) -> Result<i64, ConsoleError> {
    loop {
        let line = io.read_line(prompt)?;
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                tracing::debug!(input = %line, "rejected non-integer input");
                io.write_line(INVALID_INTEGER)?;
            }
        }
    }
}

pub fn read_task_id<I: LineIo + ?Sized>(io: &mut I, prompt: &str) -> Result<TaskId, ConsoleError> {
    read_int(io, prompt).map(TaskId::new)
}

/// Show the menu and read a selection, re-showing the menu after an
/// out-of-range number.
pub fn read_menu_choice<I: LineIo + ?Sized>(io: &mut I) -> Result<MenuChoice, ConsoleError> {
    loop {
        menu::render_menu(io)?;
        let number = read_int(io, PROMPT_CHOICE)?;
        match MenuChoice::try_from(number) {
            Ok(choice) => return Ok(choice),
            Err(value) => {
                tracing::debug!(value, "menu selection out of range");
                io.write_line(&format!("Option {} not valid. Please choose 0-5.", value))?;
            }
        }
    }
}

pub fn confirm<I: LineIo + ?Sized>(io: &mut I, prompt: &str) -> Result<bool, ConsoleError> {
    loop {
        let answer = io.read_line(prompt)?.trim().to_lowercase();
        if YES_TOKENS.contains(&answer.as_str()) {
            return Ok(true);
        }
        if NO_TOKENS.contains(&answer.as_str()) {
            return Ok(false);
        }
        io.write_line(INVALID_YES_NO)?;
    }
}

/// Read free text with surrounding whitespace removed.
pub fn read_text<I: LineIo + ?Sized>(io: &mut I, prompt: &str) -> Result<String, ConsoleError> {
    Ok(io.read_line(prompt)?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::testing::{output, scripted};
    use rstest::rstest;

    #[test]
    fn read_int_retries_until_integer() {
        let mut console = scripted(&["abc", "", "4.5", " 12 "]);
        assert_eq!(read_int(&mut console, "n: ").unwrap(), 12);

        let out = output(&console);
        assert_eq!(out.matches(INVALID_INTEGER).count(), 3);
        assert_eq!(out.matches("n: ").count(), 4);
    }

    #[test]
    fn read_int_accepts_negative_numbers() {
        let mut console = scripted(&["-8"]);
        assert_eq!(read_int(&mut console, "").unwrap(), -8);
    }

    #[test]
    fn read_int_propagates_cancellation() {
        let mut console = scripted(&["nope"]);
        assert!(matches!(
            read_int(&mut console, ""),
            Err(ConsoleError::Cancelled)
        ));
    }

    #[test]
    fn menu_choice_rejects_out_of_range_and_redisplays() {
        let mut console = scripted(&["9", "x", "3"]);
        assert_eq!(read_menu_choice(&mut console).unwrap(), MenuChoice::Update);

        let out = output(&console);
        assert!(out.contains("Option 9 not valid. Please choose 0-5."));
        assert!(out.contains(INVALID_INTEGER));
        assert_eq!(out.matches("Welcome to my Todo App").count(), 2);
    }

    #[rstest]
    #[case("y", true)]
    #[case("YES", true)]
    #[case("  Yes ", true)]
    #[case("n", false)]
    #[case("No", false)]
    fn confirm_accepts_vocabulary(#[case] answer: &str, #[case] expected: bool) {
        let mut console = scripted(&[answer]);
        assert_eq!(confirm(&mut console, "? ").unwrap(), expected);
        assert!(!output(&console).contains(INVALID_YES_NO));
    }

    #[test]
    fn confirm_retries_unknown_tokens() {
        let mut console = scripted(&["maybe", "yep", "n"]);
        assert!(!confirm(&mut console, "? ").unwrap());
        assert_eq!(output(&console).matches(INVALID_YES_NO).count(), 2);
    }

    #[test]
    fn read_text_trims_edges() {
        let mut console = scripted(&["  spaced   out  "]);
        assert_eq!(read_text(&mut console, "").unwrap(), "spaced   out");
    }
}
