//! Gesture script parsing.
//!
//! # Responsibility
//! - Turn one command per line into wall gestures.
//! - Report the first malformed line with its line number.
//!
//! # Invariants
//! - Blank lines and `#` comments produce no step.
//! - `\n` inside a text argument stands for a newline.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use stickywall_core::{Gesture, Key, NoteId};

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(#.*)?$").expect("valid comment regex"));
static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<cmd>[a-z][a-z-]*)(?:\s+(?P<arg>.*?))?\s*$").expect("valid command regex")
});

/// One parsed script step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Gesture(Gesture),
    /// Print the wall at this point of the script.
    Show,
}

/// Script parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Line does not start with a command word.
    Malformed { line: usize },
    UnknownCommand { line: usize, command: String },
    MissingArgument { line: usize, command: String },
    UnexpectedArgument { line: usize, command: String },
    InvalidNoteId { line: usize, value: String },
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { line } => write!(f, "line {line}: expected a command"),
            Self::UnknownCommand { line, command } => {
                write!(f, "line {line}: unknown command `{command}`")
            }
            Self::MissingArgument { line, command } => {
                write!(f, "line {line}: `{command}` needs an argument")
            }
            Self::UnexpectedArgument { line, command } => {
                write!(f, "line {line}: `{command}` takes no argument")
            }
            Self::InvalidNoteId { line, value } => {
                write!(f, "line {line}: invalid note id `{value}`")
            }
        }
    }
}

impl Error for ScriptError {}

/// Parses a whole script.
pub fn parse_script(source: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        if let Some(step) = parse_line(index + 1, raw)? {
            steps.push(step);
        }
    }
    Ok(steps)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Step>, ScriptError> {
    if COMMENT_RE.is_match(raw) {
        return Ok(None);
    }
    let caps = COMMAND_RE
        .captures(raw)
        .ok_or(ScriptError::Malformed { line })?;
    let command = &caps["cmd"];
    let arg = caps
        .name("arg")
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty());

    let no_arg = |step: Step| match arg {
        None => Ok(step),
        Some(_) => Err(ScriptError::UnexpectedArgument {
            line,
            command: command.to_string(),
        }),
    };
    let note_id = || -> Result<NoteId, ScriptError> {
        let value = arg.ok_or_else(|| ScriptError::MissingArgument {
            line,
            command: command.to_string(),
        })?;
        value.parse().map_err(|_| ScriptError::InvalidNoteId {
            line,
            value: value.to_string(),
        })
    };
    let text = || unescape(arg.unwrap_or_default());

    let step = match command {
        "type" => Step::Gesture(Gesture::TypeNewNote(text())),
        "enter" => no_arg(Step::Gesture(Gesture::SubmitNewNote { shift: false }))?,
        "shift-enter" => no_arg(Step::Gesture(Gesture::SubmitNewNote { shift: true }))?,
        "dblclick" => Step::Gesture(Gesture::DoubleClick(note_id()?)),
        "delete" => Step::Gesture(Gesture::Delete(note_id()?)),
        "edit" => Step::Gesture(Gesture::TypeEdit(text())),
        "edit-enter" => no_arg(Step::Gesture(Gesture::EditKey {
            key: Key::Enter,
            shift: false,
        }))?,
        "edit-shift-enter" => no_arg(Step::Gesture(Gesture::EditKey {
            key: Key::Enter,
            shift: true,
        }))?,
        "escape" => no_arg(Step::Gesture(Gesture::EditKey {
            key: Key::Escape,
            shift: false,
        }))?,
        "click-outside" => no_arg(Step::Gesture(Gesture::ClickOutside))?,
        "show" => no_arg(Step::Show)?,
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };
    Ok(Some(step))
}

fn unescape(value: &str) -> String {
    value.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::{parse_script, ScriptError, Step};
    use stickywall_core::{Gesture, Key};

    #[test]
    fn parses_every_command() {
        let steps = parse_script(
            "# groceries\n\
             type   milk and\\nhoney\n\
             enter\n\
             shift-enter\n\
             \n\
             dblclick 1\n\
             edit oat milk\n\
             edit-shift-enter\n\
             edit-enter\n\
             escape\n\
             delete 1\n\
             click-outside\n\
             show\n",
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                Step::Gesture(Gesture::TypeNewNote("milk and\nhoney".to_string())),
                Step::Gesture(Gesture::SubmitNewNote { shift: false }),
                Step::Gesture(Gesture::SubmitNewNote { shift: true }),
                Step::Gesture(Gesture::DoubleClick(1)),
                Step::Gesture(Gesture::TypeEdit("oat milk".to_string())),
                Step::Gesture(Gesture::EditKey {
                    key: Key::Enter,
                    shift: true
                }),
                Step::Gesture(Gesture::EditKey {
                    key: Key::Enter,
                    shift: false
                }),
                Step::Gesture(Gesture::EditKey {
                    key: Key::Escape,
                    shift: false
                }),
                Step::Gesture(Gesture::Delete(1)),
                Step::Gesture(Gesture::ClickOutside),
                Step::Show,
            ]
        );
    }

    #[test]
    fn bare_type_and_edit_mean_empty_text() {
        let steps = parse_script("type\nedit").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Gesture(Gesture::TypeNewNote(String::new())),
                Step::Gesture(Gesture::TypeEdit(String::new())),
            ]
        );
    }

    #[test]
    fn reports_line_numbers() {
        assert_eq!(
            parse_script("enter\nfly away").unwrap_err(),
            ScriptError::UnknownCommand {
                line: 2,
                command: "fly".to_string()
            }
        );
        assert_eq!(
            parse_script("delete one").unwrap_err(),
            ScriptError::InvalidNoteId {
                line: 1,
                value: "one".to_string()
            }
        );
        assert_eq!(
            parse_script("dblclick").unwrap_err(),
            ScriptError::MissingArgument {
                line: 1,
                command: "dblclick".to_string()
            }
        );
        assert_eq!(
            parse_script("enter now").unwrap_err(),
            ScriptError::UnexpectedArgument {
                line: 1,
                command: "enter".to_string()
            }
        );
        assert_eq!(
            parse_script("42").unwrap_err(),
            ScriptError::Malformed { line: 1 }
        );
    }
}
