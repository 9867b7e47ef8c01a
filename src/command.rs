//! Parsing of stdin lines into user intents.
//!
//! Plain text is a guess. Lines starting with `/` are commands; pointer
//! commands take surface coordinates in pixels.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use canvas::geom::Point;
use canvas::input::Tool;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Guess(String),
    Start,
    Choose(String),
    Tool(Tool),
    Color(String),
    Size(f64),
    Down(Point),
    Move(Point),
    Up,
    Leave,
    Click(Point),
    Undo,
    Clear,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: /{0}")]
    Unknown(String),
    #[error("usage: /{command} {expected}")]
    Usage { command: &'static str, expected: &'static str },
    #[error("not a number: {0}")]
    BadNumber(String),
}

/// Parse one line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown commands and bad arguments.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Some(Command::Guess(line.to_owned())));
    };
    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match name {
        "start" => Command::Start,
        "choose" if !args.is_empty() => Command::Choose(args.join(" ")),
        "choose" => return Err(CommandError::Usage { command: "choose", expected: "<word>" }),
        "tool" => match args.as_slice() {
            ["pencil"] => Command::Tool(Tool::Pencil),
            ["bucket"] => Command::Tool(Tool::Bucket),
            _ => return Err(CommandError::Usage { command: "tool", expected: "pencil|bucket" }),
        },
        "color" => match args.as_slice() {
            [hex] => Command::Color((*hex).to_owned()),
            _ => return Err(CommandError::Usage { command: "color", expected: "#rrggbb" }),
        },
        "size" => match args.as_slice() {
            [size] => Command::Size(number(size)?),
            _ => return Err(CommandError::Usage { command: "size", expected: "<n>" }),
        },
        "down" => Command::Down(point("down", &args)?),
        "move" => Command::Move(point("move", &args)?),
        "click" => Command::Click(point("click", &args)?),
        "up" => Command::Up,
        "leave" => Command::Leave,
        "undo" => Command::Undo,
        "clear" => Command::Clear,
        "quit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_owned())),
    };
    Ok(Some(command))
}

fn point(command: &'static str, args: &[&str]) -> Result<Point, CommandError> {
    match args {
        [x, y] => Ok(Point::new(number(x)?, number(y)?)),
        _ => Err(CommandError::Usage { command, expected: "<x> <y>" }),
    }
}

fn number(text: &str) -> Result<f64, CommandError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CommandError::BadNumber(text.to_owned())),
    }
}
