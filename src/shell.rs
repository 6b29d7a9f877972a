//! Line-driven front end over a [`Session`].
//!
//! Each input line is one form action: generate, copy, move the length
//! slider or toggle a character class. The loop is generic over its reader and
//! writer so tests can script it.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::clipboard::Clipboard;
use crate::session::{Clock, CopyOutcome, Session};

pub const HELP: &str =
    "commands: g (generate), c (copy), l N (length 4-32), u/n/s (toggle uppercase/numbers/symbols), show, q (quit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Copy,
    Length(usize),
    ToggleUppercase,
    ToggleNumbers,
    ToggleSymbols,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("invalid length: {0}")]
    InvalidLength(String),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let cmd = match parts.next() {
            Some(c) => c,
            None => return Err(CommandError::Unknown(String::new())),
        };
        match cmd {
            "g" | "generate" => Ok(Command::Generate),
            "c" | "copy" => Ok(Command::Copy),
            "l" | "length" => {
                let arg = parts.next().unwrap_or_default();
                arg.parse()
                    .map(Command::Length)
                    .map_err(|_| CommandError::InvalidLength(arg.to_owned()))
            }
            "u" | "upper" => Ok(Command::ToggleUppercase),
            "n" | "numbers" => Ok(Command::ToggleNumbers),
            "s" | "symbols" => Ok(Command::ToggleSymbols),
            "show" => Ok(Command::Show),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

/// Apply one command. Returns `false` when the session should end.
pub fn apply<C, K, W>(session: &mut Session<C, K>, cmd: Command, out: &mut W) -> io::Result<bool>
where
    C: Clipboard,
    K: Clock,
    W: Write,
{
    match cmd {
        Command::Generate => {
            let password = session.generate();
            writeln!(out, "{}", password)?;
        }
        Command::Copy => match session.copy() {
            CopyOutcome::Copied => writeln!(out, "✓ Copied!")?,
            CopyOutcome::NothingToCopy => writeln!(out, "nothing to copy, generate first")?,
            CopyOutcome::Failed => writeln!(out, "copy failed")?,
        },
        Command::Length(n) => {
            let stored = session.set_length(n);
            writeln!(out, "length: {}", stored)?;
        }
        Command::ToggleUppercase => {
            let on = !session.config().include_uppercase;
            session.set_include_uppercase(on);
            writeln!(out, "uppercase: {}", on_off(on))?;
        }
        Command::ToggleNumbers => {
            let on = !session.config().include_numbers;
            session.set_include_numbers(on);
            writeln!(out, "numbers: {}", on_off(on))?;
        }
        Command::ToggleSymbols => {
            let on = !session.config().include_symbols;
            session.set_include_symbols(on);
            writeln!(out, "symbols: {}", on_off(on))?;
        }
        Command::Show => {
            let c = session.config();
            writeln!(
                out,
                "length: {}, uppercase: {}, numbers: {}, symbols: {}",
                c.length(),
                on_off(c.include_uppercase),
                on_off(c.include_numbers),
                on_off(c.include_symbols)
            )?;
            match session.password() {
                Some(p) => writeln!(out, "password: {}", p)?,
                None => writeln!(out, "password: (none)")?,
            }
            writeln!(out, "copied: {}", session.is_copied())?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Read commands from `input` until EOF or `q`.
pub fn run<C, K, R, W>(session: &mut Session<C, K>, input: R, mut out: W) -> io::Result<()>
where
    C: Clipboard,
    K: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", HELP)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(cmd) => {
                if !apply(session, cmd, &mut out)? {
                    break;
                }
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                writeln!(out, "{}", HELP)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboard;
    use crate::config::GenerationConfig;

    #[test]
    fn test_parse() {
        assert_eq!("g".parse::<Command>(), Ok(Command::Generate));
        assert_eq!("copy".parse::<Command>(), Ok(Command::Copy));
        assert_eq!("l 16".parse::<Command>(), Ok(Command::Length(16)));
        assert_eq!(
            "l x".parse::<Command>(),
            Err(CommandError::InvalidLength("x".into()))
        );
        assert_eq!(
            "l".parse::<Command>(),
            Err(CommandError::InvalidLength(String::new()))
        );
        assert_eq!(
            "zap".parse::<Command>(),
            Err(CommandError::Unknown("zap".into()))
        );
        assert_eq!("  s  ".parse::<Command>(), Ok(Command::ToggleSymbols));
    }

    #[test]
    fn test_scripted_session() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write().times(1).returning(|_| Ok(()));
        let mut session = Session::new(GenerationConfig::default(), clipboard);

        let script = "c\nl 99\nu\nn\ns\ng\nc\nshow\nq\ng\n";
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("nothing to copy"));
        assert!(text.contains("length: 32"));
        assert!(text.contains("uppercase: off"));
        assert!(text.contains("✓ Copied!"));
        assert!(text.contains("copied: true"));

        // `q` stops the loop before the trailing `g`.
        let password = session.password().unwrap();
        assert_eq!(password.len(), 32);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(text.matches(password).count(), 2);
    }

    #[test]
    fn test_unknown_command_prints_help() {
        let mut session = Session::new(GenerationConfig::default(), MockClipboard::new());
        let mut out = Vec::new();
        run(&mut session, "bogus\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown command: bogus"));
        assert_eq!(text.matches(HELP).count(), 2);
    }
}
