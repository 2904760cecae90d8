//! Drawing commands and the line parser
//!
//! One command per line: a case-sensitive letter followed by its
//! arguments. The letter may touch the first argument (`C20 4`) or be
//! separated from it by whitespace (`C 20 4`); arguments are separated by
//! any run of whitespace.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::canvas::Point;
use crate::errors::{PainterError, Result};

fn command_pattern() -> &'static Regex {
    lazy_static::lazy_static! {
        static ref REGEX: Regex =
            Regex::new(r"^\s*(?P<name>[A-Za-z]+)(?P<args>(?:\s.*|[-+0-9].*)?)$").expect("valid command regex");
    }
    &REGEX
}

/// A parsed drawing command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `C w h` - create or replace the canvas
    NewCanvas { width: i64, height: i64 },
    /// `L x1 y1 x2 y2` - horizontal or vertical line
    Line { from: Point, to: Point },
    /// `R x1 y1 x2 y2` - rectangle border
    Rectangle { corner: Point, opposite: Point },
    /// `B x y c` - bucket fill
    Fill { seed: Point, color: char },
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self> {
        let caps = command_pattern()
            .captures(line)
            .ok_or_else(|| PainterError::parse(line, "expected a command letter followed by arguments"))?;
        let name = &caps["name"];
        let args: Vec<&str> = caps["args"].split_whitespace().collect();

        match name {
            "C" => {
                let [w, h] = numbers::<2>(line, name, &args)?;
                Ok(Command::NewCanvas {
                    width: w,
                    height: h,
                })
            }
            "L" => {
                let [x1, y1, x2, y2] = numbers::<4>(line, name, &args)?;
                Ok(Command::Line {
                    from: Point::new(x1, y1),
                    to: Point::new(x2, y2),
                })
            }
            "R" => {
                let [x1, y1, x2, y2] = numbers::<4>(line, name, &args)?;
                Ok(Command::Rectangle {
                    corner: Point::new(x1, y1),
                    opposite: Point::new(x2, y2),
                })
            }
            "B" => {
                let [x, y, color] = arity::<3>(line, name, &args)?;
                let color = single_char(color)
                    .ok_or_else(|| PainterError::parse(line, format!("fill colour '{color}' must be a single character")))?;
                Ok(Command::Fill {
                    seed: Point::new(number(line, x)?, number(line, y)?),
                    color,
                })
            }
            other => Err(PainterError::parse(line, format!("unknown command '{other}'"))),
        }
    }

    /// Command letter
    pub fn letter(&self) -> char {
        match self {
            Command::NewCanvas { .. } => 'C',
            Command::Line { .. } => 'L',
            Command::Rectangle { .. } => 'R',
            Command::Fill { .. } => 'B',
        }
    }

    /// Whether this command needs an existing canvas
    pub fn requires_canvas(&self) -> bool {
        !matches!(self, Command::NewCanvas { .. })
    }
}

impl FromStr for Command {
    type Err = PainterError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::NewCanvas { width, height } => write!(f, "C {width} {height}"),
            Command::Line { from, to } => write!(f, "L {} {} {} {}", from.x, from.y, to.x, to.y),
            Command::Rectangle { corner, opposite } => {
                write!(f, "R {} {} {} {}", corner.x, corner.y, opposite.x, opposite.y)
            }
            Command::Fill { seed, color } => write!(f, "B {} {} {color}", seed.x, seed.y),
        }
    }
}

fn arity<'a, const N: usize>(line: &str, name: &str, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        PainterError::parse(
            line,
            format!("'{name}' expects {N} arguments, got {}", args.len()),
        )
    })
}

fn numbers<const N: usize>(line: &str, name: &str, args: &[&str]) -> Result<[i64; N]> {
    let tokens = arity::<N>(line, name, args)?;
    let mut out = [0i64; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = number(line, token)?;
    }
    Ok(out)
}

fn number(line: &str, token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|e| PainterError::parse(line, format!("invalid number '{token}': {e}")))
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C 20 4", Command::NewCanvas { width: 20, height: 4 })]
    #[case("C20 4", Command::NewCanvas { width: 20, height: 4 })]
    #[case("  C   20\t4  ", Command::NewCanvas { width: 20, height: 4 })]
    #[case("C 10 -5", Command::NewCanvas { width: 10, height: -5 })]
    #[case("L 1 2 6 2", Command::Line { from: Point::new(1, 2), to: Point::new(6, 2) })]
    #[case("L6 3 6 4", Command::Line { from: Point::new(6, 3), to: Point::new(6, 4) })]
    #[case("R 16 1 20 3", Command::Rectangle { corner: Point::new(16, 1), opposite: Point::new(20, 3) })]
    #[case("B 10 3 o", Command::Fill { seed: Point::new(10, 3), color: 'o' })]
    #[case("B10 3 #", Command::Fill { seed: Point::new(10, 3), color: '#' })]
    fn test_parse_valid(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line).unwrap(), expected);
    }

    #[rstest]
    #[case("", "expected a command letter")]
    #[case("42", "expected a command letter")]
    #[case("Can 10 5", "unknown command 'Can'")]
    #[case("Li 5 3 t 10", "unknown command 'Li'")]
    #[case("X 1 2", "unknown command 'X'")]
    #[case("c 10 5", "unknown command 'c'")]
    #[case("C 10", "expects 2 arguments, got 1")]
    #[case("L 1 2 3", "expects 4 arguments, got 3")]
    #[case("R 1 2 3 4 5", "expects 4 arguments, got 5")]
    #[case("L 5 3 t 10", "invalid number 't'")]
    #[case("B 1 1 oo", "must be a single character")]
    #[case("C 99999999999999999999 1", "invalid number")]
    fn test_parse_invalid(#[case] line: &str, #[case] reason: &str) {
        match Command::parse(line) {
            Err(PainterError::ParseError { line: raw, reason: why }) => {
                assert_eq!(raw.as_str(), line);
                assert!(why.contains(reason), "reason '{why}' should contain '{reason}'");
            }
            other => panic!("expected parse error for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trips_canonical_form() {
        for line in ["C 20 4", "L 1 2 6 2", "R 16 1 20 3", "B 10 3 o"] {
            let cmd: Command = line.parse().unwrap();
            assert_eq!(cmd.to_string(), line);
        }
    }

    #[test]
    fn test_requires_canvas() {
        assert!(!Command::parse("C 1 1").unwrap().requires_canvas());
        assert!(Command::parse("B 1 1 o").unwrap().requires_canvas());
        assert_eq!(Command::parse("R 1 1 2 2").unwrap().letter(), 'R');
    }
}
