//! Path data parser.
//!
//! For the path data grammar see <http://www.w3.org/TR/SVG/paths.html#PathData>.
//! The parser accepts the compact forms fonts use in practice: separators may
//! be commas or whitespace, and may be omitted entirely before a sign or a
//! second decimal point (`10-5`, `0.5.5`).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::PathError;
use crate::instruction::{Command, PathInstruction, invert_y};

fn re_segment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([mzlhvcsqta])([^mzlhvcsqta]*)")
            .expect("regex pattern is valid and should always compile")
    })
}

fn re_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?")
            .expect("regex pattern is valid and should always compile")
    })
}

fn is_separator(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == ',')
}

/// Parse a path data string into instructions.
///
/// When `invert_y` is set, y parameters are negated (see [`invert_y`]).
/// Empty or whitespace-only input yields an empty list.
///
/// # Errors
///
/// - [`PathError::MissingCommand`] if text precedes the first command
/// - [`PathError::UnsupportedCommand`] for elliptical arcs (`A`/`a`)
/// - [`PathError::InvalidToken`] for text that is neither number nor separator
/// - [`PathError::Arity`] if a command has the wrong number of parameters
pub fn parse(data: &str, invert_y_axis: bool) -> Result<Vec<PathInstruction>, PathError> {
    let mut instructions = Vec::new();
    let mut expected_start = 0;

    for captures in re_segment().captures_iter(data) {
        let (Some(whole), Some(letter), Some(body)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };

        let leading = &data[expected_start..whole.start()];
        if !is_separator(leading) {
            return Err(PathError::MissingCommand(leading.trim().to_string()));
        }
        expected_start = whole.end();

        let letter = letter.as_str().chars().next().unwrap_or_default();
        let command = match Command::from_char(letter) {
            Ok(command) => command,
            Err(err) => {
                log::warn!("Rejecting path data with unsupported command '{}'", letter);
                return Err(err);
            }
        };

        let params = parse_params(command, body.as_str())?;
        instructions.push(PathInstruction::from_command(command, params)?);
    }

    let trailing = &data[expected_start..];
    if !is_separator(trailing) {
        return Err(PathError::MissingCommand(trailing.trim().to_string()));
    }

    if invert_y_axis {
        invert_y(&mut instructions);
    }
    Ok(instructions)
}

fn parse_params(command: Command, body: &str) -> Result<Vec<f64>, PathError> {
    let mut params = Vec::new();
    let mut last_end = 0;

    for number in re_number().find_iter(body) {
        let gap = &body[last_end..number.start()];
        if !is_separator(gap) {
            return Err(invalid_token(command, gap));
        }
        let value = number
            .as_str()
            .parse::<f64>()
            .map_err(|_| invalid_token(command, number.as_str()))?;
        params.push(value);
        last_end = number.end();
    }

    let rest = &body[last_end..];
    if !is_separator(rest) {
        return Err(invalid_token(command, rest));
    }
    Ok(params)
}

fn invalid_token(command: Command, token: &str) -> PathError {
    PathError::InvalidToken {
        command: command.letter(),
        token: token.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{CommandKind, serialize};

    #[test]
    fn test_empty_input() {
        assert!(parse("", false).unwrap().is_empty());
        assert!(parse("  \n ", true).unwrap().is_empty());
    }

    #[test]
    fn test_compact_separators() {
        let result = parse("M10-5l.5.5,1e1 -2E-1", false).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].params, vec![10.0, -5.0]);
        assert_eq!(result[1].params, vec![0.5, 0.5, 10.0, -0.2]);
    }

    #[test]
    fn test_close_path() {
        let result = parse("M0 0L10 0Z", false).unwrap();
        assert_eq!(result[2].command.kind, CommandKind::ClosePath);
        assert!(result[2].params.is_empty());
    }

    #[test]
    fn test_rejects_arc() {
        assert_eq!(
            parse("M0 0A5 5 0 0 1 10 10", false),
            Err(PathError::UnsupportedCommand('A'))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse("M0 0L10 x 5", false),
            Err(PathError::InvalidToken { command: 'L', .. })
        ));
        assert_eq!(
            parse("12 M0 0", false),
            Err(PathError::MissingCommand("12".to_string()))
        );
    }

    #[test]
    fn test_rejects_bad_arity() {
        assert!(matches!(
            parse("M0 0C1 2 3", false),
            Err(PathError::Arity {
                command: 'C',
                arity: 6,
                count: 3
            })
        ));
    }

    #[test]
    fn test_round_trip_structure() {
        let source = "M124 570v22q0,392,152,665.5t344 354.5z";
        let first = parse(source, false).unwrap();
        let second = parse(&serialize(&first), false).unwrap();
        assert_eq!(first, second);
    }
}
