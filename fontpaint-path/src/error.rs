//! Typed error types for fontpaint-path.

use thiserror::Error;

/// Errors produced while parsing or constructing path instructions.
///
/// A parse error only concerns the outline being parsed; callers decide
/// whether to fall back to another outline or to propagate it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path data contained text before its first command letter.
    #[error("Path data must start with a command, found '{0}'")]
    MissingCommand(String),

    /// The command letter is recognised but deliberately unsupported
    /// (elliptical arcs).
    #[error("Unsupported path command '{0}'")]
    UnsupportedCommand(char),

    /// The character is not a path command letter at all.
    #[error("Unknown path command '{0}'")]
    UnknownCommand(char),

    /// A parameter list contained something that is neither a number nor a separator.
    #[error("Invalid token '{token}' in '{command}' instruction")]
    InvalidToken {
        /// Command letter of the instruction being parsed.
        command: char,
        /// The offending text.
        token: String,
    },

    /// The number of parameters is not a multiple of the command's arity.
    #[error("Command '{command}' takes parameters in groups of {arity}, got {count}")]
    Arity {
        /// Command letter.
        command: char,
        /// Parameters per group for this command.
        arity: usize,
        /// Parameters actually supplied.
        count: usize,
    },
}
