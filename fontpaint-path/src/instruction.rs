//! Typed path instructions and their parameter layouts.

use std::fmt;

use crate::error::PathError;

/// The drawing operation of a path command, independent of absolute/relative case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M`: start a new subpath.
    MoveTo,
    /// `L`: straight line.
    LineTo,
    /// `H`: horizontal line (x only).
    HorizontalTo,
    /// `V`: vertical line (y only).
    VerticalTo,
    /// `C`: cubic Bézier with two control points.
    CubicTo,
    /// `S`: cubic Bézier whose first control point is reflected.
    SmoothCubicTo,
    /// `Q`: quadratic Bézier.
    QuadTo,
    /// `T`: quadratic Bézier whose control point is reflected.
    SmoothQuadTo,
    /// `Z`: close the current subpath.
    ClosePath,
}

impl CommandKind {
    /// Uppercase command letter for this kind.
    pub const fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalTo => 'H',
            CommandKind::VerticalTo => 'V',
            CommandKind::CubicTo => 'C',
            CommandKind::SmoothCubicTo => 'S',
            CommandKind::QuadTo => 'Q',
            CommandKind::SmoothQuadTo => 'T',
            CommandKind::ClosePath => 'Z',
        }
    }

    /// Number of parameters in one parameter group.
    pub const fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => 2,
            CommandKind::HorizontalTo | CommandKind::VerticalTo => 1,
            CommandKind::CubicTo => 6,
            CommandKind::SmoothCubicTo | CommandKind::QuadTo => 4,
            CommandKind::ClosePath => 0,
        }
    }

    /// Index of the endpoint's x parameter within a group, if the command has one.
    pub const fn endpoint_x(self) -> Option<usize> {
        match self {
            CommandKind::MoveTo
            | CommandKind::LineTo
            | CommandKind::SmoothQuadTo
            | CommandKind::HorizontalTo => Some(0),
            CommandKind::CubicTo => Some(4),
            CommandKind::SmoothCubicTo | CommandKind::QuadTo => Some(2),
            CommandKind::VerticalTo | CommandKind::ClosePath => None,
        }
    }

    /// Index of the endpoint's y parameter within a group, if the command has one.
    pub const fn endpoint_y(self) -> Option<usize> {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => Some(1),
            CommandKind::VerticalTo => Some(0),
            CommandKind::CubicTo => Some(5),
            CommandKind::SmoothCubicTo | CommandKind::QuadTo => Some(3),
            CommandKind::HorizontalTo | CommandKind::ClosePath => None,
        }
    }
}

/// A path command letter: a [`CommandKind`] plus its absolute/relative case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    pub kind: CommandKind,
    pub relative: bool,
}

impl Command {
    pub const fn new(kind: CommandKind, relative: bool) -> Self {
        Self { kind, relative }
    }

    /// Map a command letter to a command.
    ///
    /// `A`/`a` is reported as [`PathError::UnsupportedCommand`]; any other
    /// letter outside the path alphabet is [`PathError::UnknownCommand`].
    pub fn from_char(letter: char) -> Result<Self, PathError> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalTo,
            'V' => CommandKind::VerticalTo,
            'C' => CommandKind::CubicTo,
            'S' => CommandKind::SmoothCubicTo,
            'Q' => CommandKind::QuadTo,
            'T' => CommandKind::SmoothQuadTo,
            'Z' => CommandKind::ClosePath,
            'A' => return Err(PathError::UnsupportedCommand(letter)),
            _ => return Err(PathError::UnknownCommand(letter)),
        };
        Ok(Self::new(kind, letter.is_ascii_lowercase()))
    }

    /// The command letter, lowercase when relative.
    pub fn letter(self) -> char {
        let letter = self.kind.letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single drawing instruction: one command letter and all of its parameters.
///
/// `params.len()` is always a multiple of the command's arity, and non-zero
/// for every command except `Z`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInstruction {
    pub command: Command,
    pub params: Vec<f64>,
}

impl PathInstruction {
    /// Build an instruction from a command letter, validating the parameter count.
    pub fn new(letter: char, params: Vec<f64>) -> Result<Self, PathError> {
        Self::from_command(Command::from_char(letter)?, params)
    }

    /// Build an instruction from an already-resolved command.
    pub fn from_command(command: Command, params: Vec<f64>) -> Result<Self, PathError> {
        let arity = command.kind.arity();
        let valid = if arity == 0 {
            params.is_empty()
        } else {
            !params.is_empty() && params.len() % arity == 0
        };
        if !valid {
            return Err(PathError::Arity {
                command: command.letter(),
                arity,
                count: params.len(),
            });
        }
        Ok(Self { command, params })
    }

    /// Iterate over the parameter groups of this instruction.
    pub fn groups(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics; Z has no groups
        let arity = self.command.kind.arity().max(1);
        self.params.chunks(arity).filter(move |g| g.len() == arity)
    }
}

impl fmt::Display for PathInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

/// Serialize instructions back into a path data string.
///
/// Each instruction is written as its letter followed by its parameters
/// separated by single spaces; instructions are concatenated directly.
pub fn serialize(instructions: &[PathInstruction]) -> String {
    instructions.iter().map(ToString::to_string).collect()
}

/// Negate the y-bearing parameters of every instruction in place.
///
/// SVG fonts use a y-up coordinate system, whereas SVG documents and canvases
/// are y-down. All parameters of `V` are negated, every second parameter of
/// `M`/`L`/`T`/`C`/`S`/`Q`, and none of `H`/`Z`. Applying it twice restores
/// the original values.
pub fn invert_y(instructions: &mut [PathInstruction]) {
    for instruction in instructions {
        match instruction.command.kind {
            CommandKind::VerticalTo => {
                instruction.params.iter_mut().for_each(negate);
            }
            CommandKind::HorizontalTo | CommandKind::ClosePath => {}
            _ => {
                instruction
                    .params
                    .iter_mut()
                    .skip(1)
                    .step_by(2)
                    .for_each(negate);
            }
        }
    }
}

/// Negate without producing `-0`, so inverted zeros still serialize as `0`.
fn negate(value: &mut f64) {
    *value = 0.0 - *value;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_char_case() {
        let upper = Command::from_char('Q').unwrap();
        let lower = Command::from_char('q').unwrap();
        assert_eq!(upper.kind, CommandKind::QuadTo);
        assert!(!upper.relative);
        assert!(lower.relative);
        assert_eq!(lower.letter(), 'q');
    }

    #[test]
    fn test_arc_is_unsupported() {
        assert_eq!(
            Command::from_char('a'),
            Err(PathError::UnsupportedCommand('a'))
        );
        assert_eq!(Command::from_char('X'), Err(PathError::UnknownCommand('X')));
    }

    #[test]
    fn test_arity_mismatch_is_rejected() {
        let err = PathInstruction::new('C', vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            PathError::Arity {
                command: 'C',
                arity: 6,
                count: 3
            }
        );
        assert!(PathInstruction::new('M', vec![]).is_err());
        assert!(PathInstruction::new('Z', vec![1.0]).is_err());
        assert!(PathInstruction::new('z', vec![]).is_ok());
    }

    #[test]
    fn test_serialize_mixed_case() {
        let instructions = vec![
            PathInstruction::new('M', vec![5.0, 2.0]).unwrap(),
            PathInstruction::new('q', vec![0.0, 372.0, 784.0, 62.4]).unwrap(),
        ];
        assert_eq!(serialize(&instructions), "M5 2q0 372 784 62.4");
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_invert_y_layouts() {
        let mut instructions = vec![
            PathInstruction::new('V', vec![11.0, -16.0, 21.0, 31.0]).unwrap(),
            PathInstruction::new('H', vec![10.0, -15.0, 20.0, 30.0]).unwrap(),
            PathInstruction::new('l', vec![10.0, -15.0, 20.0, 30.0]).unwrap(),
            PathInstruction::new('c', vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap(),
        ];
        invert_y(&mut instructions);
        assert_eq!(instructions[0].params, vec![-11.0, 16.0, -21.0, -31.0]);
        assert_eq!(instructions[1].params, vec![10.0, -15.0, 20.0, 30.0]);
        assert_eq!(instructions[2].params, vec![10.0, 15.0, 20.0, -30.0]);
        assert_eq!(instructions[3].params, vec![1.0, -2.0, 3.0, -4.0, 5.0, -6.0]);
    }

    #[test]
    fn test_invert_zero_stays_positive() {
        let mut instructions = vec![PathInstruction::new('M', vec![0.0, 0.0]).unwrap()];
        invert_y(&mut instructions);
        assert_eq!(serialize(&instructions), "M0 0");
    }

    #[test]
    fn test_groups() {
        let instruction = PathInstruction::new('l', vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let groups: Vec<&[f64]> = instruction.groups().collect();
        assert_eq!(groups, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);

        let close = PathInstruction::new('Z', vec![]).unwrap();
        assert_eq!(close.groups().count(), 0);
    }
}
