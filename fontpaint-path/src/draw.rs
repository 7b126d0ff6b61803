//! Conversion of path instructions into absolute drawing commands.
//!
//! The resulting [`DrawCommand`]s map one-to-one onto a canvas-style drawing
//! API (`beginPath`, `moveTo`, `lineTo`, `bezierCurveTo`,
//! `quadraticCurveTo`, `closePath`), so any backend can replay them without
//! knowing about relative coordinates or shorthand commands.

use crate::instruction::{CommandKind, PathInstruction};

/// A single absolute drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    BezierCurveTo {
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        cpx: f64,
        cpy: f64,
        x: f64,
        y: f64,
    },
    ClosePath,
}

impl DrawCommand {
    /// Canvas-style method name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::BeginPath => "beginPath",
            DrawCommand::MoveTo { .. } => "moveTo",
            DrawCommand::LineTo { .. } => "lineTo",
            DrawCommand::BezierCurveTo { .. } => "bezierCurveTo",
            DrawCommand::QuadraticCurveTo { .. } => "quadraticCurveTo",
            DrawCommand::ClosePath => "closePath",
        }
    }

    /// Parameters in canvas argument order.
    pub fn params(&self) -> Vec<f64> {
        match *self {
            DrawCommand::BeginPath | DrawCommand::ClosePath => Vec::new(),
            DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => vec![x, y],
            DrawCommand::BezierCurveTo {
                cp1x,
                cp1y,
                cp2x,
                cp2y,
                x,
                y,
            } => vec![cp1x, cp1y, cp2x, cp2y, x, y],
            DrawCommand::QuadraticCurveTo { cpx, cpy, x, y } => vec![cpx, cpy, x, y],
        }
    }

    /// Translate every coordinate of this command by `(dx, dy)`.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        match self {
            DrawCommand::BeginPath | DrawCommand::ClosePath => self,
            DrawCommand::MoveTo { x, y } => DrawCommand::MoveTo {
                x: x + dx,
                y: y + dy,
            },
            DrawCommand::LineTo { x, y } => DrawCommand::LineTo {
                x: x + dx,
                y: y + dy,
            },
            DrawCommand::BezierCurveTo {
                cp1x,
                cp1y,
                cp2x,
                cp2y,
                x,
                y,
            } => DrawCommand::BezierCurveTo {
                cp1x: cp1x + dx,
                cp1y: cp1y + dy,
                cp2x: cp2x + dx,
                cp2y: cp2y + dy,
                x: x + dx,
                y: y + dy,
            },
            DrawCommand::QuadraticCurveTo { cpx, cpy, x, y } => DrawCommand::QuadraticCurveTo {
                cpx: cpx + dx,
                cpy: cpy + dy,
                x: x + dx,
                y: y + dy,
            },
        }
    }
}

/// Running state while walking a path.
#[derive(Default)]
struct Pen {
    commands: Vec<DrawCommand>,
    cx: f64,
    cy: f64,
    subpath_start: Option<(f64, f64)>,
}

impl Pen {
    fn point(&self, relative: bool, x: f64, y: f64) -> (f64, f64) {
        if relative {
            (self.cx + x, self.cy + y)
        } else {
            (x, y)
        }
    }

    /// Control point for `S`/`T`: the previous control point mirrored around
    /// the cursor when the previous command was the same curve kind.
    fn reflected_control(&self, cubic: bool) -> (f64, f64) {
        let previous = match (self.commands.last(), cubic) {
            (Some(DrawCommand::BezierCurveTo { cp2x, cp2y, .. }), true) => Some((*cp2x, *cp2y)),
            (Some(DrawCommand::QuadraticCurveTo { cpx, cpy, .. }), false) => Some((*cpx, *cpy)),
            _ => None,
        };
        match previous {
            Some((px, py)) => (2.0 * self.cx - px, 2.0 * self.cy - py),
            None => (self.cx, self.cy),
        }
    }

    fn push(&mut self, command: DrawCommand, end: (f64, f64)) {
        self.commands.push(command);
        self.cx = end.0;
        self.cy = end.1;
    }

    fn instruction(&mut self, instruction: &PathInstruction) {
        let kind = instruction.command.kind;
        let relative = instruction.command.relative;

        if kind == CommandKind::ClosePath {
            if let Some(start) = self.subpath_start.take() {
                self.push(
                    DrawCommand::LineTo {
                        x: start.0,
                        y: start.1,
                    },
                    start,
                );
            }
            return;
        }

        if kind != CommandKind::MoveTo && self.subpath_start.is_none() {
            self.subpath_start = Some((self.cx, self.cy));
        }

        for (index, group) in instruction.groups().enumerate() {
            match kind {
                CommandKind::MoveTo => {
                    let (x, y) = self.point(relative, group[0], group[1]);
                    if index == 0 {
                        self.subpath_start = Some((x, y));
                        self.push(DrawCommand::MoveTo { x, y }, (x, y));
                    } else {
                        // extra coordinate pairs after a moveto are implicit linetos
                        self.push(DrawCommand::LineTo { x, y }, (x, y));
                    }
                }
                CommandKind::LineTo => {
                    let (x, y) = self.point(relative, group[0], group[1]);
                    self.push(DrawCommand::LineTo { x, y }, (x, y));
                }
                CommandKind::HorizontalTo => {
                    let x = if relative { self.cx + group[0] } else { group[0] };
                    let y = self.cy;
                    self.push(DrawCommand::LineTo { x, y }, (x, y));
                }
                CommandKind::VerticalTo => {
                    let x = self.cx;
                    let y = if relative { self.cy + group[0] } else { group[0] };
                    self.push(DrawCommand::LineTo { x, y }, (x, y));
                }
                CommandKind::CubicTo => {
                    let (cp1x, cp1y) = self.point(relative, group[0], group[1]);
                    let (cp2x, cp2y) = self.point(relative, group[2], group[3]);
                    let (x, y) = self.point(relative, group[4], group[5]);
                    self.push(
                        DrawCommand::BezierCurveTo {
                            cp1x,
                            cp1y,
                            cp2x,
                            cp2y,
                            x,
                            y,
                        },
                        (x, y),
                    );
                }
                CommandKind::SmoothCubicTo => {
                    let (cp1x, cp1y) = self.reflected_control(true);
                    let (cp2x, cp2y) = self.point(relative, group[0], group[1]);
                    let (x, y) = self.point(relative, group[2], group[3]);
                    self.push(
                        DrawCommand::BezierCurveTo {
                            cp1x,
                            cp1y,
                            cp2x,
                            cp2y,
                            x,
                            y,
                        },
                        (x, y),
                    );
                }
                CommandKind::QuadTo => {
                    let (cpx, cpy) = self.point(relative, group[0], group[1]);
                    let (x, y) = self.point(relative, group[2], group[3]);
                    self.push(DrawCommand::QuadraticCurveTo { cpx, cpy, x, y }, (x, y));
                }
                CommandKind::SmoothQuadTo => {
                    let (cpx, cpy) = self.reflected_control(false);
                    let (x, y) = self.point(relative, group[0], group[1]);
                    self.push(DrawCommand::QuadraticCurveTo { cpx, cpy, x, y }, (x, y));
                }
                CommandKind::ClosePath => {}
            }
        }
    }
}

/// Convert instructions into absolute drawing commands.
///
/// Non-empty output is wrapped in `BeginPath` … `ClosePath`. Relative
/// coordinates are resolved against the running cursor, `H`/`V` become
/// line-tos, `S`/`T` get their reflected control point, and `Z` draws a
/// line back to the start of the current subpath.
pub fn to_draw_commands(instructions: &[PathInstruction]) -> Vec<DrawCommand> {
    if instructions.is_empty() {
        return Vec::new();
    }

    let mut pen = Pen::default();
    pen.commands.push(DrawCommand::BeginPath);
    for instruction in instructions {
        pen.instruction(instruction);
    }
    pen.commands.push(DrawCommand::ClosePath);
    pen.commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn commands(data: &str) -> Vec<DrawCommand> {
        to_draw_commands(&parse(data, false).unwrap())
    }

    #[test]
    fn test_empty_instructions() {
        assert!(to_draw_commands(&[]).is_empty());
    }

    #[test]
    fn test_relative_and_axis_lines() {
        let result = commands("M10 10l5 5h10v-20");
        assert_eq!(
            result,
            vec![
                DrawCommand::BeginPath,
                DrawCommand::MoveTo { x: 10.0, y: 10.0 },
                DrawCommand::LineTo { x: 15.0, y: 15.0 },
                DrawCommand::LineTo { x: 25.0, y: 15.0 },
                DrawCommand::LineTo { x: 25.0, y: -5.0 },
                DrawCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_multiple_groups_use_running_cursor() {
        let result = commands("m0 0 10 0 0 10");
        assert_eq!(result[1], DrawCommand::MoveTo { x: 0.0, y: 0.0 });
        assert_eq!(result[2], DrawCommand::LineTo { x: 10.0, y: 0.0 });
        assert_eq!(result[3], DrawCommand::LineTo { x: 10.0, y: 10.0 });
    }

    #[test]
    fn test_smooth_cubic_reflects_previous_control() {
        let result = commands("M0 0C0 10 10 10 10 0S20 -10 20 0");
        assert_eq!(
            result[3],
            DrawCommand::BezierCurveTo {
                cp1x: 10.0,
                cp1y: -10.0,
                cp2x: 20.0,
                cp2y: -10.0,
                x: 20.0,
                y: 0.0
            }
        );
    }

    #[test]
    fn test_smooth_quad_without_previous_curve_uses_cursor() {
        let result = commands("M5 5T10 10");
        assert_eq!(
            result[2],
            DrawCommand::QuadraticCurveTo {
                cpx: 5.0,
                cpy: 5.0,
                x: 10.0,
                y: 10.0
            }
        );
    }

    #[test]
    fn test_smooth_quad_reflects_quad() {
        let result = commands("M0 0Q5 10 10 0t10 0");
        assert_eq!(
            result[3],
            DrawCommand::QuadraticCurveTo {
                cpx: 15.0,
                cpy: -10.0,
                x: 20.0,
                y: 0.0
            }
        );
    }

    #[test]
    fn test_close_returns_to_subpath_start() {
        let result = commands("M1 2L5 2L5 6ZL0 0");
        assert_eq!(result[4], DrawCommand::LineTo { x: 1.0, y: 2.0 });
        // a drawing command after Z starts a new subpath at the old start
        assert_eq!(result[5], DrawCommand::LineTo { x: 0.0, y: 0.0 });
        assert_eq!(result.last(), Some(&DrawCommand::ClosePath));
    }

    #[test]
    fn test_translated() {
        let moved = DrawCommand::QuadraticCurveTo {
            cpx: 1.0,
            cpy: 2.0,
            x: 3.0,
            y: 4.0,
        }
        .translated(10.0, 20.0);
        assert_eq!(moved.params(), vec![11.0, 22.0, 13.0, 24.0]);
        assert_eq!(moved.name(), "quadraticCurveTo");
    }
}
