//! Endpoint-based bounding rectangles.

use crate::instruction::PathInstruction;

/// Axis-aligned bounding rectangle in outline coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingRect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Running min/max of one axis.
#[derive(Default)]
struct Extent {
    cursor: f64,
    range: Option<(f64, f64)>,
}

impl Extent {
    fn visit(&mut self, value: f64, relative: bool) {
        if relative {
            self.cursor += value;
        } else {
            self.cursor = value;
        }
        let c = self.cursor;
        self.range = Some(match self.range {
            Some((min, max)) => (min.min(c), max.max(c)),
            None => (c, c),
        });
    }
}

/// Compute the bounding rectangle of a path from its endpoints.
///
/// Only the endpoint of every parameter group is considered; curve control
/// points are ignored, so curves that bulge past their endpoints may extend
/// outside the returned rectangle. Returns `None` when the path has no
/// endpoint on one of the axes.
pub fn bounding_rect(instructions: &[PathInstruction]) -> Option<BoundingRect> {
    let mut x = Extent::default();
    let mut y = Extent::default();

    for instruction in instructions {
        let kind = instruction.command.kind;
        let relative = instruction.command.relative;
        for group in instruction.groups() {
            if let Some(index) = kind.endpoint_x() {
                x.visit(group[index], relative);
            }
            if let Some(index) = kind.endpoint_y() {
                y.visit(group[index], relative);
            }
        }
    }

    let (min_x, max_x) = x.range?;
    let (min_y, max_y) = y.range?;
    Some(BoundingRect::new(min_x, min_y, max_x, max_y))
}
