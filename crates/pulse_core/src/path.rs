use serde::{Deserialize, Serialize};

use crate::Point;

/// One step of a vector path.
///
/// `ArcTo` mirrors the SVG elliptical-arc command: radii, x-axis rotation,
/// the large-arc and sweep flags, and the arc end point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        radii: Point,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

/// A vector path built command-by-command.
///
/// The builder takes `self` by value so paths compose as expressions:
///
/// ```rust
/// use pulse_core::Path;
///
/// let p = Path::new().move_to(0.0, 100.0).line_to(100.0, 0.0).close();
/// assert_eq!(p.commands().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        mut self,
        rx: f32,
        ry: f32,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    ) -> Self {
        self.commands.push(PathCommand::ArcTo {
            radii: Point::new(rx, ry),
            x_rotation,
            large_arc,
            sweep,
            end: Point::new(x, y),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// SVG path data for a `d` attribute, e.g.
    /// `M 50 50 L 85 50 A 35 35 0 1 1 15 50 Z`.
    pub fn to_svg_data(&self) -> String {
        let mut parts = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    parts.push(format!("M {} {}", svg_number(p.x), svg_number(p.y)));
                }
                PathCommand::LineTo(p) => {
                    parts.push(format!("L {} {}", svg_number(p.x), svg_number(p.y)));
                }
                PathCommand::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    end,
                } => {
                    parts.push(format!(
                        "A {} {} {} {} {} {} {}",
                        svg_number(radii.x),
                        svg_number(radii.y),
                        svg_number(*x_rotation),
                        u8::from(*large_arc),
                        u8::from(*sweep),
                        svg_number(end.x),
                        svg_number(end.y),
                    ));
                }
                PathCommand::Close => parts.push("Z".to_string()),
            }
        }
        parts.join(" ")
    }
}

/// Compact decimal form for SVG attributes: three decimals, trailing zeroes
/// trimmed (`50.0 -> "50"`, `3.7699 -> "3.77"`).
pub fn svg_number(value: f32) -> String {
    let mut s = format!("{value:.3}");
    if let Some(dot) = s.find('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.len() == dot + 1 {
            s.pop();
        }
    }
    s
}
