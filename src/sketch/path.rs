use crate::foundation::core::{BezPath, Point};

/// One drawing command of a [`VectorPath`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    QuadTo { ctrl: Point, to: Point },
}

impl PathCommand {
    /// Point the pen ends at after this command.
    pub fn end_point(&self) -> Point {
        match *self {
            Self::MoveTo { to } | Self::QuadTo { to, .. } => to,
        }
    }
}

/// Ordered drawing commands: one leading `MoveTo` followed by `QuadTo`s.
///
/// Immutable once built; a new route or viewport produces a fresh path.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct VectorPath {
    commands: Vec<PathCommand>,
}

impl VectorPath {
    pub(crate) fn from_commands(commands: Vec<PathCommand>) -> Self {
        debug_assert!(
            commands
                .iter()
                .enumerate()
                .all(|(i, c)| matches!(c, PathCommand::MoveTo { .. }) == (i == 0)),
            "a vector path is exactly one leading MoveTo followed by QuadTos"
        );
        Self { commands }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// New path holding the first `count` commands (clamped to the length).
    pub fn prefix(&self, count: usize) -> Self {
        let count = count.min(self.commands.len());
        Self {
            commands: self.commands[..count].to_vec(),
        }
    }

    pub fn to_bezpath(&self) -> BezPath {
        let mut out = BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { to } => out.move_to(to),
                PathCommand::QuadTo { ctrl, to } => out.quad_to(ctrl, to),
            }
        }
        out
    }

    /// SVG path data (`M x y Q cx cy x y ...`).
    pub fn to_svg_path_data(&self) -> String {
        self.to_bezpath().to_svg()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/path.rs"]
mod tests;
