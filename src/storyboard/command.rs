use crate::{
    encode::pack::{Record, Value},
    foundation::core::TimeMs,
    storyboard::enums::{Easing, ParameterType},
};

/// Easing and the optional time window shared by every command.
///
/// An unset `start`/`end` is resolved when the storyboard is written, from the earliest start
/// and latest end among the command's siblings.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    /// Easing curve.
    #[serde(default)]
    pub easing: Easing,
    /// Start time; `None` takes the container's default.
    #[serde(default)]
    pub start: Option<TimeMs>,
    /// End time; `None` takes the container's default.
    #[serde(default)]
    pub end: Option<TimeMs>,
}

impl Timing {
    /// No explicit times; both come from the surrounding container.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Explicit `[start, end]` window.
    pub fn span(start: impl Into<TimeMs>, end: impl Into<TimeMs>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            ..Self::default()
        }
    }

    /// Explicit start, container default end.
    pub fn starting(start: impl Into<TimeMs>) -> Self {
        Self {
            start: Some(start.into()),
            ..Self::default()
        }
    }

    /// Container default start, explicit end.
    pub fn until(end: impl Into<TimeMs>) -> Self {
        Self {
            end: Some(end.into()),
            ..Self::default()
        }
    }

    /// Same window with a different easing.
    pub fn eased(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }
}

/// Type-specific payload of a command.
///
/// End values are always resolved; constructors copy a missing end from its start.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum CommandKind {
    Fade {
        start_opacity: f64,
        end_opacity: f64,
    },
    Move {
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
    },
    MoveX {
        start_x: f64,
        end_x: f64,
    },
    MoveY {
        start_y: f64,
        end_y: f64,
    },
    Scale {
        start_scale: f64,
        end_scale: f64,
    },
    VectorScale {
        start_scale_x: f64,
        start_scale_y: f64,
        end_scale_x: f64,
        end_scale_y: f64,
    },
    Rotate {
        start_rotate: f64,
        end_rotate: f64,
    },
    Colour {
        start_red: u8,
        start_green: u8,
        start_blue: u8,
        end_red: u8,
        end_green: u8,
        end_blue: u8,
    },
    Parameter {
        parameter: ParameterType,
    },
}

impl CommandKind {
    /// Type code written at the start of the line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fade { .. } => "F",
            Self::Move { .. } => "M",
            Self::MoveX { .. } => "MX",
            Self::MoveY { .. } => "MY",
            Self::Scale { .. } => "S",
            Self::VectorScale { .. } => "V",
            Self::Rotate { .. } => "R",
            Self::Colour { .. } => "C",
            Self::Parameter { .. } => "P",
        }
    }
}

/// A single timed instruction on a sprite or animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Command {
    /// Easing and time window.
    pub timing: Timing,
    /// Payload.
    pub kind: CommandKind,
}

impl Command {
    /// Opacity change.
    pub fn fade(timing: Timing, start_opacity: f64, end_opacity: Option<f64>) -> Self {
        Self {
            timing,
            kind: CommandKind::Fade {
                start_opacity,
                end_opacity: end_opacity.unwrap_or(start_opacity),
            },
        }
    }

    /// Position change on both axes.
    pub fn move_(
        timing: Timing,
        start_x: f64,
        start_y: f64,
        end_x: Option<f64>,
        end_y: Option<f64>,
    ) -> Self {
        Self {
            timing,
            kind: CommandKind::Move {
                start_x,
                start_y,
                end_x: end_x.unwrap_or(start_x),
                end_y: end_y.unwrap_or(start_y),
            },
        }
    }

    /// Horizontal position change.
    pub fn move_x(timing: Timing, start_x: f64, end_x: Option<f64>) -> Self {
        Self {
            timing,
            kind: CommandKind::MoveX {
                start_x,
                end_x: end_x.unwrap_or(start_x),
            },
        }
    }

    /// Vertical position change.
    pub fn move_y(timing: Timing, start_y: f64, end_y: Option<f64>) -> Self {
        Self {
            timing,
            kind: CommandKind::MoveY {
                start_y,
                end_y: end_y.unwrap_or(start_y),
            },
        }
    }

    /// Uniform scale change.
    pub fn scale(timing: Timing, start_scale: f64, end_scale: Option<f64>) -> Self {
        Self {
            timing,
            kind: CommandKind::Scale {
                start_scale,
                end_scale: end_scale.unwrap_or(start_scale),
            },
        }
    }

    /// Per-axis scale change.
    pub fn vector_scale(
        timing: Timing,
        start_scale_x: f64,
        start_scale_y: f64,
        end_scale_x: Option<f64>,
        end_scale_y: Option<f64>,
    ) -> Self {
        Self {
            timing,
            kind: CommandKind::VectorScale {
                start_scale_x,
                start_scale_y,
                end_scale_x: end_scale_x.unwrap_or(start_scale_x),
                end_scale_y: end_scale_y.unwrap_or(start_scale_y),
            },
        }
    }

    /// Rotation change, in radians.
    pub fn rotate(timing: Timing, start_rotate: f64, end_rotate: Option<f64>) -> Self {
        Self {
            timing,
            kind: CommandKind::Rotate {
                start_rotate,
                end_rotate: end_rotate.unwrap_or(start_rotate),
            },
        }
    }

    /// Colour tint change. Each end channel falls back to its own start channel.
    pub fn colour(timing: Timing, start: [u8; 3], end: [Option<u8>; 3]) -> Self {
        let [start_red, start_green, start_blue] = start;
        let [end_red, end_green, end_blue] = end;
        Self {
            timing,
            kind: CommandKind::Colour {
                start_red,
                start_green,
                start_blue,
                end_red: end_red.unwrap_or(start_red),
                end_green: end_green.unwrap_or(start_green),
                end_blue: end_blue.unwrap_or(start_blue),
            },
        }
    }

    /// Parameter toggle active for the command's window.
    pub fn parameter(timing: Timing, parameter: ParameterType) -> Self {
        Self {
            timing,
            kind: CommandKind::Parameter { parameter },
        }
    }

    pub(crate) fn record(&self) -> Record {
        let rec = Record::new(self.kind.code())
            .field("easing", Value::code(self.timing.easing))
            .start(self.timing.start)
            .end(self.timing.end);

        match self.kind {
            CommandKind::Fade {
                start_opacity,
                end_opacity,
            } => rec
                .field("start_opacity", start_opacity)
                .field("end_opacity", end_opacity),
            CommandKind::Move {
                start_x,
                start_y,
                end_x,
                end_y,
            } => rec
                .field("start_x", start_x)
                .field("start_y", start_y)
                .field("end_x", end_x)
                .field("end_y", end_y),
            CommandKind::MoveX { start_x, end_x } => {
                rec.field("start_x", start_x).field("end_x", end_x)
            }
            CommandKind::MoveY { start_y, end_y } => {
                rec.field("start_y", start_y).field("end_y", end_y)
            }
            CommandKind::Scale {
                start_scale,
                end_scale,
            } => rec
                .field("start_scale", start_scale)
                .field("end_scale", end_scale),
            CommandKind::VectorScale {
                start_scale_x,
                start_scale_y,
                end_scale_x,
                end_scale_y,
            } => rec
                .field("start_scale_x", start_scale_x)
                .field("start_scale_y", start_scale_y)
                .field("end_scale_x", end_scale_x)
                .field("end_scale_y", end_scale_y),
            CommandKind::Rotate {
                start_rotate,
                end_rotate,
            } => rec
                .field("start_rotate", start_rotate)
                .field("end_rotate", end_rotate),
            CommandKind::Colour {
                start_red,
                start_green,
                start_blue,
                end_red,
                end_green,
                end_blue,
            } => rec
                .field("start_red", start_red)
                .field("start_green", start_green)
                .field("start_blue", start_blue)
                .field("end_red", end_red)
                .field("end_green", end_green)
                .field("end_blue", end_blue),
            CommandKind::Parameter { parameter } => {
                rec.field("parameter", Value::code(parameter))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/command.rs"]
mod tests;
