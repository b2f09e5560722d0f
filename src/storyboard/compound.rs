//! Command containers and the timing-default protocol.
//!
//! Every container (sprite, animation, loop, trigger) hands its children a default window:
//! the earliest explicit start and the latest explicit end among its *direct* children. A child
//! that leaves `start`/`end` unset is written with that window. Nested containers set up their
//! own window from their own children.

use std::io::Write;

use crate::{
    encode::pack::{Record, Value},
    foundation::core::TimeMs,
    foundation::error::{OsbError, OsbResult},
    storyboard::command::{Command, Timing},
    storyboard::enums::{ParameterType, TriggerType},
};

/// Child of a sprite, animation, loop or trigger.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Leaf command.
    Command(Command),
    /// Repeating group.
    Loop(Loop),
    /// Event-fired group.
    Trigger(Trigger),
}

impl Node {
    /// Explicit start, if any.
    pub fn start(&self) -> Option<TimeMs> {
        match self {
            Self::Command(c) => c.timing.start,
            Self::Loop(l) => Some(l.start),
            Self::Trigger(t) => Some(t.start),
        }
    }

    /// Explicit (or, for loops, computed) end, if any.
    pub fn end(&self) -> OsbResult<Option<TimeMs>> {
        match self {
            Self::Command(c) => Ok(c.timing.end),
            Self::Loop(l) => l.end().map(Some),
            Self::Trigger(t) => Ok(Some(t.end)),
        }
    }

    pub(crate) fn write<W: Write + ?Sized>(
        &self,
        w: &mut W,
        level: usize,
        default_start: TimeMs,
        default_end: TimeMs,
    ) -> OsbResult<()> {
        match self {
            Self::Command(c) => {
                let line = c.record().to_line(level, default_start, default_end)?;
                w.write_all(line.as_bytes())?;
                Ok(())
            }
            Self::Loop(l) => write_scope(
                w,
                &l.record(),
                &l.commands,
                "loop",
                level,
                default_start,
                default_end,
            ),
            Self::Trigger(t) => write_scope(
                w,
                &t.record(),
                &t.commands,
                "trigger",
                level,
                default_start,
                default_end,
            ),
        }
    }
}

/// Earliest explicit start among `nodes`.
pub fn min_start(nodes: &[Node], scope: &str) -> OsbResult<TimeMs> {
    nodes.iter().filter_map(Node::start).min().ok_or_else(|| {
        OsbError::missing_timing(format!(
            "no command in this {scope} has an explicit start time"
        ))
    })
}

/// Latest explicit end among `nodes`; a loop child contributes its computed end.
pub fn max_end(nodes: &[Node], scope: &str) -> OsbResult<TimeMs> {
    let mut latest: Option<TimeMs> = None;
    for node in nodes {
        if let Some(end) = node.end()? {
            latest = Some(latest.map_or(end, |l| l.max(end)));
        }
    }
    latest.ok_or_else(|| {
        OsbError::missing_timing(format!(
            "no command in this {scope} has an explicit end time"
        ))
    })
}

/// Write a container header, then its children one level deeper with the children's window.
pub(crate) fn write_scope<W: Write + ?Sized>(
    w: &mut W,
    header: &Record,
    children: &[Node],
    scope: &str,
    level: usize,
    default_start: TimeMs,
    default_end: TimeMs,
) -> OsbResult<()> {
    let line = header.to_line(level, default_start, default_end)?;
    w.write_all(line.as_bytes())?;

    let child_start = min_start(children, scope)?;
    let child_end = max_end(children, scope)?;
    for child in children {
        child.write(w, level + 1, child_start, child_end)?;
    }
    Ok(())
}

/// Repeats its children `count` times starting at `start`.
///
/// Child times are relative to the start of each iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct Loop {
    /// Time of the first iteration.
    pub start: TimeMs,
    /// Number of iterations.
    pub count: u32,
    commands: Vec<Node>,
}

impl Loop {
    /// Empty loop.
    pub fn new(start: impl Into<TimeMs>, count: u32) -> Self {
        Self {
            start: start.into(),
            count,
            commands: Vec::new(),
        }
    }

    /// `start + count * max_end(children)`, recomputed from the current children.
    pub fn end(&self) -> OsbResult<TimeMs> {
        let span = max_end(&self.commands, "loop")?;
        self.start.checked_repeat(self.count, span)
    }

    fn record(&self) -> Record {
        Record::new("L")
            .start(Some(self.start))
            .field("count", self.count)
    }
}

/// Runs its children when a gameplay event fires inside `[start, end]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trigger {
    /// Event that fires the group.
    pub trigger: TriggerType,
    /// Start of the listening window.
    pub start: TimeMs,
    /// End of the listening window.
    pub end: TimeMs,
    commands: Vec<Node>,
}

impl Trigger {
    /// Empty trigger group.
    pub fn new(trigger: TriggerType, start: impl Into<TimeMs>, end: impl Into<TimeMs>) -> Self {
        Self {
            trigger,
            start: start.into(),
            end: end.into(),
            commands: Vec::new(),
        }
    }

    fn record(&self) -> Record {
        Record::new("T")
            .field("trigger", Value::code(self.trigger))
            .start(Some(self.start))
            .end(Some(self.end))
    }
}

/// Anything that owns an ordered list of commands.
///
/// The builder methods append a leaf command and return the scope, so calls chain:
///
/// ```
/// use osbscript::{CommandScope, Layer, Origin, Storyboard, Timing};
///
/// let mut sb = Storyboard::new();
/// sb.add_sprite(Layer::Foreground, Origin::Centre, "star.png", 320.0, 240.0)
///     .fade(Timing::span(0, 500), 0.0, 1.0)
///     .scale(Timing::auto(), 0.5, None);
/// ```
pub trait CommandScope {
    /// Short name used in error messages.
    fn scope_name(&self) -> &'static str;

    /// Children in write order.
    fn nodes(&self) -> &[Node];

    /// Mutable children.
    fn nodes_mut(&mut self) -> &mut Vec<Node>;

    /// Earliest explicit start among the direct children.
    fn min_start(&self) -> OsbResult<TimeMs> {
        min_start(self.nodes(), self.scope_name())
    }

    /// Latest explicit end among the direct children.
    fn max_end(&self) -> OsbResult<TimeMs> {
        max_end(self.nodes(), self.scope_name())
    }

    /// Append a prebuilt command.
    fn command(&mut self, command: Command) -> &mut Self {
        self.nodes_mut().push(Node::Command(command));
        self
    }

    /// Append a fade; `end_opacity` defaults to `start_opacity`.
    fn fade(
        &mut self,
        timing: Timing,
        start_opacity: f64,
        end_opacity: impl Into<Option<f64>>,
    ) -> &mut Self {
        self.command(Command::fade(timing, start_opacity, end_opacity.into()))
    }

    /// Append a move; each end coordinate defaults to its start.
    fn move_(
        &mut self,
        timing: Timing,
        start_x: f64,
        start_y: f64,
        end_x: impl Into<Option<f64>>,
        end_y: impl Into<Option<f64>>,
    ) -> &mut Self {
        self.command(Command::move_(
            timing,
            start_x,
            start_y,
            end_x.into(),
            end_y.into(),
        ))
    }

    /// Append a horizontal move.
    fn move_x(&mut self, timing: Timing, start_x: f64, end_x: impl Into<Option<f64>>) -> &mut Self {
        self.command(Command::move_x(timing, start_x, end_x.into()))
    }

    /// Append a vertical move.
    fn move_y(&mut self, timing: Timing, start_y: f64, end_y: impl Into<Option<f64>>) -> &mut Self {
        self.command(Command::move_y(timing, start_y, end_y.into()))
    }

    /// Append a uniform scale.
    fn scale(
        &mut self,
        timing: Timing,
        start_scale: f64,
        end_scale: impl Into<Option<f64>>,
    ) -> &mut Self {
        self.command(Command::scale(timing, start_scale, end_scale.into()))
    }

    /// Append a per-axis scale.
    fn vector_scale(
        &mut self,
        timing: Timing,
        start_scale_x: f64,
        start_scale_y: f64,
        end_scale_x: impl Into<Option<f64>>,
        end_scale_y: impl Into<Option<f64>>,
    ) -> &mut Self {
        self.command(Command::vector_scale(
            timing,
            start_scale_x,
            start_scale_y,
            end_scale_x.into(),
            end_scale_y.into(),
        ))
    }

    /// Append a rotation.
    fn rotate(
        &mut self,
        timing: Timing,
        start_rotate: f64,
        end_rotate: impl Into<Option<f64>>,
    ) -> &mut Self {
        self.command(Command::rotate(timing, start_rotate, end_rotate.into()))
    }

    /// Append a colour tint; pass `[None; 3]` to hold the start colour.
    fn colour(&mut self, timing: Timing, start: [u8; 3], end: [Option<u8>; 3]) -> &mut Self {
        self.command(Command::colour(timing, start, end))
    }

    /// Append a parameter toggle.
    fn parameter(&mut self, timing: Timing, parameter: ParameterType) -> &mut Self {
        self.command(Command::parameter(timing, parameter))
    }
}

impl CommandScope for Loop {
    fn scope_name(&self) -> &'static str {
        "loop"
    }

    fn nodes(&self) -> &[Node] {
        &self.commands
    }

    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.commands
    }
}

impl CommandScope for Trigger {
    fn scope_name(&self) -> &'static str {
        "trigger"
    }

    fn nodes(&self) -> &[Node] {
        &self.commands
    }

    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.commands
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/compound.rs"]
mod tests;
