use std::io::Write;

use crate::{
    encode::pack::{Record, Value},
    foundation::core::TimeMs,
    foundation::error::OsbResult,
    storyboard::compound::{CommandScope, Loop, Node, Trigger, write_scope},
    storyboard::enums::{Layer, LoopType, Origin, TriggerType},
};

/// Where an object is drawn and which image it shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Layer the object is grouped under.
    pub layer: Layer,
    /// Anchor point of the image.
    pub origin: Origin,
    /// Image path relative to the beatmap folder.
    pub file: String,
    /// Initial x position.
    pub x: f64,
    /// Initial y position.
    pub y: f64,
}

/// Sprite or animation specific fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObjectKind {
    /// Single static image.
    Sprite,
    /// Numbered image sequence (`file0.png`, `file1.png`, ...).
    Animation {
        /// Number of frames.
        frame_count: u32,
        /// Delay between frames in milliseconds.
        frame_time: f64,
        /// Looping behaviour.
        loop_type: LoopType,
    },
}

/// Top-level storyboard object owning its commands, loops and triggers.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryObject {
    /// Position, layer and image.
    pub placement: Placement,
    /// Sprite or animation.
    pub kind: ObjectKind,
    commands: Vec<Node>,
}

impl StoryObject {
    /// Sprite with no commands.
    pub fn sprite(layer: Layer, origin: Origin, file: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            placement: Placement {
                layer,
                origin,
                file: file.into(),
                x,
                y,
            },
            kind: ObjectKind::Sprite,
            commands: Vec::new(),
        }
    }

    /// Animation with no commands.
    pub fn animation(
        placement: Placement,
        frame_count: u32,
        frame_time: f64,
        loop_type: LoopType,
    ) -> Self {
        Self {
            placement,
            kind: ObjectKind::Animation {
                frame_count,
                frame_time,
                loop_type,
            },
            commands: Vec::new(),
        }
    }

    /// Layer the object is written under.
    pub fn layer(&self) -> Layer {
        self.placement.layer
    }

    /// Append a loop and return it for further appends.
    pub fn loop_(&mut self, start: impl Into<TimeMs>, count: u32) -> &mut Loop {
        self.commands.push(Node::Loop(Loop::new(start, count)));
        match self.commands.last_mut() {
            Some(Node::Loop(l)) => l,
            _ => unreachable!("loop was just pushed"),
        }
    }

    /// Append a trigger group and return it for further appends.
    pub fn trigger(
        &mut self,
        start: impl Into<TimeMs>,
        end: impl Into<TimeMs>,
        trigger: TriggerType,
    ) -> &mut Trigger {
        self.commands.push(Node::Trigger(Trigger::new(trigger, start, end)));
        match self.commands.last_mut() {
            Some(Node::Trigger(t)) => t,
            _ => unreachable!("trigger was just pushed"),
        }
    }

    fn record(&self) -> Record {
        let p = &self.placement;
        let code = match self.kind {
            ObjectKind::Sprite => "Sprite",
            ObjectKind::Animation { .. } => "Animation",
        };
        let rec = Record::new(code)
            .field("layer", Value::code(p.layer))
            .field("origin", Value::code(p.origin))
            .field("file", Value::text(p.file.as_str()))
            .field("x", p.x)
            .field("y", p.y);

        match self.kind {
            ObjectKind::Sprite => rec,
            ObjectKind::Animation {
                frame_count,
                frame_time,
                loop_type,
            } => rec
                .field("frame_count", frame_count)
                .field("frame_time", frame_time)
                .field("loop_type", Value::code(loop_type)),
        }
    }

    /// Write the object line and all of its commands.
    pub fn write<W: Write + ?Sized>(&self, w: &mut W) -> OsbResult<()> {
        write_scope(
            w,
            &self.record(),
            &self.commands,
            self.scope_name(),
            0,
            TimeMs::ZERO,
            TimeMs::ZERO,
        )
    }
}

impl CommandScope for StoryObject {
    fn scope_name(&self) -> &'static str {
        match self.kind {
            ObjectKind::Sprite => "sprite",
            ObjectKind::Animation { .. } => "animation",
        }
    }

    fn nodes(&self) -> &[Node] {
        &self.commands
    }

    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.commands
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/object.rs"]
mod tests;
