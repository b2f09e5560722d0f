//! JSON scene descriptions.
//!
//! A scene lists objects and their commands as data. [`Scene::build`] replays it through the
//! builder API, so the same timing rules apply as for hand-written code.

use std::path::Path;

use crate::{
    foundation::core::TimeMs,
    foundation::error::{OsbError, OsbResult},
    storyboard::command::{Command, Timing},
    storyboard::compound::CommandScope,
    storyboard::document::Storyboard,
    storyboard::enums::{Layer, LoopType, Origin, ParameterType, TriggerType},
    storyboard::object::StoryObject,
};

/// A storyboard described as data.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Objects in insertion order.
    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

/// One sprite or animation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ObjectSpec {
    Sprite {
        layer: Layer,
        origin: Origin,
        file: String,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        commands: Vec<CommandSpec>,
    },
    Animation {
        layer: Layer,
        origin: Origin,
        file: String,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        frame_count: u32,
        frame_time: f64,
        #[serde(default)]
        loop_type: LoopType,
        #[serde(default)]
        commands: Vec<CommandSpec>,
    },
}

/// One command, loop or trigger. Unset `end_*` payload values hold their start value.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum CommandSpec {
    Fade {
        #[serde(flatten)]
        timing: Timing,
        start_opacity: f64,
        #[serde(default)]
        end_opacity: Option<f64>,
    },
    Move {
        #[serde(flatten)]
        timing: Timing,
        start_x: f64,
        start_y: f64,
        #[serde(default)]
        end_x: Option<f64>,
        #[serde(default)]
        end_y: Option<f64>,
    },
    MoveX {
        #[serde(flatten)]
        timing: Timing,
        start_x: f64,
        #[serde(default)]
        end_x: Option<f64>,
    },
    MoveY {
        #[serde(flatten)]
        timing: Timing,
        start_y: f64,
        #[serde(default)]
        end_y: Option<f64>,
    },
    Scale {
        #[serde(flatten)]
        timing: Timing,
        start_scale: f64,
        #[serde(default)]
        end_scale: Option<f64>,
    },
    VectorScale {
        #[serde(flatten)]
        timing: Timing,
        start_scale_x: f64,
        start_scale_y: f64,
        #[serde(default)]
        end_scale_x: Option<f64>,
        #[serde(default)]
        end_scale_y: Option<f64>,
    },
    Rotate {
        #[serde(flatten)]
        timing: Timing,
        start_rotate: f64,
        #[serde(default)]
        end_rotate: Option<f64>,
    },
    Colour {
        #[serde(flatten)]
        timing: Timing,
        start_red: u8,
        start_green: u8,
        start_blue: u8,
        #[serde(default)]
        end_red: Option<u8>,
        #[serde(default)]
        end_green: Option<u8>,
        #[serde(default)]
        end_blue: Option<u8>,
    },
    Parameter {
        #[serde(flatten)]
        timing: Timing,
        parameter: ParameterType,
    },
    Loop {
        start: TimeMs,
        count: u32,
        #[serde(default)]
        commands: Vec<CommandSpec>,
    },
    Trigger {
        trigger: TriggerType,
        start: TimeMs,
        end: TimeMs,
        #[serde(default)]
        commands: Vec<CommandSpec>,
    },
}

impl Scene {
    /// Parse a scene from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> OsbResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| OsbError::serde(format!("invalid scene JSON: {e}")))
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> OsbResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| OsbError::io(format!("read scene '{}'", path.display()), e))?;
        let scene = Self::from_json(&bytes)?;
        tracing::debug!(
            objects = scene.objects.len(),
            path = %path.display(),
            "loaded scene"
        );
        Ok(scene)
    }

    /// Build a storyboard from this scene.
    pub fn build(&self) -> OsbResult<Storyboard> {
        let mut sb = Storyboard::new();
        for spec in &self.objects {
            let (object, commands) = match spec {
                ObjectSpec::Sprite {
                    layer,
                    origin,
                    file,
                    x,
                    y,
                    commands,
                } => {
                    let object = sb.add_sprite(*layer, *origin, file.as_str(), *x, *y);
                    (object, commands)
                }
                ObjectSpec::Animation {
                    layer,
                    origin,
                    file,
                    x,
                    y,
                    frame_count,
                    frame_time,
                    loop_type,
                    commands,
                } => {
                    let object = sb.add_animation(
                        *layer,
                        *origin,
                        file.as_str(),
                        *x,
                        *y,
                        *frame_count,
                        *frame_time,
                        *loop_type,
                    );
                    (object, commands)
                }
            };
            apply_object_commands(object, commands)?;
        }
        Ok(sb)
    }
}

fn apply_object_commands(object: &mut StoryObject, commands: &[CommandSpec]) -> OsbResult<()> {
    for spec in commands {
        match spec {
            CommandSpec::Loop {
                start,
                count,
                commands,
            } => {
                let group = object.loop_(*start, *count);
                for child in commands {
                    apply_leaf(group, child)?;
                }
            }
            CommandSpec::Trigger {
                trigger,
                start,
                end,
                commands,
            } => {
                let group = object.trigger(*start, *end, *trigger);
                for child in commands {
                    apply_leaf(group, child)?;
                }
            }
            leaf => apply_leaf(object, leaf)?,
        }
    }
    Ok(())
}

fn apply_leaf<S: CommandScope>(scope: &mut S, spec: &CommandSpec) -> OsbResult<()> {
    let command = match *spec {
        CommandSpec::Fade {
            timing,
            start_opacity,
            end_opacity,
        } => Command::fade(timing, start_opacity, end_opacity),
        CommandSpec::Move {
            timing,
            start_x,
            start_y,
            end_x,
            end_y,
        } => Command::move_(timing, start_x, start_y, end_x, end_y),
        CommandSpec::MoveX {
            timing,
            start_x,
            end_x,
        } => Command::move_x(timing, start_x, end_x),
        CommandSpec::MoveY {
            timing,
            start_y,
            end_y,
        } => Command::move_y(timing, start_y, end_y),
        CommandSpec::Scale {
            timing,
            start_scale,
            end_scale,
        } => Command::scale(timing, start_scale, end_scale),
        CommandSpec::VectorScale {
            timing,
            start_scale_x,
            start_scale_y,
            end_scale_x,
            end_scale_y,
        } => Command::vector_scale(timing, start_scale_x, start_scale_y, end_scale_x, end_scale_y),
        CommandSpec::Rotate {
            timing,
            start_rotate,
            end_rotate,
        } => Command::rotate(timing, start_rotate, end_rotate),
        CommandSpec::Colour {
            timing,
            start_red,
            start_green,
            start_blue,
            end_red,
            end_green,
            end_blue,
        } => Command::colour(
            timing,
            [start_red, start_green, start_blue],
            [end_red, end_green, end_blue],
        ),
        CommandSpec::Parameter { timing, parameter } => Command::parameter(timing, parameter),
        CommandSpec::Loop { .. } | CommandSpec::Trigger { .. } => {
            return Err(OsbError::validation(format!(
                "loops and triggers must sit directly on an object, found one inside a {}",
                scope.scope_name()
            )));
        }
    };
    scope.command(command);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/script/scene.rs"]
mod tests;
