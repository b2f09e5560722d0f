//! osbscript builds osu! storyboards in code and writes them as `.osb` scripts.
//!
//! A [`Storyboard`] owns sprites and animations ([`StoryObject`]); each object owns an ordered
//! list of commands, loops and triggers. Nothing is written until [`Storyboard::compile`] (or
//! [`Storyboard::write`]) serializes the whole model in one pass.
//!
//! # Timing defaults
//!
//! Commands may leave `start`/`end` unset ([`Timing::auto`]). When written, such a command takes
//! the earliest explicit start and the latest explicit end among its siblings in the same
//! container. A [`Loop`] has no explicit end: it ends at `start + count * (latest child end)`.
//! If a container has no child with an explicit start (or end), writing fails with
//! [`OsbError::MissingRequiredTiming`].
//!
//! # Getting started
//!
//! ```
//! use osbscript::{CommandScope, Layer, Origin, Storyboard, Timing};
//!
//! let mut sb = Storyboard::new();
//! let sprite = sb.add_sprite(Layer::Background, Origin::TopLeft, "rain.png", 120.0, 0.0);
//! sprite.colour(Timing::auto(), [200, 200, 200], [None; 3]);
//! sprite.loop_(1000, 4)
//!     .move_y(Timing::span(0, 500), -32.0, 480.0);
//!
//! let text = sb.to_osb_string().unwrap();
//! assert!(text.contains(" C,0,1000,3000,200,200,200,200,200,200\n"));
//! ```
//!
//! Scenes can also be described as JSON ([`Scene`]) and procedural presets such as [`Rain`]
//! add objects through the same builder API.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod effects;
mod encode;
mod foundation;
mod script;
mod storyboard;

pub use effects::rain::Rain;
pub use encode::pack::{Value, pack_enum, pack_number, pack_text};
pub use encode::sink::{CompileOpts, ensure_parent_dir};
pub use foundation::core::{Rng64, TimeMs};
pub use foundation::error::{OsbError, OsbResult};
pub use script::scene::{CommandSpec, ObjectSpec, Scene};
pub use storyboard::command::{Command, CommandKind, Timing};
pub use storyboard::compound::{CommandScope, Loop, Node, Trigger, max_end, min_start};
pub use storyboard::document::Storyboard;
pub use storyboard::enums::{
    Easing, FormatCode, Layer, LoopType, Origin, ParameterType, TriggerType,
};
pub use storyboard::object::{ObjectKind, Placement, StoryObject};
