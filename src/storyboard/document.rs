use std::{io::Write, path::Path};

use crate::{
    encode::sink::{CompileOpts, write_file},
    foundation::error::OsbResult,
    storyboard::enums::{FormatCode, Layer, LoopType, Origin},
    storyboard::object::{Placement, StoryObject},
};

/// An in-memory storyboard: the ordered set of objects written to one `.osb` file.
///
/// Objects are written grouped by layer; within a layer they keep insertion order.
///
/// ```
/// use osbscript::{CommandScope, Layer, Origin, Storyboard, Timing};
///
/// let mut sb = Storyboard::new();
/// sb.add_sprite(Layer::Background, Origin::TopLeft, "a.png", 0.0, 0.0)
///     .fade(Timing::span(0, 1000), 0.0, 1.0);
///
/// let text = sb.to_osb_string().unwrap();
/// assert!(text.contains("Sprite,0,0,a.png,0,0\n F,0,0,1000,0,1\n"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Storyboard {
    objects: Vec<StoryObject>,
}

impl Storyboard {
    /// Empty storyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sprite and return it for command appends.
    pub fn add_sprite(
        &mut self,
        layer: Layer,
        origin: Origin,
        file: impl Into<String>,
        x: f64,
        y: f64,
    ) -> &mut StoryObject {
        self.push(StoryObject::sprite(layer, origin, file, x, y))
    }

    /// Append an animation and return it for command appends.
    #[allow(clippy::too_many_arguments)]
    pub fn add_animation(
        &mut self,
        layer: Layer,
        origin: Origin,
        file: impl Into<String>,
        x: f64,
        y: f64,
        frame_count: u32,
        frame_time: f64,
        loop_type: LoopType,
    ) -> &mut StoryObject {
        let placement = Placement {
            layer,
            origin,
            file: file.into(),
            x,
            y,
        };
        self.push(StoryObject::animation(
            placement,
            frame_count,
            frame_time,
            loop_type,
        ))
    }

    /// Append a prebuilt object and return it.
    pub fn push(&mut self, object: StoryObject) -> &mut StoryObject {
        let idx = self.objects.len();
        self.objects.push(object);
        &mut self.objects[idx]
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[StoryObject] {
        &self.objects
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when no object was added.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Write the whole storyboard in `.osb` format.
    #[tracing::instrument(skip_all, fields(objects = self.objects.len()))]
    pub fn write<W: Write + ?Sized>(&self, w: &mut W) -> OsbResult<()> {
        w.write_all(b"[Events]\n")?;
        w.write_all(b"//Background and Video events\n")?;

        for layer in Layer::ALL {
            writeln!(w, "//Storyboard Layer {} ({})", layer.code(), layer.name())?;
            let mut written = 0usize;
            for object in self.objects.iter().filter(|o| o.layer() == layer) {
                object.write(w)?;
                written += 1;
            }
            tracing::debug!(layer = layer.name(), objects = written, "wrote layer");
        }

        w.write_all(b"//Storyboard Sound Samples\n")?;
        Ok(())
    }

    /// The `.osb` text as a string.
    pub fn to_osb_string(&self) -> OsbResult<String> {
        let mut out = Vec::new();
        self.write(&mut out)?;
        // Every field is built from Rust strings, so the bytes are UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Write the storyboard to `path`, replacing any existing file.
    pub fn compile(&self, path: impl AsRef<Path>) -> OsbResult<()> {
        self.compile_with(path, CompileOpts::default())
    }

    /// [`Storyboard::compile`] with explicit options.
    pub fn compile_with(&self, path: impl AsRef<Path>, opts: CompileOpts) -> OsbResult<()> {
        let path = path.as_ref();
        tracing::info!(
            objects = self.objects.len(),
            path = %path.display(),
            "compiling storyboard"
        );
        write_file(path, opts, |w| self.write(w))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/document.rs"]
mod tests;
