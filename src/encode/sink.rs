use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::foundation::error::{OsbError, OsbResult};

/// Options for [`crate::Storyboard::compile_with`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CompileOpts {
    /// Create missing parent directories of the output path.
    pub create_dirs: bool,
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> OsbResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Open `path` for writing, hand a buffered writer to `body`, then flush.
///
/// The file is closed on every return path. Output already written when `body` fails is left
/// in place.
pub(crate) fn write_file<F>(path: &Path, opts: CompileOpts, body: F) -> OsbResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> OsbResult<()>,
{
    if opts.create_dirs {
        ensure_parent_dir(path)?;
    }

    let file = File::create(path)
        .map_err(|e| OsbError::io(format!("create '{}'", path.display()), e))?;
    let mut w = BufWriter::new(file);
    body(&mut w)?;
    w.flush()
        .map_err(|e| OsbError::io(format!("flush '{}'", path.display()), e))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
