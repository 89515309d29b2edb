use std::io;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use log::debug;
use tempfile::NamedTempFile;

/// Output file that only appears at its destination once
/// [`AtomicSink::persist`] is called.
///
/// Writes go to a temporary file created in the destination's
/// directory, so the final rename never crosses filesystems. Dropping
/// the sink without persisting removes the temporary; an aborted run
/// leaves no partial output behind.
pub struct AtomicSink {
    temp: NamedTempFile,
    dest: PathBuf,
}

impl AtomicSink {
    pub fn new<P: AsRef<Path>>(dest: P) -> anyhow::Result<Self> {
        let dest = dest.as_ref().to_path_buf();
        let dir = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir).with_context(|| {
            format!("failed to create a temporary file in {}", dir.display())
        })?;
        debug!(
            "staging output for {} at {}",
            dest.display(),
            temp.path().display()
        );
        Ok(Self { temp, dest })
    }

    /// The destination this sink will persist to.
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Moves the temporary into place at the destination.
    pub fn persist(self) -> anyhow::Result<()> {
        let dest = self.dest;
        self.temp.persist(&dest).with_context(|| {
            format!("failed to move output into place at {}", dest.display())
        })?;
        debug!("output persisted at {}", dest.display());
        Ok(())
    }
}

impl Write for AtomicSink {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}
