/*!
 * Memory Map Dump
 * Renders the free list as ASCII and writes it through a byte sink
 */

use super::manager::MemoryManager;
use super::traits::ByteSink;
use super::types::{MemoryResult, WordList};
use log::{error, info};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Production byte sink backed by the local filesystem
///
/// Opens with create-if-absent, truncate, and read-write semantics. The
/// descriptor is closed on drop regardless of the write outcome; `sync_all`
/// surfaces close-time errors before that.
#[derive(Debug, Default)]
pub struct FileSink;

impl ByteSink for FileSink {
    fn write_all(&mut self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.write_all(data)?;
        file.sync_all()?;
        Ok(())
    }
}

/// Render a word list as `[off, len] - [off, len] - ...`
///
/// Word units, ascending offset order, no trailing newline. An empty list
/// renders as an empty string.
pub fn render_memory_map(list: &WordList) -> String {
    let parts: Vec<String> = list
        .iter()
        .map(|span| format!("[{}, {}]", span.offset, span.size))
        .collect();
    parts.join(" - ")
}

impl MemoryManager {
    /// Dump the current memory map to a file
    pub fn dump_memory_map(&self, path: &Path) -> MemoryResult<()> {
        self.dump_memory_map_to(&mut FileSink, path)
    }

    /// Dump the current memory map through an arbitrary byte sink
    pub fn dump_memory_map_to(&self, sink: &mut dyn ByteSink, path: &Path) -> MemoryResult<()> {
        let list = self.word_list()?;
        let text = render_memory_map(&list);
        if let Err(err) = sink.write_all(path, text.as_bytes()) {
            error!("Memory map dump to {} failed: {}", path.display(), err);
            return Err(err.into());
        }
        info!(
            "Dumped memory map ({} holes) to {}",
            list.holes(),
            path.display()
        );
        Ok(())
    }
}
