/*!
 * Memory Map Dump Tests
 * Text rendering and byte-sink behavior
 */

use pretty_assertions::assert_eq;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wordpool::{ByteSink, MemoryError, MemoryManager};

/// Sink that records every write it receives
#[derive(Default)]
struct MemSink {
    writes: Vec<(PathBuf, Vec<u8>)>,
}

impl ByteSink for MemSink {
    fn write_all(&mut self, path: &Path, data: &[u8]) -> io::Result<()> {
        self.writes.push((path.to_path_buf(), data.to_vec()));
        Ok(())
    }
}

/// Sink that fails every write
struct FailSink;

impl ByteSink for FailSink {
    fn write_all(&mut self, _path: &Path, _data: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }
}

#[test]
fn test_dump_single_hole() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.txt");

    let mut manager = MemoryManager::new(4);
    manager.initialize(5).unwrap();
    let addr = manager.allocate(4).unwrap();
    manager.free(addr).unwrap();

    manager.dump_memory_map(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[0, 5]");
}

#[test]
fn test_dump_multiple_holes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.txt");

    let mut manager = MemoryManager::new(1);
    manager.initialize(30).unwrap();
    let a = manager.allocate(5).unwrap();
    manager.allocate(5).unwrap();
    let c = manager.allocate(5).unwrap();
    manager.allocate(15).unwrap();
    manager.free(a).unwrap();
    manager.free(c).unwrap();

    manager.dump_memory_map(&path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[0, 5] - [10, 5]"
    );
}

#[test]
fn test_dump_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.txt");
    std::fs::write(&path, "previous contents that are much longer").unwrap();

    let mut manager = MemoryManager::new(4);
    manager.initialize(5).unwrap();
    let addr = manager.allocate(4).unwrap();
    manager.free(addr).unwrap();

    manager.dump_memory_map(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[0, 5]");
}

#[test]
fn test_dump_fully_allocated_pool_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.txt");

    let mut manager = MemoryManager::new(1);
    manager.initialize(4).unwrap();
    manager.allocate(4).unwrap();

    manager.dump_memory_map(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_dump_requires_initialized_pool() {
    let manager = MemoryManager::new(4);
    let result = manager.dump_memory_map(Path::new("unused.txt"));
    assert_eq!(result, Err(MemoryError::NotInitialized));
}

#[test]
fn test_dump_requires_allocation_history() {
    let mut manager = MemoryManager::new(4);
    manager.initialize(8).unwrap();

    let mut sink = MemSink::default();
    let result = manager.dump_memory_map_to(&mut sink, Path::new("unused.txt"));
    assert_eq!(result, Err(MemoryError::NoAllocations));
    assert!(sink.writes.is_empty());
}

#[test]
fn test_dump_passes_exact_bytes_to_sink() {
    let mut manager = MemoryManager::new(2);
    manager.initialize(10).unwrap();
    let a = manager.allocate(6).unwrap();
    manager.allocate(4).unwrap();
    manager.free(a).unwrap();

    let mut sink = MemSink::default();
    let path = Path::new("layout.txt");
    manager.dump_memory_map_to(&mut sink, path).unwrap();

    assert_eq!(sink.writes.len(), 1);
    let (written_path, data) = &sink.writes[0];
    assert_eq!(written_path, path);
    assert_eq!(data.as_slice(), b"[0, 3] - [5, 5]");
}

#[test]
fn test_dump_surfaces_sink_failure() {
    let mut manager = MemoryManager::new(4);
    manager.initialize(8).unwrap();
    manager.allocate(4).unwrap();

    let result = manager.dump_memory_map_to(&mut FailSink, Path::new("unused.txt"));
    assert!(matches!(result, Err(MemoryError::Io(_))));
}
