//! Abstraction of the file system
//!
//! The integration never touches `std::fs` directly; every read, stat and
//! write goes through the [`FileSystem`] trait so that builds can run against
//! either the real disk or an in-memory tree in tests.

pub mod file_system;

/// In-memory file-system for testing
pub mod in_memory_file_system;

/// File-system implementation backed by std::fs
pub mod os_file_system;

pub use file_system::{FileSystem, FileSystemRef, Metadata};
pub use in_memory_file_system::InMemoryFileSystem;
pub use os_file_system::OsFileSystem;
