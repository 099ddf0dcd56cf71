//! Source readers
//!
//! The [`Tote`](crate::Tote) never touches the file system itself. It asks a
//! [`Loader`] for the full text of a source and parses that. [`FsLoader`]
//! reads real files; any `Fn(&Path) -> io::Result<String>` closure works as
//! well, which keeps tests off the disk.

use std::fs;
use std::io;
use std::path::Path;

/// Reads the complete text of a source
pub trait Loader {
    /// Return the full contents of `path`
    ///
    /// The implementation must not hold on to any handle after returning.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Loader backed by the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl Loader for FsLoader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

impl<F> Loader for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}
