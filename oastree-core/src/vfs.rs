//! Virtual filesystem contract (§6): `open(name) -> (file, error)`. The
//! caller passes an absolute path; implementations are free to remap it
//! (an in-memory test double, a chroot, a bundle reader). The default
//! implementation reads the host filesystem.

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Mutex;

/// An open file handle: read-to-completion then close. Modeled as a single
/// `read_to_string` rather than a streaming `Read` because every caller in
/// this crate needs the whole document before it can parse it.
pub trait VfsFile: Send + Sync {
    fn read_to_string(&self) -> io::Result<String>;
}

pub trait VirtualFileSystem: Send + Sync {
    fn open(&self, name: &Path) -> io::Result<Box<dyn VfsFile>>;
}

impl fmt::Debug for dyn VirtualFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<dyn VirtualFileSystem>")
    }
}

/// Default implementation: the host filesystem, via `std::fs`.
pub struct HostFilesystem;

struct HostFile(std::path::PathBuf);

impl VfsFile for HostFile {
    fn read_to_string(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.0)
    }
}

impl VirtualFileSystem for HostFilesystem {
    fn open(&self, name: &Path) -> io::Result<Box<dyn VfsFile>> {
        if !name.exists() {
            return Err(io::Error::new(io::ErrorKind::NotFound, format!("{}", name.display())));
        }
        Ok(Box::new(HostFile(name.to_path_buf())))
    }
}

/// In-memory test double (§10.4): backed by a path -> contents map, counts
/// opens per path so tests can assert the "fetched at most once" invariant
/// (§8 "external documents are fetched at most once per absolute path").
pub struct InMemoryFilesystem {
    files: std::collections::HashMap<std::path::PathBuf, String>,
    open_counts: Mutex<std::collections::HashMap<std::path::PathBuf, usize>>,
}

impl InMemoryFilesystem {
    pub fn new(files: impl IntoIterator<Item = (std::path::PathBuf, String)>) -> Self {
        Self { files: files.into_iter().collect(), open_counts: Mutex::new(Default::default()) }
    }

    pub fn open_count(&self, name: &Path) -> usize {
        self.open_counts.lock().unwrap().get(name).copied().unwrap_or(0)
    }
}

struct InMemoryFile(String);

impl VfsFile for InMemoryFile {
    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

impl VirtualFileSystem for InMemoryFilesystem {
    fn open(&self, name: &Path) -> io::Result<Box<dyn VfsFile>> {
        let contents = self
            .files
            .get(name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{}", name.display())))?;
        *self.open_counts.lock().unwrap().entry(name.to_path_buf()).or_insert(0) += 1;
        Ok(Box::new(InMemoryFile(contents.clone())))
    }
}
