//! Generated files and their persistence.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;
use wiregen_core::{GeneratorError, GeneratorResult};

/// One rendered source file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// Path relative to the output root.
    pub path: PathBuf,

    /// Name of the class the file declares.
    pub class_name: String,

    pub contents: String,
}

impl GeneratedFile {
    pub fn new(path: PathBuf, class_name: impl Into<String>, contents: String) -> Self {
        Self {
            path,
            class_name: class_name.into(),
            contents,
        }
    }
}

/// Everything generated for one schema document.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// The message class.
    pub message: GeneratedFile,

    /// Structure classes, in the order they were emitted.
    pub structs: Vec<GeneratedFile>,
}

impl GenerationOutput {
    /// All files, structures first.
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.structs.iter().chain(std::iter::once(&self.message))
    }

    /// Find a generated file by class name.
    pub fn file(&self, class_name: &str) -> Option<&GeneratedFile> {
        self.files().find(|f| f.class_name == class_name)
    }

    /// Write every file under `root`, creating directories and overwriting
    /// existing files. Returns the written paths.
    ///
    /// Each file is first written to a temporary file beside its target, and
    /// targets are replaced only once every file is staged. A failure while
    /// staging leaves no generated file behind. The final renames are not
    /// atomic as a group: if one of them fails, earlier targets are already
    /// replaced.
    pub fn persist(&self, root: &Path) -> GeneratorResult<Vec<PathBuf>> {
        let mut staged = Vec::new();
        for file in self.files() {
            let path = root.join(&file.path);
            let temp = stage(&path, &file.contents)?;
            staged.push((temp, path, file.class_name.as_str()));
        }

        let mut written = Vec::with_capacity(staged.len());
        for (temp, path, class) in staged {
            temp.persist(&path).map_err(|e| GeneratorError::Io {
                path: path.clone(),
                source: e.error,
            })?;

            info!(path = %path.display(), class, "wrote generated class");
            written.push(path);
        }

        Ok(written)
    }
}

/// Write `contents` to a temporary file in the directory of `path`.
fn stage(path: &Path, contents: &str) -> GeneratorResult<NamedTempFile> {
    let io_error = |source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        return Err(io_error(io::Error::new(
            io::ErrorKind::IsADirectory,
            "output path is a directory",
        )));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| GeneratorError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    temp.write_all(contents.as_bytes()).map_err(io_error)?;

    // Temporary files are created owner-only.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(io_error)?;
    }

    Ok(temp)
}
