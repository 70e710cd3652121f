//! File-append orchestration
//!
//! The emitters write to any `io::Write`; this module is the one place a
//! file handle is owned. `with_file` performs scoped acquisition: it opens
//! the path, hands a buffered writer to the caller's closure, and releases
//! the handle on every exit path, including closure failure.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::utils::error::EmitResult;

/// How `with_file` opens the target file
///
/// Both modes create the file when it does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Append to existing content
    #[default]
    Append,
    /// Truncate existing content
    Truncate,
}

/// Open `path`, apply `func` to the handle, and release it
///
/// The handle is buffered and flushed after `func` returns successfully.
/// When `func` fails the handle is still released (dropped) before the
/// error propagates.
///
/// # Errors
///
/// Fails when the file cannot be opened, when `func` fails, or when the
/// final flush fails.
pub fn with_file<P, T, F>(path: P, mode: FileMode, func: F) -> EmitResult<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> EmitResult<T>,
{
    let file = match mode {
        FileMode::Append => OpenOptions::new().create(true).append(true).open(path)?,
        FileMode::Truncate => File::create(path)?,
    };

    let mut writer = BufWriter::new(file);
    let value = func(&mut writer)?;
    writer.flush()?;
    Ok(value)
}

/// Create every directory in the list, including missing parents
///
/// Idempotent: directories that already exist are left untouched.
pub fn create_dirs<I>(dirs: I) -> EmitResult<()>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    for dir in dirs {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EmitError;

    #[test]
    fn test_with_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.tex");

        with_file(&path, FileMode::Append, |f| {
            f.write_all(b"first ")?;
            Ok(())
        })
        .unwrap();
        with_file(&path, FileMode::Append, |f| {
            f.write_all(b"second")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first second");
    }

    #[test]
    fn test_with_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.tex");

        with_file(&path, FileMode::Append, |f| {
            f.write_all(b"old content")?;
            Ok(())
        })
        .unwrap();
        with_file(&path, FileMode::Truncate, |f| {
            f.write_all(b"new")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_with_file_releases_handle_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.tex");

        let result: EmitResult<()> = with_file(&path, FileMode::Append, |f| {
            f.write_all(b"partial")?;
            f.flush()?;
            Err(EmitError::invalid("forced failure"))
        });
        assert!(result.is_err());

        // The handle was released: the file opens again and appends cleanly
        with_file(&path, FileMode::Append, |f| {
            f.write_all(b" and more")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "partial and more");
    }

    #[test]
    fn test_with_file_returns_closure_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.tex");

        let written = with_file(&path, FileMode::Truncate, |f| {
            f.write_all(b"abc")?;
            Ok(3usize)
        })
        .unwrap();
        assert_eq!(written, 3);
    }

    #[test]
    fn test_create_dirs_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("figs");
        let b = dir.path().join("out/nested");

        create_dirs([&a, &b]).unwrap();
        assert!(a.is_dir());
        assert!(b.is_dir());

        // Second call over the same list is a no-op
        create_dirs([&a, &b]).unwrap();
        assert!(a.is_dir());
        assert!(b.is_dir());
    }
}
