use std::{
    io::{self, Error, ErrorKind},
    path::Path,
};

use crate::error::CssResult;

/// Where stylesheets and markup are read from
///
/// [`optimize_path`][crate::optimize_path] and
/// [`UsageIndex::scan_path`][crate::UsageIndex::scan_path] go through this
/// trait, so an embedder can serve files from memory or an archive.
pub trait Fs: std::fmt::Debug {
    /// Read the entire contents of a file into a bytes vector.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read a file that must be valid UTF-8
    fn read_to_string(&self, path: &Path) -> CssResult<String> {
        Ok(String::from_utf8(self.read(path)?)?)
    }
}

/// Reads from disk with [`std::fs`]. This is the default.
#[derive(Debug)]
pub struct StdFs;

impl Fs for StdFs {
    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Has no files at all
///
/// Useful when every input is supplied as a string and nothing should touch
/// the disk.
#[derive(Debug)]
pub struct NullFs;

impl Fs for NullFs {
    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        Err(Error::new(
            ErrorKind::NotFound,
            format!("{}: there is no file system", path.display()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::error::PublicCssErrorKind;

    use super::{Fs, NullFs};

    #[derive(Debug)]
    struct Bytes(&'static [u8]);

    impl Fs for Bytes {
        fn read(&self, _path: &Path) -> std::io::Result<Vec<u8>> {
            Ok(self.0.to_vec())
        }
    }

    #[test]
    fn text_must_be_utf8() {
        let fs = Bytes(b"a{b:\xFF}");

        let err = fs.read_to_string(Path::new("a.css")).unwrap_err();
        assert!(matches!(err.kind(), PublicCssErrorKind::FromUtf8Error(..)));

        assert_eq!(Bytes(b"a{}").read_to_string(Path::new("a.css")).unwrap(), "a{}");
    }

    #[test]
    fn null_fs_names_the_path() {
        let err = NullFs.read(Path::new("site.css")).unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("site.css"));
    }
}
