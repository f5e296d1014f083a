use std::ffi::{OsStr, OsString};
use std::path::Path;

/// An input path decomposed into the pieces used to name its outputs.
///
/// Names are kept as `OsString` so that a file name which is not valid
/// UTF-8 still yields outputs carrying its exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    basename: OsString,
    extension: Option<OsString>,
    stem: OsString,
}

impl SourcePath {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let basename = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| path.as_os_str().to_os_string());

        let (stem, extension) = match split_at_last_dot(&basename) {
            Some((stem, extension)) => (stem.to_os_string(), Some(extension.to_os_string())),
            None => (basename.clone(), None),
        };

        SourcePath {
            basename,
            extension,
            stem,
        }
    }

    pub fn basename(&self) -> &OsStr {
        &self.basename
    }

    pub fn extension(&self) -> Option<&OsStr> {
        self.extension.as_deref()
    }

    pub fn stem(&self) -> &OsStr {
        &self.stem
    }

    /// Name of the `index`th (1-based) output.
    ///
    /// The full basename, not the stem, precedes the index: `report.pdf`
    /// becomes `report.pdf-1.pdf`.
    pub fn output_name(&self, index: usize) -> OsString {
        let mut name = self.basename.clone();
        name.push(format!("-{}", index));
        if let Some(extension) = &self.extension {
            name.push(".");
            name.push(extension);
        }
        name
    }
}

fn split_at_last_dot(name: &OsStr) -> Option<(&OsStr, &OsStr)> {
    let bytes = name.as_encoded_bytes();
    let dot = bytes.iter().rposition(|&b| b == b'.')?;
    // SAFETY: both halves are split next to an ASCII '.', which the
    // encoded-bytes contract allows.
    unsafe {
        Some((
            OsStr::from_encoded_bytes_unchecked(&bytes[..dot]),
            OsStr::from_encoded_bytes_unchecked(&bytes[dot + 1..]),
        ))
    }
}
