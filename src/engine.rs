use crate::error::Result;
use crate::options::SplitOptions;
use std::path::Path;

/// The document operations the split driver needs: open a file, break it
/// into ordered sub-documents, and write one sub-document to disk.
pub trait DocumentEngine {
    type Document;

    fn load(&self, path: &Path) -> Result<Self::Document>;

    /// Sub-documents come back in page order.
    fn split(
        &self,
        document: &Self::Document,
        options: &SplitOptions,
    ) -> Result<Vec<Self::Document>>;

    fn serialize(&self, document: &mut Self::Document, path: &Path) -> Result<()>;
}
