use crate::engine::DocumentEngine;
use crate::error::{Result, SplitError};
use crate::options::SplitOptions;
use crate::partition::{plan_partition, PageRange};
use lopdf::{Document, ObjectId};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let doc = Document::load(path).map_err(|source| SplitError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Copy of this document holding only the pages in `range`
    pub fn extract_range(&self, range: PageRange) -> PdfDocument {
        let mut new_doc = self.doc.clone();
        let keep = range.pages();

        let pages_to_delete: Vec<u32> = self
            .page_ids()
            .iter()
            .filter(|(num, _)| !keep.contains(num))
            .map(|(num, _)| *num)
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
            new_doc.prune_objects();
        }

        PdfDocument { doc: new_doc }
    }

    /// Write to a file. The handle is closed when this returns, on success
    /// or failure.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let write_error = |source| SplitError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save_to(&mut writer)
            .map_err(|source| SplitError::Serialize {
                path: path.to_path_buf(),
                source: lopdf::Error::IO(source),
            })?;
        writer.flush().map_err(write_error)?;
        Ok(())
    }
}

/// Document engine backed by lopdf
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfEngine;

impl DocumentEngine for PdfEngine {
    type Document = PdfDocument;

    fn load(&self, path: &Path) -> Result<PdfDocument> {
        PdfDocument::open(path)
    }

    fn split(&self, document: &PdfDocument, options: &SplitOptions) -> Result<Vec<PdfDocument>> {
        let ranges = plan_partition(document.page_count(), options)?;
        Ok(ranges
            .into_iter()
            .map(|range| {
                debug!(pages = %range, count = range.page_count(), "extracting sub-document");
                document.extract_range(range)
            })
            .collect())
    }

    fn serialize(&self, document: &mut PdfDocument, path: &Path) -> Result<()> {
        document.save(path)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::{dictionary, Object};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// In-memory PDF whose pages carry a `PageTag` entry equal to their
    /// original 1-based page number.
    pub(crate) fn tagged_document(pages: u32) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = (1..=pages)
            .map(|num| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "PageTag" => num as i64,
                })
                .into()
            })
            .collect();

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    pub(crate) fn page_tags(doc: &Document) -> Vec<i64> {
        doc.get_pages()
            .values()
            .map(|id| {
                doc.get_dictionary(*id)
                    .and_then(|page| page.get(b"PageTag"))
                    .and_then(|tag| tag.as_i64())
                    .unwrap()
            })
            .collect()
    }

    fn write_fixture(dir: &TempDir, name: &str, pages: u32) -> std::path::PathBuf {
        let path = dir.path().join(name);
        tagged_document(pages).save(&path).unwrap();
        path
    }

    #[test]
    fn test_open_and_count() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "ten.pdf", 10);
        let doc = PdfDocument::open(&path).unwrap();
        assert_eq!(doc.page_count(), 10);
        assert_eq!(doc.page_ids().len(), 10);
    }

    #[test]
    fn test_open_garbage_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();
        let err = PdfEngine.load(&path).err().unwrap();
        assert!(matches!(err, SplitError::Load { .. }));
    }

    #[test]
    fn test_extract_range() {
        let doc = PdfDocument {
            doc: tagged_document(6),
        };
        let part = doc.extract_range(PageRange::new(2, 4));
        assert_eq!(part.page_count(), 3);
        assert_eq!(page_tags(&part.doc), vec![2, 3, 4]);
        assert_eq!(doc.page_count(), 6);
    }

    #[test]
    fn test_split_without_options_keeps_all_pages() {
        let doc = PdfDocument {
            doc: tagged_document(5),
        };
        let parts = PdfEngine.split(&doc, &SplitOptions::default()).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(page_tags(&parts[0].doc), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_split_interval() {
        let doc = PdfDocument {
            doc: tagged_document(10),
        };
        let options = SplitOptions {
            split_interval: Some(3),
            ..Default::default()
        };
        let parts = PdfEngine.split(&doc, &options).unwrap();
        let tags: Vec<_> = parts.iter().map(|part| page_tags(&part.doc)).collect();
        assert_eq!(
            tags,
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
        );
    }

    #[test]
    fn test_serialize_round_trips_pages() {
        let dir = TempDir::new().unwrap();
        let doc = PdfDocument {
            doc: tagged_document(4),
        };
        let mut part = doc.extract_range(PageRange::new(3, 4));
        let out = dir.path().join("part.pdf");
        PdfEngine.serialize(&mut part, &out).unwrap();

        let reloaded = PdfDocument::open(&out).unwrap();
        assert_eq!(page_tags(&reloaded.doc), vec![3, 4]);
    }

    #[test]
    fn test_serialize_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let mut doc = PdfDocument {
            doc: tagged_document(1),
        };
        let out = dir.path().join("missing").join("part.pdf");
        let err = PdfEngine.serialize(&mut doc, &out).unwrap_err();
        assert!(matches!(err, SplitError::Write { .. }));
    }
}
