pub mod document;

pub use document::PdfEngine;
