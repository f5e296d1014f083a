use crate::engine::DocumentEngine;
use crate::error::{Result, SplitError};
use crate::naming::SourcePath;
use crate::options::SplitOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything a split run needs, fixed once the command line is parsed
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub input: PathBuf,
    pub options: SplitOptions,
    /// Outputs go to the working directory when unset
    pub output_dir: Option<PathBuf>,
}

/// Split `request.input` and write each sub-document in page order,
/// reporting every written file on `out`. The first failure stops the run;
/// files already written stay in place.
pub fn run<E, W>(engine: &E, request: &SplitRequest, out: &mut W) -> Result<Vec<PathBuf>>
where
    E: DocumentEngine,
    W: Write,
{
    let input = std::path::absolute(&request.input).unwrap_or_else(|_| request.input.clone());
    if !input.exists() {
        return Err(SplitError::NotFound { path: input });
    }

    request.options.validate()?;

    let document = engine.load(&input)?;
    let documents = engine.split(&document, &request.options)?;
    info!(
        input = %input.display(),
        outputs = documents.len(),
        "split planned"
    );

    if let Some(dir) = &request.output_dir {
        std::fs::create_dir_all(dir).map_err(|source| SplitError::Write {
            path: dir.clone(),
            source,
        })?;
    }

    let source = SourcePath::new(&input);
    debug!(
        basename = ?source.basename(),
        stem = ?source.stem(),
        extension = ?source.extension(),
        "naming outputs"
    );

    let mut written = Vec::with_capacity(documents.len());
    for (index, mut sub_document) in documents.into_iter().enumerate() {
        let output = output_path(request.output_dir.as_deref(), &source, index + 1);
        engine.serialize(&mut sub_document, &output)?;
        writeln!(out, "Wrote output {}", output.display())?;
        written.push(output);
    }

    Ok(written)
}

fn output_path(output_dir: Option<&Path>, source: &SourcePath, index: usize) -> PathBuf {
    let name = source.output_name(index);
    match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
