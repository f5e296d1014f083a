use crate::error::{Result, SplitError};
use crate::options::SplitOptions;
use std::fmt;

/// Contiguous, inclusive, 1-based page range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Self {
        PageRange { start, end }
    }

    /// Expand this range into a list of 1-based page numbers
    pub fn pages(&self) -> Vec<u32> {
        (self.start..=self.end).collect()
    }

    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Resolve split options against a document of `total_pages` pages.
///
/// The selected range runs from the start page (default 1) to the end page
/// (default, and clamped to, the last page). It is then chunked every
/// `split_interval` pages counting from the start page; without an interval
/// the whole selection is a single chunk.
pub fn plan_partition(total_pages: u32, options: &SplitOptions) -> Result<Vec<PageRange>> {
    options.validate()?;

    if total_pages == 0 {
        return Ok(Vec::new());
    }

    let first = options.start_page.unwrap_or(1);
    let last = options.end_page.unwrap_or(total_pages).min(total_pages);

    if first > total_pages {
        return Err(SplitError::configuration(format!(
            "start page {} exceeds total pages {}",
            first, total_pages
        )));
    }

    let interval = options.split_interval.unwrap_or(last - first + 1);

    let mut ranges = Vec::new();
    let mut start = first;
    while start <= last {
        let end = start.saturating_add(interval - 1).min(last);
        ranges.push(PageRange::new(start, end));
        start = end + 1;
    }

    Ok(ranges)
}
