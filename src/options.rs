use crate::error::{Result, SplitError};

/// Page selection and chunking directives for a split.
///
/// All fields are 1-based and optional. Unset fields fall back to the
/// engine defaults: the whole document, emitted as a single output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    pub start_page: Option<u32>,
    pub end_page: Option<u32>,
    pub split_interval: Option<u32>,
}

impl SplitOptions {
    /// Reject values that can never describe a page selection
    pub fn validate(&self) -> Result<()> {
        if self.start_page == Some(0) {
            return Err(SplitError::configuration("start page must be >= 1"));
        }
        if self.end_page == Some(0) {
            return Err(SplitError::configuration("end page must be >= 1"));
        }
        if self.split_interval == Some(0) {
            return Err(SplitError::configuration("split interval must be >= 1"));
        }
        if let (Some(start), Some(end)) = (self.start_page, self.end_page) {
            if start > end {
                return Err(SplitError::configuration(format!(
                    "start page {} is after end page {}",
                    start, end
                )));
            }
        }
        Ok(())
    }
}
