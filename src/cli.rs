use crate::options::SplitOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdfsplit")]
#[command(about = "Split PDF documents according to page-range rules")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub path: PathBuf,

    /// First page to include (1-based)
    #[arg(short, long)]
    pub start_page: Option<u32>,

    /// Last page to include (1-based)
    #[arg(short, long)]
    pub end_page: Option<u32>,

    /// Start a new output after every N pages
    #[arg(short = 'p', long = "split")]
    pub split: Option<u32>,

    /// Directory for the outputs (defaults to the working directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions {
            start_page: self.start_page,
            end_page: self.end_page,
            split_interval: self.split,
        }
    }
}
