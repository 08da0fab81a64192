use std::path::PathBuf;

use clap::Parser;
use search_header_plugin::marker_file::MARKER_FILE_PATH;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub(crate) struct CliArguments {
    #[arg(short, long, env = "SEARCH_BACKEND_URL")]
    pub backend_url: String,

    #[arg(short, long, default_value = "/")]
    pub path: String,

    #[arg(short = 'n', long, default_value_t = 1)]
    pub requests: usize,

    /// Create the legacy marker file before sending anything
    #[arg(short, long, num_args = 0..=1, default_missing_value = MARKER_FILE_PATH)]
    pub marker_file: Option<PathBuf>,
}

impl CliArguments {
    pub(crate) fn target_url(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), self.path)
    }
}
