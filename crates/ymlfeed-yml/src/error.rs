use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing a YML feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to create file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode XML: {0}")]
    Xml(#[from] quick_xml::Error),
}
