//! Error type shared by the registry, the serializer and config loading.

use thiserror::Error;

/// Errors produced while building or serializing a sitemap.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// An append referenced a `loc` that was never registered (strict mode only).
    #[error("no sitemap entry registered for loc `{loc}`")]
    NotFound { loc: String },

    /// A caller-supplied value was rejected, e.g. an empty `loc`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The output sink failed.
    #[error("failed to write sitemap: {0}")]
    Io(#[from] std::io::Error),

    /// The serialized document was not valid UTF-8.
    #[error("sitemap output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A JSON configuration could not be parsed.
    #[error("invalid sitemap config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SitemapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_loc() {
        let err = SitemapError::NotFound {
            loc: "https://example.com/missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no sitemap entry registered for loc `https://example.com/missing`"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fail() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }
        assert!(matches!(fail(), Err(SitemapError::Io(_))));
    }
}
