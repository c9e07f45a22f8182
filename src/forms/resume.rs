//! Resume upload checks for the careers form.

use thiserror::Error;

use crate::i18n::Text;

/// The only accepted document type.
pub const ACCEPTED_MIME: &str = "application/pdf";

/// 5 MiB.
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Metadata of a file picked in the upload control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    /// MIME type as reported by the browser, if any.
    pub content_type: Option<String>,
    pub size: u64,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, content_type: Option<&str>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.map(str::to_string),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeError {
    #[error("expected {ACCEPTED_MIME}, got {content_type:?}")]
    NotPdf { content_type: String },
    #[error("file is {size} bytes, limit is {MAX_RESUME_BYTES}")]
    TooLarge { size: u64 },
}

impl ResumeError {
    pub fn text(&self) -> Text {
        match self {
            ResumeError::NotPdf { .. } => Text::ErrResumeType,
            ResumeError::TooLarge { .. } => Text::ErrResumeSize,
        }
    }
}

/// Exact MIME match, then the size ceiling.
pub fn check(file: &ResumeFile) -> Result<(), ResumeError> {
    let content_type = file.content_type.as_deref().unwrap_or("");
    if content_type != ACCEPTED_MIME {
        return Err(ResumeError::NotPdf {
            content_type: content_type.to_string(),
        });
    }
    if file.size > MAX_RESUME_BYTES {
        return Err(ResumeError::TooLarge { size: file.size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let at_limit = ResumeFile::new("cv.pdf", Some(ACCEPTED_MIME), MAX_RESUME_BYTES);
        assert!(check(&at_limit).is_ok());

        let over = ResumeFile::new("cv.pdf", Some(ACCEPTED_MIME), MAX_RESUME_BYTES + 1);
        assert_eq!(
            check(&over),
            Err(ResumeError::TooLarge {
                size: 5 * 1024 * 1024 + 1
            })
        );
    }

    #[test]
    fn test_type_must_match_exactly() {
        // Extension alone is not enough.
        let no_type = ResumeFile::new("cv.pdf", None, 10);
        assert!(matches!(check(&no_type), Err(ResumeError::NotPdf { .. })));

        let with_params = ResumeFile::new("cv.pdf", Some("application/pdf; charset=binary"), 10);
        assert!(check(&with_params).is_err());

        let image = ResumeFile::new("cv.png", Some("image/png"), 10);
        assert_eq!(
            check(&image).unwrap_err().text(),
            Text::ErrResumeType
        );
    }
}
