//! Form drafts and client-side validation.
//!
//! Two forms exist on the site: the "Join Now" contact modal and the careers
//! application. Each keeps a draft of raw field values plus submission flags
//! in a [`FormState`]. Values are truncated to the field limit on every
//! keystroke; validation runs once, when the user submits.

pub mod resume;
pub mod submission;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::i18n::Text;
pub use resume::{ResumeError, ResumeFile};
pub use submission::{submit, SubmitError, SUBMIT_DELAY};

/// Upper bound for single-line fields.
pub const MAX_FIELD_LEN: usize = 100;
/// Upper bound for the careers message body.
pub const MAX_MESSAGE_LEN: usize = 2000;
/// Lower bound for names and company names.
pub const MIN_NAME_LEN: usize = 2;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\s]+$").expect("valid name regex"));

/// A form field, with its storage limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Linkedin,
    Message,
}

impl Field {
    /// The `name`/`id` attribute used in markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Linkedin => "linkedin",
            Field::Message => "message",
        }
    }

    pub fn max_len(&self) -> usize {
        match self {
            Field::Message => MAX_MESSAGE_LEN,
            _ => MAX_FIELD_LEN,
        }
    }
}

/// Validation failures, surfaced inline next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name is required")]
    NameRequired,
    #[error("name must be between {MIN_NAME_LEN} and {MAX_FIELD_LEN} characters")]
    NameLength,
    #[error("name may only contain letters and whitespace")]
    NameCharacters,
    #[error("invalid email format")]
    EmailInvalid,
    #[error("email must be at most {MAX_FIELD_LEN} characters")]
    EmailTooLong,
    #[error("company name must be between {MIN_NAME_LEN} and {MAX_FIELD_LEN} characters")]
    CompanyLength,
    #[error("linkedin profile must be an absolute http(s) URL")]
    LinkedinInvalid,
    #[error("message is required")]
    MessageRequired,
    #[error("resume is required")]
    ResumeRequired,
    #[error(transparent)]
    Resume(#[from] ResumeError),
}

impl FormError {
    /// Localized message key for this error.
    pub fn text(&self) -> Text {
        match self {
            FormError::NameRequired => Text::ErrNameRequired,
            FormError::NameLength => Text::ErrNameLength,
            FormError::NameCharacters => Text::ErrNameCharacters,
            FormError::EmailInvalid => Text::ErrEmailInvalid,
            FormError::EmailTooLong => Text::ErrEmailTooLong,
            FormError::CompanyLength => Text::ErrCompanyLength,
            FormError::LinkedinInvalid => Text::ErrLinkedinInvalid,
            FormError::MessageRequired => Text::ErrMessageRequired,
            FormError::ResumeRequired => Text::ErrResumeRequired,
            FormError::Resume(e) => e.text(),
        }
    }
}

/// Truncate to at most `max` characters (not bytes).
pub fn truncate(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((idx, _)) => value[..idx].to_string(),
        None => value.to_string(),
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Name: required, 2..=100 characters. With `letters_only`, letters (with
/// their combining marks) and whitespace only, in any script.
pub fn validate_name(value: &str, letters_only: bool) -> Result<(), FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::NameRequired);
    }
    let len = char_len(value);
    if !(MIN_NAME_LEN..=MAX_FIELD_LEN).contains(&len) {
        return Err(FormError::NameLength);
    }
    if letters_only && !NAME_RE.is_match(value) {
        return Err(FormError::NameCharacters);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FormError> {
    if char_len(value) > MAX_FIELD_LEN {
        return Err(FormError::EmailTooLong);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FormError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_company(value: &str) -> Result<(), FormError> {
    let len = char_len(value.trim());
    if !(MIN_NAME_LEN..=MAX_FIELD_LEN).contains(&len) {
        return Err(FormError::CompanyLength);
    }
    Ok(())
}

/// Optional profile link; empty is accepted.
pub fn validate_profile_url(value: &str) -> Result<Option<url::Url>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let parsed = url::Url::parse(value).map_err(|_| FormError::LinkedinInvalid)?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(Some(parsed)),
        _ => Err(FormError::LinkedinInvalid),
    }
}

/// A form's raw field values.
pub trait Draft: Default {
    /// Validated payload handed to the submitter.
    type Valid: Send + 'static;

    /// Store an already-truncated value.
    fn store(&mut self, field: Field, value: String);

    fn value(&self, field: Field) -> &str;

    fn validate(&self) -> Result<Self::Valid, FormError>;

    /// Record a keystroke, truncating to the field limit.
    fn set(&mut self, field: Field, value: &str) {
        self.store(field, truncate(value, field.max_len()));
    }
}

/// Draft of the "Join Now" contact modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
}

/// A validated contact request.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl Draft for ContactDraft {
    type Valid = ContactRequest;

    fn store(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Linkedin | Field::Message => {
                tracing::debug!("contact form has no {} field", field.as_str());
            }
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Linkedin | Field::Message => "",
        }
    }

    fn validate(&self) -> Result<ContactRequest, FormError> {
        validate_email(&self.email)?;
        validate_name(&self.name, true)?;
        validate_company(&self.company)?;
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
        })
    }
}

/// Draft of the careers application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub message: String,
    resume: Option<ResumeFile>,
}

/// A validated job application.
#[derive(Clone, Debug, PartialEq)]
pub struct Application {
    pub name: String,
    pub email: String,
    pub linkedin: Option<url::Url>,
    pub message: String,
    pub resume: ResumeFile,
}

impl ApplicationDraft {
    /// Accept or reject a selected file. A rejected file also clears any
    /// previously accepted one.
    pub fn select_resume(&mut self, file: ResumeFile) -> Result<(), ResumeError> {
        match resume::check(&file) {
            Ok(()) => {
                self.resume = Some(file);
                Ok(())
            }
            Err(e) => {
                self.resume = None;
                Err(e)
            }
        }
    }

    pub fn clear_resume(&mut self) {
        self.resume = None;
    }

    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    /// File name shown under the upload control (empty when none).
    pub fn resume_name(&self) -> &str {
        self.resume.as_ref().map(|r| r.name.as_str()).unwrap_or("")
    }
}

impl Draft for ApplicationDraft {
    type Valid = Application;

    fn store(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Linkedin => self.linkedin = value,
            Field::Message => self.message = value,
            Field::Company => tracing::debug!("application form has no company field"),
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Linkedin => &self.linkedin,
            Field::Message => &self.message,
            Field::Company => "",
        }
    }

    fn validate(&self) -> Result<Application, FormError> {
        validate_name(&self.name, false)?;
        validate_email(&self.email)?;
        let linkedin = validate_profile_url(&self.linkedin)?;
        if self.message.trim().is_empty() {
            return Err(FormError::MessageRequired);
        }
        let resume = self.resume.clone().ok_or(FormError::ResumeRequired)?;
        Ok(Application {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            linkedin,
            message: self.message.trim().to_string(),
            resume,
        })
    }
}

/// A draft plus its submission flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    submitting: bool,
    submitted: bool,
    error: Option<FormError>,
}

impl<D: Draft> FormState<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            submitting: false,
            submitted: false,
            error: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Acknowledgment flag, set after a successful submission.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn set_error(&mut self, error: FormError) {
        self.error = Some(error);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Record a keystroke.
    pub fn input(&mut self, field: Field, value: &str) {
        self.draft.set(field, value);
    }

    /// Validate and mark the form in flight.
    ///
    /// Returns `None` when a submission is already running or validation
    /// fails; in the latter case the error is kept and the draft is untouched.
    pub fn begin_submit(&mut self) -> Option<D::Valid> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        match self.draft.validate() {
            Ok(valid) => {
                self.error = None;
                Some(valid)
            }
            Err(e) => {
                tracing::warn!("Form submission rejected: {}", e);
                self.error = Some(e);
                self.submitting = false;
                None
            }
        }
    }

    /// Settle an in-flight submission.
    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.draft = D::default();
                self.error = None;
                self.submitted = true;
            }
            Err(e) => {
                tracing::error!("Form submission error: {}", e);
            }
        }
    }

    /// Clear the acknowledgment (e.g. when the modal is reopened).
    pub fn reset_ack(&mut self) {
        self.submitted = false;
    }
}

impl FormState<ApplicationDraft> {
    /// Offer a picked file to the draft. Returns false when it was rejected,
    /// in which case the reason is shown inline and the picker should forget
    /// the file.
    pub fn choose_resume(&mut self, file: ResumeFile) -> bool {
        match self.draft.select_resume(file) {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(e) => {
                tracing::warn!("Resume rejected: {}", e);
                self.error = Some(FormError::from(e));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> ResumeFile {
        ResumeFile::new(name, Some("application/pdf"), size)
    }

    fn filled_contact() -> FormState<ContactDraft> {
        let mut form = FormState::<ContactDraft>::new();
        form.input(Field::Name, "Noura Al Saud");
        form.input(Field::Email, "noura@company.sa");
        form.input(Field::Company, "Acme Inc.");
        form
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let arabic = "ن".repeat(150);
        let cut = truncate(&arabic, MAX_FIELD_LEN);
        assert_eq!(cut.chars().count(), MAX_FIELD_LEN);
        assert_eq!(truncate("short", MAX_FIELD_LEN), "short");
    }

    #[test]
    fn test_overlong_input_is_truncated_before_storage() {
        let mut form = FormState::<ContactDraft>::new();
        for field in [Field::Name, Field::Email, Field::Company] {
            form.input(field, &"x".repeat(250));
            assert_eq!(form.draft.value(field).chars().count(), MAX_FIELD_LEN);
        }

        let mut application = FormState::<ApplicationDraft>::new();
        application.input(Field::Message, &"m".repeat(MAX_MESSAGE_LEN + 10));
        assert_eq!(application.draft.message.len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_email_pattern() {
        assert!(validate_email("john@company.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.sa").is_ok());
        for bad in ["", "john", "john@", "john@company", "jo hn@company.com", "@x.io"] {
            assert_eq!(validate_email(bad), Err(FormError::EmailInvalid), "{bad:?}");
        }
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name("  ", true), Err(FormError::NameRequired));
        assert_eq!(validate_name("J", true), Err(FormError::NameLength));
        assert_eq!(validate_name("R2-D2", true), Err(FormError::NameCharacters));
        assert!(validate_name("R2-D2", false).is_ok());
        assert!(validate_name("نورة السعود", true).is_ok());
        // Combining marks: Arabic harakat and a decomposed accent.
        assert!(validate_name("نُورَة", true).is_ok());
        assert!(validate_name("Jose\u{301} Alvarez", true).is_ok());
        assert_eq!(validate_name("\u{301}\u{301}!", true), Err(FormError::NameCharacters));
    }

    #[test]
    fn test_invalid_email_rejects_without_clearing_draft() {
        let mut form = filled_contact();
        form.input(Field::Email, "not-an-email");
        let before = form.draft.clone();

        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some(&FormError::EmailInvalid));
        assert!(!form.is_submitting());
        assert!(!form.is_submitted());
        assert_eq!(form.draft, before);
    }

    #[test]
    fn test_successful_submit_clears_draft_and_acknowledges() {
        let mut form = filled_contact();
        let request = form.begin_submit().expect("valid draft");
        assert_eq!(request.company, "Acme Inc.");
        assert!(form.is_submitting());

        // A second click while in flight is ignored.
        assert!(form.begin_submit().is_none());

        form.finish(Ok(()));
        assert!(!form.is_submitting());
        assert!(form.is_submitted());
        assert_eq!(form.draft, ContactDraft::default());
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut form = filled_contact();
        form.begin_submit().expect("valid draft");
        form.finish(Err(SubmitError::Transport("offline".into())));
        assert!(!form.is_submitting());
        assert!(!form.is_submitted());
        assert_eq!(form.draft.name, "Noura Al Saud");
    }

    #[test]
    fn test_application_requires_resume_and_message() {
        let mut form = FormState::<ApplicationDraft>::new();
        form.input(Field::Name, "John Doe");
        form.input(Field::Email, "john@example.com");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some(&FormError::MessageRequired));

        form.input(Field::Message, "I love circular economies.");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some(&FormError::ResumeRequired));

        form.draft.select_resume(pdf("cv.pdf", 1024)).unwrap();
        let application = form.begin_submit().expect("complete application");
        assert_eq!(application.resume.name, "cv.pdf");
        assert!(application.linkedin.is_none());
    }

    #[test]
    fn test_linkedin_must_be_web_url_when_present() {
        assert_eq!(validate_profile_url("   "), Ok(None));
        assert!(validate_profile_url("https://linkedin.com/in/johndoe")
            .unwrap()
            .is_some());
        assert_eq!(
            validate_profile_url("linkedin.com/in/johndoe"),
            Err(FormError::LinkedinInvalid)
        );
        assert_eq!(
            validate_profile_url("ftp://linkedin.com/in/johndoe"),
            Err(FormError::LinkedinInvalid)
        );
    }

    #[test]
    fn test_rejected_file_clears_stored_name() {
        let mut draft = ApplicationDraft::default();
        draft.select_resume(pdf("cv.pdf", 2048)).unwrap();
        assert_eq!(draft.resume_name(), "cv.pdf");

        let word = ResumeFile::new(
            "cv.docx",
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            2048,
        );
        assert!(draft.select_resume(word).is_err());
        assert_eq!(draft.resume_name(), "");

        draft.select_resume(pdf("cv.pdf", 2048)).unwrap();
        assert!(draft
            .select_resume(pdf("huge.pdf", resume::MAX_RESUME_BYTES + 1))
            .is_err());
        assert_eq!(draft.resume_name(), "");
    }

    #[test]
    fn test_choosing_a_rejected_resume_tells_the_picker_to_reset() {
        let mut form = FormState::<ApplicationDraft>::new();
        let image = ResumeFile::new("cv.png", Some("image/png"), 512);

        assert!(!form.choose_resume(image.clone()));
        assert_eq!(form.error().map(FormError::text), Some(Text::ErrResumeType));
        assert_eq!(form.draft.resume_name(), "");

        // The same file again is rejected again, not silently ignored.
        assert!(!form.choose_resume(image));
        assert!(form.error().is_some());

        assert!(form.choose_resume(pdf("cv.pdf", 1024)));
        assert!(form.error().is_none());
        assert_eq!(form.draft.resume_name(), "cv.pdf");
    }

    #[test]
    fn test_errors_map_to_catalog_text() {
        assert_eq!(FormError::EmailInvalid.text(), Text::ErrEmailInvalid);
        let nested = FormError::from(ResumeError::NotPdf {
            content_type: "image/png".into(),
        });
        assert_eq!(nested.text(), Text::ErrResumeType);
    }
}
