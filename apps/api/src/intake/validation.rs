//! Local intake validation: rejects bad submissions before any engine call.

use crate::models::job::JobSubmission;

/// File extensions the upload endpoint accepts.
pub const ALLOWED_FILE_TYPES: &[&str] = &["pdf", "docx", "txt"];

/// Upload size cap: 10 MB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Sanity ceiling for required experience on a posting.
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

/// A rejected field with an inline message, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Checks an uploaded resume file. Returns the lowercased extension on
/// success so callers store a normalized file type.
pub fn validate_resume_file(filename: &str, size_bytes: u64) -> Result<String, FieldError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty());

    let Some(extension) = extension else {
        return Err(FieldError::new(
            "file",
            format!(
                "File '{filename}' has no extension; allowed types: {}",
                ALLOWED_FILE_TYPES.join(", ")
            ),
        ));
    };

    if !ALLOWED_FILE_TYPES.contains(&extension.as_str()) {
        return Err(FieldError::new(
            "file",
            format!(
                "File type '{extension}' not supported; allowed types: {}",
                ALLOWED_FILE_TYPES.join(", ")
            ),
        ));
    }

    if size_bytes == 0 {
        return Err(FieldError::new("file", "Uploaded file is empty"));
    }

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(FieldError::new(
            "file",
            format!("File exceeds the {} MB upload limit", MAX_UPLOAD_BYTES / (1024 * 1024)),
        ));
    }

    Ok(extension)
}

/// Checks a job submission, collecting every failing field. Whitespace-only
/// text counts as empty.
pub fn validate_job_submission(submission: &JobSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if submission.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if submission.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Job description content is required"));
    }
    if submission.experience_required > MAX_EXPERIENCE_YEARS {
        errors.push(FieldError::new(
            "experience_required",
            format!("Required experience must be at most {MAX_EXPERIENCE_YEARS} years"),
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(title: &str, content: &str, experience_required: u32) -> JobSubmission {
        JobSubmission {
            title: title.to_string(),
            company: "TechCorp Inc.".to_string(),
            location: "Remote".to_string(),
            experience_required,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_pdf_is_accepted() {
        assert_eq!(
            validate_resume_file("resume.pdf", 1024).expect("pdf is allowed"),
            "pdf"
        );
    }

    #[test]
    fn test_extension_is_case_insensitive_and_normalized() {
        assert_eq!(
            validate_resume_file("Resume.PDF", 1024).expect("pdf is allowed"),
            "pdf"
        );
    }

    #[test]
    fn test_docx_and_txt_are_accepted() {
        assert!(validate_resume_file("cv.docx", 1024).is_ok());
        assert!(validate_resume_file("cv.txt", 1024).is_ok());
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = validate_resume_file("malware.exe", 1024).expect_err("exe is rejected");
        assert_eq!(err.field, "file");
        assert!(err.message.contains("exe"));
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        assert!(validate_resume_file("resume", 1024).is_err());
        assert!(validate_resume_file("resume.", 1024).is_err());
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let err = validate_resume_file("resume.pdf", 0).expect_err("empty file is rejected");
        assert!(err.message.contains("empty"));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_resume_file("resume.pdf", MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_resume_file("resume.pdf", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_job_submission(&submission("Senior Python Developer", "Hiring.", 5))
            .is_empty());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let errors = validate_job_submission(&submission("   ", "Hiring.", 5));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_blank_content_is_rejected() {
        let errors = validate_job_submission(&submission("Title", "", 5));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "content");
    }

    #[test]
    fn test_all_failures_are_collected() {
        let errors = validate_job_submission(&submission("", "", MAX_EXPERIENCE_YEARS + 1));
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "content", "experience_required"]);
    }

    #[test]
    fn test_zero_experience_is_valid() {
        assert!(validate_job_submission(&submission("Title", "Content", 0)).is_empty());
    }
}
