//! Pre-network upload validation.
//!
//! The analysis service enforces the same rules server-side (415/413);
//! checking here means a bad pick never costs a network round trip.

use crate::config::MAX_UPLOAD_BYTES;

use super::error::AnalysisError;
use super::ReportUpload;

/// Extensions accepted alongside `.pdf`.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "tif", "bmp", "webp"];

fn extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Whether the filename names an accepted document type.
pub fn is_supported(filename: &str) -> bool {
    let ext = extension(filename);
    ext == "pdf" || IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// MIME type sent with the multipart upload, guessed from the extension.
pub fn content_type_for(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Validates one upload against the taxonomy's class (a) rules:
/// accepted type, non-empty, within the 10 MB cap.
pub fn validate(upload: &ReportUpload) -> Result<(), AnalysisError> {
    if !is_supported(&upload.filename) {
        return Err(AnalysisError::InvalidFileType {
            filename: upload.filename.clone(),
        });
    }
    if upload.bytes.is_empty() {
        return Err(AnalysisError::EmptyFile {
            filename: upload.filename.clone(),
        });
    }
    if upload.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AnalysisError::FileTooLarge {
            filename: upload.filename.clone(),
            size: upload.bytes.len(),
        });
    }
    Ok(())
}
