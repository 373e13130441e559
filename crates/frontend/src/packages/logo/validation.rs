//! Client-side checks for package logo uploads.
//!
//! The server re-validates everything; these checks only exist to give
//! feedback before the form is submitted. An unexpected MIME type is a
//! warning (the server may still accept it), size and dimension violations
//! block the upload button.

pub const MAX_BYTES: u64 = 1024 * 1024;
pub const MIN_DIMENSION: u32 = 2;
pub const MAX_DIMENSION: u32 = 2048;

const ALLOWED_TYPES: [&str; 4] = ["image/png", "image/gif", "image/jpeg", "image/bmp"];

/// Outcome of the synchronous file checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoReport {
    pub messages: Vec<String>,
    /// Whether any message blocks the upload (warnings do not).
    pub blocking: bool,
}

impl LogoReport {
    pub fn text(&self) -> String {
        self.messages.join(" ")
    }
}

/// Checks MIME type and byte size of the selected file.
pub fn check_file(mime: &str, size: u64) -> LogoReport {
    let mut report = LogoReport::default();
    if !ALLOWED_TYPES.contains(&mime) {
        report
            .messages
            .push("Warning: invalid image type.".to_string());
    } else if size > MAX_BYTES {
        report
            .messages
            .push("Error: image file size too large!".to_string());
        report.blocking = true;
    }
    report
}

/// Checks decoded image dimensions. Returns the blocking message when the
/// image falls outside the accepted bounds on either axis.
pub fn check_dimensions(width: u32, height: u32) -> Option<String> {
    let out_of_bounds = width < MIN_DIMENSION
        || height < MIN_DIMENSION
        || width > MAX_DIMENSION
        || height > MAX_DIMENSION;
    out_of_bounds.then(|| {
        format!(
            "Invalid image dimensions, must be between {min}x{min} and {max}x{max}.",
            min = MIN_DIMENSION,
            max = MAX_DIMENSION
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_type_and_size_pass_cleanly() {
        let report = check_file("image/png", 512 * 1024);
        assert!(report.messages.is_empty());
        assert!(!report.blocking);
    }

    #[test]
    fn unexpected_type_warns_without_blocking() {
        let report = check_file("image/svg+xml", 1024);
        assert!(!report.blocking);
        assert!(report.text().starts_with("Warning:"));
    }

    #[test]
    fn oversized_file_blocks() {
        let report = check_file("image/png", MAX_BYTES + 1);
        assert!(report.blocking);
        assert!(report.text().starts_with("Error:"));
    }

    #[test]
    fn size_cap_is_inclusive() {
        assert!(!check_file("image/png", MAX_BYTES).blocking);
    }

    #[test]
    fn dimension_bounds_are_inclusive() {
        assert_eq!(check_dimensions(MIN_DIMENSION, MIN_DIMENSION), None);
        assert_eq!(check_dimensions(MAX_DIMENSION, MAX_DIMENSION), None);
        assert!(check_dimensions(1, 100).is_some());
        assert!(check_dimensions(100, MAX_DIMENSION + 1).is_some());
    }
}
