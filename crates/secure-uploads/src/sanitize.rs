//! Whitelist filter for recovered file names.

/// Reduce an uploaded file name to a safe local file name.
///
/// Only the final path component is kept (`/` and `\` both separate). The
/// component is split at its last `.` into stem and extension, every
/// character outside `[A-Za-z0-9_-]` in either becomes `_`, and the two are
/// always rejoined with one `.`, even when the extension is empty.
///
/// ```
/// use secure_uploads::sanitize;
///
/// assert_eq!(sanitize("report final!!.PDF"), "report_final__.PDF");
/// assert_eq!(sanitize("../../etc/passwd"), "passwd.");
/// ```
pub fn sanitize(name: &str) -> String {
    let file_name = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let (stem, extension) = file_name.rsplit_once('.').unwrap_or((file_name, ""));
    format!("{}.{}", scrub(stem), scrub(extension))
}

/// True when a sanitized name can be written as a file.
pub fn is_usable(sanitized: &str) -> bool {
    !sanitized.is_empty() && sanitized != "."
}

fn scrub(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
