// crates/extract_between_markers/src/lib.rs

use anyhow::{anyhow, Result};

/// Returns the slice of `content` lying between two literal markers.
///
/// The slice begins at the start marker itself (the marker text is included)
/// and ends immediately before the end marker (the marker text is excluded).
/// The end marker is searched for only from the start marker's position
/// onward, so an occurrence appearing earlier in the text does not count.
///
/// # Arguments
///
/// * `content` - The full source text.
/// * `start_marker` - Literal substring locating the beginning of the slice.
/// * `end_marker` - Literal substring locating the end of the slice.
///
/// # Errors
///
/// Returns an error naming the missing marker if either marker cannot be
/// found.
pub fn extract_between_markers<'a>(
    content: &'a str,
    start_marker: &str,
    end_marker: &str,
) -> Result<&'a str> {
    let start = content
        .find(start_marker)
        .ok_or_else(|| anyhow!("Marker not found: {}", start_marker))?;
    let end = content[start..]
        .find(end_marker)
        .map(|offset| start + offset)
        .ok_or_else(|| anyhow!("Marker not found: {}", end_marker))?;
    Ok(&content[start..end])
}
