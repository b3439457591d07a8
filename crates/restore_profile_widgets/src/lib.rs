// crates/restore_profile_widgets/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use extract_between_markers::extract_between_markers;

/// Start of the section to move: the first private widget class declaration.
pub const START_MARKER: &str = "class _ProfileInfoCard extends StatefulWidget";

/// End of the section to move: the declaration of the next widget class,
/// which stays behind in main.dart.
pub const END_MARKER: &str = "class _UserWhiskeyList extends StatelessWidget";

/// Header for the new part file, tying it back to the main library.
pub const PART_HEADER: &str = "part of 'package:the_whiskey_manuscript_app/main.dart';";

/// Builds the body of the part file: the header line, a blank line, the
/// trimmed section, and exactly one trailing newline. A whitespace-only
/// section collapses to header + blank line + newline.
pub fn compose_part_file(section: &str, header: &str) -> String {
    format!("{}\n\n{}\n", header, section.trim())
}

/// Extracts the `_ProfileInfoCard` widget section from `input` and writes it
/// as a part file to `output`, silently overwriting any existing content.
/// Parent directories of `output` are not created.
///
/// # Errors
///
/// Returns an error if the input file cannot be read, if either class marker
/// is absent from the input, or if the output file cannot be written.
pub fn restore_profile_widgets(input: &Path, output: &Path) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Error reading file {}", input.display()))?;
    let section = extract_between_markers(&source, START_MARKER, END_MARKER)?;
    fs::write(output, compose_part_file(section, PART_HEADER))
        .with_context(|| format!("Error writing file {}", output.display()))?;
    Ok(())
}
