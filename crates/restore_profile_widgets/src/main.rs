// crates/restore_profile_widgets/src/main.rs

use std::path::Path;

use anyhow::Result;
use restore_profile_widgets::restore_profile_widgets;

// One-shot migration helper: paths are fixed relative to the Flutter
// project root, which is expected to be the current directory.
const INPUT_FILE: &str = "tmp_head_main.dart";
const OUTPUT_FILE: &str = "lib/src/pages/dashboard/profile_info_widgets.dart";

fn main() -> Result<()> {
    restore_profile_widgets(Path::new(INPUT_FILE), Path::new(OUTPUT_FILE))?;
    println!("Wrote {}", OUTPUT_FILE);
    Ok(())
}
