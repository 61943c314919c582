//! Landmark reference-image folder setup.
//!
//! Companion utility with no runtime interaction with the API services:
//! it lays out the `landmarks/` directory and writes the naming-convention
//! README for whoever curates the reference images.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const LANDMARK_DIR: &str = "landmarks";
const README_NAME: &str = "README.txt";

const README_TEXT: &str = "\
=== Landmark image reference ===
Save reference images in this folder using the following naming convention:

Tokyo_Tower.jpg
Eiffel_Tower.jpg
Statue_of_Liberty.jpg
Big_Ben.jpg
Christ_the_Redeemer.jpg

Formats: JPG / PNG
Recommended size: 200x200 to 500x500 px
";

/// Create `landmarks/` under `root` with its README. Idempotent.
pub fn create_landmark_dir(root: &Path) -> io::Result<PathBuf> {
    let dir = root.join(LANDMARK_DIR);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(README_NAME), README_TEXT)?;
    Ok(dir)
}
