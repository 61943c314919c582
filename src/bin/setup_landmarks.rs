use clap::Parser;
use photopin::landmarks;
use std::path::PathBuf;

/// Create the landmark reference-image folder and its naming README.
///
/// Companion utility; the API services never read this folder.
#[derive(Parser)]
#[command(name = "photopin-setup", version, about, long_about = None)]
struct Cli {
    /// Directory in which to create landmarks/.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match landmarks::create_landmark_dir(&cli.root) {
        Ok(dir) => {
            eprintln!("  Created {}", dir.display());
            eprintln!("  See {}/README.txt for the naming convention.", dir.display());
        }
        Err(e) => {
            eprintln!("Error: could not create landmark folder: {}", e);
            std::process::exit(1);
        }
    }
}
