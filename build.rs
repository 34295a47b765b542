//! Build script for the miko server CLI.
//!
//! Copies the configuration template into the user's local data directory
//! during compilation so a ready-to-use `.env.example` is available in the
//! location where the application looks for its configuration.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to the platform-specific local
/// data directory (`mikocli/.env.example`).
///
/// # Build Process
///
/// 1. **Dependency Tracking**: Sets up cargo to re-run when the template changes
/// 2. **Path Resolution**: Determines source and destination paths
/// 3. **Directory Creation**: Ensures the target directory structure exists
/// 4. **File Copying**: Copies the template to the local data directory
/// 5. **Error Handling**: Warns on a missing template instead of failing
///
/// # Destination Location
///
/// - Linux: `~/.local/share/mikocli/.env.example`
/// - macOS: `~/Library/Application Support/mikocli/.env.example`
/// - Windows: `%LOCALAPPDATA%/mikocli/.env.example`
///
/// # Returns
///
/// Returns a `Result` indicating build success or failure:
/// - `Ok(())` - All operations completed successfully
/// - `Err(Box<dyn std::error::Error>)` - Critical failure occurred
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("mikocli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
