//! Build script for gnomon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates gnomon.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate gnomon.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=gnomon.toml");

    let config_path = Path::new("gnomon.toml");
    if !config_path.exists() {
        panic!("gnomon.toml not found - the firmware embeds its watchface configuration");
    }

    let config_content =
        fs::read_to_string(config_path).expect("failed to read gnomon.toml");

    // Parse and validate TOML syntax on the host; the firmware's own
    // minimal parser only sees files that passed this check
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => panic!("invalid TOML syntax in gnomon.toml: {e}"),
    };

    if let Some(style) = config
        .get("face")
        .and_then(|f| f.get("style"))
        .and_then(|s| s.as_str())
    {
        if !["classic", "precision"].contains(&style) {
            panic!("gnomon.toml: face.style must be \"classic\" or \"precision\", got \"{style}\"");
        }
    }
}
