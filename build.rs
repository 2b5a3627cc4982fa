//! Build script for the Spotify authorization helper.
//!
//! Copies the configuration templates (`.env.example` for the basic variant,
//! `config.example.json` for the extended one) into the local data directory,
//! next to where the basic variant looks for its `.env`:
//! - Linux: `~/.local/share/spotauth/`
//! - macOS: `~/Library/Application Support/spotauth/`
//! - Windows: `%LOCALAPPDATA%/spotauth/`
//!
//! A missing template only produces a cargo warning.

use std::{env, fs, path::PathBuf};

const TEMPLATES: &[&str] = &[".env.example", "config.example.json"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for template in TEMPLATES {
        println!("cargo:rerun-if-changed={}", template);
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotauth");
    fs::create_dir_all(&out_dir)?;

    for template in TEMPLATES {
        let source = manifest_dir.join(template);
        if source.is_file() {
            fs::copy(&source, out_dir.join(template))?;
        } else {
            println!("cargo:warning={} not found at {}", template, source.display());
        }
    }

    Ok(())
}
