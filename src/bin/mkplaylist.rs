//! Music playlist manifest generator
//!
//! Scans the `music` directory under the site root for MP3 files and
//! writes their names, sorted, to `music.json` for the player embedded
//! in the served pages. Companion tool to the site server; it reports
//! problems on the console and never takes the caller down with it.

use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let root = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    match generate_manifest(&root) {
        Ok(Some(count)) => {
            println!(
                "Wrote {count} MP3 file(s) to '{}'.",
                root.join("music.json").display()
            );
            ExitCode::SUCCESS
        }
        // Missing music directory: already warned, nothing written.
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}

/// Scan `<root>/music` and write `<root>/music.json`.
///
/// Returns `Ok(None)` when the music directory is missing — a warning is
/// printed and any existing manifest is left untouched. Otherwise writes
/// the manifest (an empty array for an empty directory) and returns the
/// track count.
fn generate_manifest(root: &Path) -> Result<Option<usize>, String> {
    let music_dir = root.join("music");
    let json_path = root.join("music.json");

    if !music_dir.is_dir() {
        eprintln!(
            "[WARN] No 'music' directory under '{}'; nothing to do.",
            root.display()
        );
        return Ok(None);
    }

    println!("Scanning {} ...", music_dir.display());

    let tracks = collect_tracks(&music_dir)
        .map_err(|e| format!("Failed to read '{}': {e}", music_dir.display()))?;

    if tracks.is_empty() {
        eprintln!("[WARN] No MP3 files found in '{}'.", music_dir.display());
    }

    let json = to_pretty_json(&tracks).map_err(|e| format!("Failed to serialize manifest: {e}"))?;
    fs::write(&json_path, json)
        .map_err(|e| format!("Failed to write '{}': {e}", json_path.display()))?;

    Ok(Some(tracks.len()))
}

/// The playable files: regular files directly under `music_dir` whose
/// extension is `.mp3` in any case, sorted by name.
fn collect_tracks(music_dir: &Path) -> std::io::Result<Vec<String>> {
    let mut tracks: Vec<String> = fs::read_dir(music_dir)?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.to_lowercase().ends_with(".mp3"))
        .collect();

    tracks.sort();
    Ok(tracks)
}

/// Serialize with four-space indentation and a trailing newline, the
/// shape the site's player script expects to fetch.
fn to_pretty_json(tracks: &[String]) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tracks.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
