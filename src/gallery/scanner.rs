// SPDX-License-Identifier: MPL-2.0
//! Gallery directory scanner.
//!
//! Scans a directory for supported image formats, sorts them according to the
//! configured sort order, and attaches captions from an optional
//! `captions.toml` sidecar:
//!
//! ```toml
//! ["french-tips.jpg"]
//! caption = "French tips"
//! description = "Classic white tips with a gel finish"
//! ```

use super::Thumbnail;
use crate::config::SortOrder;
use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the caption sidecar file inside the gallery directory.
pub const CAPTIONS_FILE: &str = "captions.toml";

const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Default, Deserialize)]
struct CaptionEntry {
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Scans `directory` and returns its images as gallery thumbnails.
///
/// Returns an error if the directory cannot be read. A malformed caption
/// sidecar is ignored (thumbnails fall back to generated titles).
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<Thumbnail>> {
    let mut image_files = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);

    let mut captions = load_captions(directory);

    Ok(image_files
        .into_iter()
        .map(|path| {
            let entry = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| captions.remove(name))
                .unwrap_or_default();
            Thumbnail {
                source: path.to_string_lossy().into_owned(),
                caption: entry.caption,
                description: entry.description,
            }
        })
        .collect())
}

fn load_captions(directory: &Path) -> HashMap<String, CaptionEntry> {
    let path = directory.join(CAPTIONS_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return HashMap::new();
    };

    match toml::from_str(&content) {
        Ok(captions) => captions,
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring malformed captions file: {err}");
            HashMap::new()
        }
    }
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Sorts a list of image paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}
