//! Local file picker state fed by dropped (pasted) paths

use std::path::PathBuf;

use url::Url;

/// Files captured by the drop zone. Nothing is read or uploaded.
#[derive(Clone, Debug, Default)]
pub struct DropZone {
    pub files: Vec<PathBuf>,
    /// Zone has focus and accepts drops
    pub armed: bool,
}

impl DropZone {
    /// Replace the captured files with the paths found in a paste.
    /// Returns the number of files captured.
    pub fn capture(&mut self, pasted: &str) -> usize {
        let paths = parse_dropped_paths(pasted);
        if !paths.is_empty() {
            self.files = paths;
        }
        self.files.len()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

/// Split terminal drag-and-drop text into paths.
///
/// Terminals paste dropped files as whitespace or newline separated paths,
/// shell-quoted or with backslash-escaped spaces, sometimes as `file://` URIs.
/// Text with unbalanced quotes falls back to plain whitespace splitting.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let tokens = shell_words::split(text).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Dropped text is not shell-quoted, splitting on whitespace");
        text.split_whitespace().map(str::to_string).collect()
    });

    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .filter_map(|token| token_to_path(&token))
        .collect()
}

fn token_to_path(token: &str) -> Option<PathBuf> {
    if !token.starts_with("file:") {
        return Some(PathBuf::from(token));
    }
    match Url::parse(token).map(|uri| uri.to_file_path()) {
        Ok(Ok(path)) => Some(path),
        _ => {
            tracing::warn!(uri = token, "Ignoring dropped URI that is not a local file");
            None
        }
    }
}
