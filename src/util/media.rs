// src/util/media.rs
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use tracing::debug;

use crate::domain::DomainError;

lazy_static! {
    // content://, file://, https:// and friends are stored as given
    static ref URI_SCHEME_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://\S+$")
        .expect("Failed to compile URI scheme regex");
}

/// Turn a user-supplied image reference into the value stored on the note.
///
/// URIs are kept verbatim. Local paths must point at a readable file and are
/// stored canonicalized; I/O failures surface with their message unchanged.
pub fn resolve_image_reference(reference: &str) -> Result<String, DomainError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(DomainError::ImageLoad("Image reference is empty".to_string()));
    }
    if URI_SCHEME_REGEX.is_match(reference) {
        debug!(%reference, "Keeping image URI verbatim");
        return Ok(reference.to_string());
    }

    let path = Path::new(reference);
    let metadata = std::fs::metadata(path).map_err(|e| DomainError::ImageLoad(e.to_string()))?;
    if !metadata.is_file() {
        return Err(DomainError::ImageLoad(format!(
            "Not a file: {}",
            path.display()
        )));
    }
    std::fs::File::open(path).map_err(|e| DomainError::ImageLoad(e.to_string()))?;

    let canonical = path
        .canonicalize()
        .map_err(|e| DomainError::ImageLoad(e.to_string()))?;
    Ok(canonical.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_content_uri_when_resolving_then_kept_verbatim() {
        let uri = "content://media/external/images/media/42";
        assert_eq!(resolve_image_reference(uri).unwrap(), uri);
    }

    #[test]
    fn given_existing_file_when_resolving_then_returns_canonical_path() {
        let temp_dir = TempDir::new().unwrap();
        let image = temp_dir.path().join("cat.png");
        fs::write(&image, b"\x89PNG").unwrap();

        let resolved = resolve_image_reference(image.to_str().unwrap()).unwrap();

        assert_eq!(resolved, image.canonicalize().unwrap().to_string_lossy());
    }

    #[test]
    fn given_missing_file_when_resolving_then_image_load_error() {
        let result = resolve_image_reference("/nonexistent/path/cat.png");

        assert!(matches!(result, Err(DomainError::ImageLoad(_))));
    }

    #[test]
    fn given_directory_when_resolving_then_image_load_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = resolve_image_reference(temp_dir.path().to_str().unwrap());

        assert!(matches!(result, Err(DomainError::ImageLoad(msg)) if msg.starts_with("Not a file")));
    }
}
