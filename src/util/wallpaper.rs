use std::{fs, path::Path};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// Uploads above this size are rejected before any state changes.
pub const MAX_WALLPAPER_BYTES: u64 = 3 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum WallpaperError {
    #[error("图片太大，请选择小于 3MB 的图片")]
    TooLarge,
    #[error("could not read image: {0}")]
    Io(#[from] std::io::Error),
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

/// Read a user-supplied image and encode it as a `data:` URL for the
/// wallpaper setting. Size is checked up front so an oversized file never
/// touches the settings map.
pub fn file_to_data_url(path: &Path) -> Result<String, WallpaperError> {
    let meta = fs::metadata(path)?;
    if meta.len() > MAX_WALLPAPER_BYTES {
        return Err(WallpaperError::TooLarge);
    }
    let bytes = fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime_for(path), BASE64.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn encodes_small_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bg.png");
        fs::write(&path, [0x89u8, b'P', b'N', b'G']).unwrap();
        let url = file_to_data_url(&path).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn jpeg_extension_sets_mime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bg.JPG");
        fs::write(&path, b"xx").unwrap();
        assert!(file_to_data_url(&path).unwrap().starts_with("data:image/jpeg;"));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.png");
        fs::write(&path, vec![0u8; (MAX_WALLPAPER_BYTES + 1) as usize]).unwrap();
        assert!(matches!(
            file_to_data_url(&path),
            Err(WallpaperError::TooLarge)
        ));
    }
}
