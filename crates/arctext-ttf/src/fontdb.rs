// this_file: crates/arctext-ttf/src/fontdb.rs

//! Font resolution and face caching.

use arctext_core::{utils::system_font_dirs, ArcTextError, Result};
use lru::LruCache;
use owned_ttf_parser::OwnedFace;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

/// Resolves font families to parsed faces, keeping recently used faces
/// cached. A family that names an existing file is loaded directly;
/// otherwise the platform font directories are probed.
pub struct FontStore {
    faces: Mutex<LruCache<String, Arc<OwnedFace>>>,
}

impl FontStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            faces: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(32).unwrap()),
            )),
        }
    }

    /// Get or load the face for a font family.
    pub fn load(&self, family: &str) -> Result<Arc<OwnedFace>> {
        {
            let mut cache = self.faces.lock();
            if let Some(face) = cache.get(family) {
                return Ok(face.clone());
            }
        }

        let data = self.read_font_data(family)?;
        let face = OwnedFace::from_vec(data, 0).map_err(|_| ArcTextError::InvalidFontData)?;
        let face = Arc::new(face);

        let mut cache = self.faces.lock();
        cache.put(family.to_string(), face.clone());
        Ok(face)
    }

    /// Drop all cached faces.
    pub fn clear(&self) {
        self.faces.lock().clear();
    }

    fn read_font_data(&self, family: &str) -> Result<Vec<u8>> {
        // Direct file path
        let direct = Path::new(family);
        if direct.exists() {
            return std::fs::read(direct).map_err(|e| ArcTextError::font_load(direct.into(), e));
        }

        // Probe system font directories
        for dir in system_font_dirs() {
            let expanded = shellexpand::tilde(&dir);
            let dir_path = Path::new(expanded.as_ref());

            for ext in &["ttf", "otf", "ttc"] {
                let font_file = dir_path.join(format!("{family}.{ext}"));
                if font_file.exists() {
                    return std::fs::read(&font_file)
                        .map_err(|e| ArcTextError::font_load(font_file.clone(), e));
                }
            }
        }

        Err(ArcTextError::FontNotFound {
            name: family.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_family_is_reported_by_name() {
        let store = FontStore::new(4);
        let err = store.load("definitely-not-an-installed-font").unwrap_err();
        match err {
            ArcTextError::FontNotFound { name } => {
                assert_eq!(name, "definitely-not-an-installed-font");
            }
            other => panic!("expected FontNotFound, got {other:?}"),
        }
    }

    #[test]
    fn garbage_file_is_invalid_font_data() {
        let dir = std::env::temp_dir();
        let path = dir.join("arctext-fontdb-garbage.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        let store = FontStore::new(4);
        let err = store.load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ArcTextError::InvalidFontData));
        let _ = std::fs::remove_file(&path);
    }
}
