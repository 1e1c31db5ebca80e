use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

const TMP_SUFFIX: &str = "tmp";

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Lowercases `name` and replaces anything outside `[a-z0-9]` with `_`.
pub fn canonical_name(name: &str, fallback: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        fallback.into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a sibling temp file, then renames it over `path`.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, &json)
}

/// Loads JSON from `path`, returning `None` when the file does not exist.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&data)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn canonical_name_falls_back_for_symbols() {
        assert_eq!(canonical_name("Spring Launch!", "draft"), "spring_launch_");
        assert_eq!(canonical_name("  ***  ", "draft"), "draft");
    }

    #[test]
    fn write_atomic_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("value.json");
        save_json(&vec![1, 2, 3], &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let loaded: Option<Vec<u32>> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }
}
