//! Loading and saving the target file.
//!
//! The save is atomic: the new content goes to a temporary file in the target
//! directory, is synced, and is renamed over the target. A failed save never
//! leaves a truncated file behind.

use crate::error::{AlignError, AlignResult};
use crate::model::TextModel;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Read `path` and decode it as UTF-8 into a text model.
pub fn load(path: &Path) -> AlignResult<TextModel> {
    let bytes = std::fs::read(path).map_err(|e| AlignError::read(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| AlignError::DecodeError {
        path: path.to_path_buf(),
    })?;
    Ok(TextModel::from_text(&text))
}

/// Serialize `model` and write it to `path` via temp-file-then-rename.
pub fn save(model: &TextModel, path: &Path) -> AlignResult<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let temp_name = format!(
        ".{}.tmp.{}",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("lineup"),
        std::process::id()
    );
    let temp_path = parent.join(&temp_name);

    let write_temp = || -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        file.write_all(model.to_text().as_bytes())?;
        // Data must hit the disk before the rename makes it visible.
        file.sync_all()
    };

    if let Err(e) = write_temp() {
        let _ = std::fs::remove_file(&temp_path);
        return Err(AlignError::write(path, e));
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(AlignError::write(path, e));
    }

    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.c");
        let content = "int main (void)\n{\n\treturn 0;\n}\n";
        std::fs::write(&path, content).unwrap();

        let model = load(&path).unwrap();
        save(&model, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/lineup/file.c")).unwrap_err();
        assert!(matches!(err, AlignError::ReadError { .. }));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary");
        std::fs::write(&path, [0x66u8, 0x6f, 0xff, 0xfe]).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, AlignError::DecodeError { .. }));
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");
        std::fs::write(&path, "old").unwrap();

        save(&TextModel::from_text("new content\n"), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new content\n");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let err = save(
            &TextModel::from_text("x"),
            Path::new("/nonexistent/lineup/out.c"),
        )
        .unwrap_err();
        assert!(matches!(err, AlignError::WriteError { .. }));
    }
}
