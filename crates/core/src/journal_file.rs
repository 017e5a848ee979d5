//! JSON file persistence for input journals.

use std::fs;
use std::io;
use std::path::Path;

use crate::journal::InputJournal;

/// Write the journal as pretty JSON, atomically (write-then-rename).
pub fn save(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

pub fn load(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    let journal: InputJournal = serde_json::from_str(&content)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    Ok(journal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfigUpdate, EAST, GenConfig, NORTH, Terrain};
    use tempfile::tempdir;

    #[test]
    fn save_then_load_roundtrips_the_journal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");

        let mut journal = InputJournal::new(12345, GenConfig::default());
        journal.append_move(NORTH, 0);
        journal.append_config(ConfigUpdate::BiasVotes { terrain: Terrain::Water, votes: 4 }, 1);
        journal.append_move(EAST, 2);

        save(&journal, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, journal);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let error = load(&path).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dirs/run.json");

        let journal = InputJournal::new(7, GenConfig::default());
        save(&journal, &path).unwrap();
        assert!(path.exists());
    }
}
