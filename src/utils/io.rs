// src/utils/io.rs
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use chrono::Local;

/// Get the application data directory
pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "falcon", "falcon-toolkit") {
        let data_dir = proj_dirs.data_dir();

        // Create the directory if it doesn't exist
        if !data_dir.exists() {
            if let Err(e) = fs::create_dir_all(data_dir) {
                log::error!("Failed to create data directory: {}", e);
                return None;
            }
        }

        Some(data_dir.to_path_buf())
    } else {
        log::error!("Could not determine data directory");
        None
    }
}

/// `<prefix>_<YYYYmmdd_HHMMSS>.txt`, stamped with local time.
pub fn timestamped_filename(prefix: &str) -> String {
    format!("{}_{}.txt", prefix, Local::now().format("%Y%m%d_%H%M%S"))
}

/// Write each item on its own line, creating parent directories as needed.
pub fn save_list<I, S>(path: &Path, items: I) -> io::Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        writer.write_all(item.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_one_item_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");

        let written = save_list(&path, ["alpha", "beta", "gämma"]).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta\ngämma\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("list.txt");

        save_list(&path, vec!["one".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\n");
    }

    #[test]
    fn empty_list_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        save_list(&path, Vec::<String>::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");

        save_list(&path, ["old", "older"]).unwrap();
        save_list(&path, ["new"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn filename_has_prefix_and_timestamp() {
        let name = timestamped_filename("falcon_wordlist");
        let stamp = name
            .strip_prefix("falcon_wordlist_")
            .and_then(|rest| rest.strip_suffix(".txt"))
            .unwrap();

        // YYYYmmdd_HHMMSS
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'_');
        assert!(stamp.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }
}
