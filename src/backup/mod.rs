//! Backup management module

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::Config;

/// Writes the single sibling backup taken before an rc file is modified
pub struct BackupManager {
    tag: String,
}

impl BackupManager {
    pub fn new(config: &Config) -> Self {
        Self {
            tag: config.backup.tag.clone(),
        }
    }

    /// `<source>.pre.<tag>`
    pub fn backup_path(&self, source_file: &Path) -> PathBuf {
        let mut name = source_file.as_os_str().to_os_string();
        name.push(format!(".pre.{}", self.tag));
        PathBuf::from(name)
    }

    /// Copy `source_file` next to itself and sync the copy to disk.
    ///
    /// Returns the backup path. Overwrites any previous backup.
    pub fn create_backup(&self, source_file: &Path) -> Result<PathBuf> {
        let backup_path = self.backup_path(source_file);
        copy_synced(source_file, &backup_path)?;
        Ok(backup_path)
    }
}

fn copy_synced(src: &Path, dest: &Path) -> Result<u64> {
    let backup_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| Error::BackupIo { path, source }
    };

    let mut source = File::open(src).map_err(backup_err(src))?;
    let mut target = File::create(dest).map_err(backup_err(dest))?;

    let copied = io::copy(&mut source, &mut target).map_err(backup_err(dest))?;
    target.sync_all().map_err(backup_err(dest))?;

    log::debug!("copied {} bytes to {}", copied, dest.display());
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_backup_path() {
        let manager = BackupManager::new(&Config::default());
        assert_eq!(
            manager.backup_path(Path::new("/home/gopher/.zshrc")),
            PathBuf::from("/home/gopher/.zshrc.pre.gos")
        );
    }

    #[test]
    fn test_backup_creation() {
        let temp_dir = tempdir().unwrap();
        let source_file = temp_dir.path().join(".zshrc");
        let content = "export GOPATH=/old\n\nalias ll='ls -la'\n";
        std::fs::write(&source_file, content).unwrap();

        let manager = BackupManager::new(&Config::default());
        let backup_path = manager.create_backup(&source_file).unwrap();

        assert_eq!(backup_path, temp_dir.path().join(".zshrc.pre.gos"));
        assert_eq!(std::fs::read(&backup_path).unwrap(), content.as_bytes());
    }

    #[test]
    fn test_backup_overwrites_previous() {
        let temp_dir = tempdir().unwrap();
        let source_file = temp_dir.path().join(".zshrc");
        let manager = BackupManager::new(&Config::default());
        std::fs::write(manager.backup_path(&source_file), "stale stale stale").unwrap();
        std::fs::write(&source_file, "fresh").unwrap();

        let backup_path = manager.create_backup(&source_file).unwrap();
        assert_eq!(std::fs::read_to_string(backup_path).unwrap(), "fresh");
    }

    #[test]
    fn test_missing_source_fails_without_creating_backup() {
        let temp_dir = tempdir().unwrap();
        let source_file = temp_dir.path().join(".zshrc");
        let manager = BackupManager::new(&Config::default());

        let err = manager.create_backup(&source_file).unwrap_err();
        assert!(matches!(err, Error::BackupIo { .. }));
        assert!(!manager.backup_path(&source_file).exists());
    }

    #[test]
    fn test_custom_tag() {
        let mut config = Config::default();
        config.backup.tag = "old".to_string();
        let manager = BackupManager::new(&config);
        assert_eq!(
            manager.backup_path(Path::new("/h/.zshrc")),
            PathBuf::from("/h/.zshrc.pre.old")
        );
    }
}
