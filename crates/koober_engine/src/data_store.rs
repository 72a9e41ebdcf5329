use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use koober_core::UserSession;
use koober_logging::{koober_debug, koober_info};
use tempfile::NamedTempFile;

use crate::payload::PersistedUserSession;
use crate::DataStoreError;

const SESSION_FILENAME: &str = "user_session.json";

/// Local storage for the signed-in user's session.
#[async_trait::async_trait]
pub trait UserSessionDataStore: Send + Sync {
    async fn read_user_session(&self) -> Result<Option<UserSession>, DataStoreError>;

    async fn save(&self, session: UserSession) -> Result<UserSession, DataStoreError>;

    async fn delete(&self, session: UserSession) -> Result<UserSession, DataStoreError>;
}

/// Keeps the session as one JSON document in `dir`.
#[derive(Debug, Clone)]
pub struct FileUserSessionDataStore {
    dir: PathBuf,
}

impl FileUserSessionDataStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILENAME)
    }
}

#[async_trait::async_trait]
impl UserSessionDataStore for FileUserSessionDataStore {
    async fn read_user_session(&self) -> Result<Option<UserSession>, DataStoreError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                koober_debug!("No persisted session at {:?}", path);
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let persisted: PersistedUserSession =
            serde_json::from_str(&content).map_err(DataStoreError::Corrupt)?;
        Ok(Some(persisted.into()))
    }

    async fn save(&self, session: UserSession) -> Result<UserSession, DataStoreError> {
        let content = serde_json::to_string_pretty(&PersistedUserSession::from(&session))
            .map_err(DataStoreError::Encode)?;
        write_atomically(&self.dir, SESSION_FILENAME, &content)?;
        koober_info!("Saved session to {:?}", self.path());
        Ok(session)
    }

    async fn delete(&self, session: UserSession) -> Result<UserSession, DataStoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => koober_info!("Deleted session at {:?}", self.path()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        Ok(session)
    }
}

fn ensure_dir(dir: &Path) -> Result<(), DataStoreError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| DataStoreError::Directory(e.to_string()))?;
        if !meta.is_dir() {
            return Err(DataStoreError::Directory("path is not a directory".into()));
        }
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| DataStoreError::Directory(e.to_string()))
}

/// Writes through a temp file in `dir` and renames it over the target, so a
/// reader sees either the old document or the new one.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> Result<(), DataStoreError> {
    ensure_dir(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(dir.join(filename))
        .map_err(|e| DataStoreError::Io(e.error))?;
    Ok(())
}
