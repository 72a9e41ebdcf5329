#![allow(dead_code)]

use std::io;
use std::sync::{Mutex, Once};

use koober_core::UserSession;
use koober_engine::{DataStoreError, UserSessionDataStore};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(koober_logging::initialize_for_tests);
}

/// Session store kept in memory; optionally refuses every write.
#[derive(Default)]
pub struct InMemoryDataStore {
    session: Mutex<Option<UserSession>>,
    fail_writes: bool,
}

impl InMemoryDataStore {
    pub fn with_session(session: UserSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            session: Mutex::new(None),
            fail_writes: true,
        }
    }

    pub fn current(&self) -> Option<UserSession> {
        self.session.lock().unwrap().clone()
    }

    fn check_writable(&self) -> Result<(), DataStoreError> {
        if self.fail_writes {
            return Err(DataStoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserSessionDataStore for InMemoryDataStore {
    async fn read_user_session(&self) -> Result<Option<UserSession>, DataStoreError> {
        Ok(self.current())
    }

    async fn save(&self, session: UserSession) -> Result<UserSession, DataStoreError> {
        self.check_writable()?;
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn delete(&self, session: UserSession) -> Result<UserSession, DataStoreError> {
        self.check_writable()?;
        *self.session.lock().unwrap() = None;
        Ok(session)
    }
}
