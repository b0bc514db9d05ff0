use std::path::PathBuf;

use crate::infra::sqlite::preferences::{load_preference, upsert_preference};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{PreferenceRepository, RepoError};

pub struct SqlitePreferenceRepo {
    pub db_path: PathBuf,
}

impl PreferenceRepository for SqlitePreferenceRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn load_preference(&self, key: &str) -> Result<Option<String>, RepoError> {
        load_preference(&self.db_path, key).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn upsert_preference(&self, key: &str, value: &str) -> Result<(), RepoError> {
        upsert_preference(&self.db_path, key, value)
            .map_err(|err| RepoError::Message(err.to_string()))
    }
}
