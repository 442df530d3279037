use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::api::{User, UserType};
use crate::model::OnboardingFlags;

const KEY_SEEN_SPLASH: &str = "has_seen_splash";
const KEY_SEEN_ONBOARDING: &str = "has_seen_onboarding";
const KEY_USER: &str = "user";
const KEY_USER_TYPE: &str = "user_type";

/// Local key-value store for onboarding flags and the signed-in session
pub struct StateDb {
    conn: Connection,
}

impl StateDb {
    /// Open the store at its default location
    pub fn new() -> Result<Self> {
        Self::open(&Self::default_path())
    }

    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open state database {:?}", path))?;

        let mut db = StateDb { conn };
        db.init_schema()?;

        Ok(db)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = StateDb { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn default_path() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("nexttui").join("state.db")
        } else {
            // Fallback to /tmp if no data dir available
            PathBuf::from("/tmp/nexttui-state/state.db")
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    // Raw key-value access
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;

        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn get_flag(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.as_deref() == Some("true"))
    }

    // Onboarding flags
    pub fn load_flags(&self) -> Result<OnboardingFlags> {
        Ok(OnboardingFlags {
            has_seen_splash: self.get_flag(KEY_SEEN_SPLASH)?,
            has_seen_onboarding: self.get_flag(KEY_SEEN_ONBOARDING)?,
        })
    }

    pub fn save_flags(&self, flags: OnboardingFlags) -> Result<()> {
        self.set(KEY_SEEN_SPLASH, &flags.has_seen_splash.to_string())?;
        self.set(KEY_SEEN_ONBOARDING, &flags.has_seen_onboarding.to_string())?;
        Ok(())
    }

    pub fn reset_onboarding(&self) -> Result<()> {
        self.remove(KEY_SEEN_SPLASH)?;
        self.remove(KEY_SEEN_ONBOARDING)?;
        Ok(())
    }

    // Session
    pub fn load_session(&self) -> Result<Option<User>> {
        match self.get(KEY_USER)? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    // Unreadable session from an older build; start signed out
                    tracing::warn!("Discarding stored session: {}", e);
                    self.remove(KEY_USER)?;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub fn save_session(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user).context("Failed to serialize session")?;
        self.set(KEY_USER, &json)?;
        self.save_user_type(user.user_type)
    }

    pub fn clear_session(&self) -> Result<()> {
        self.remove(KEY_USER)?;
        self.remove(KEY_USER_TYPE)?;
        Ok(())
    }

    pub fn load_user_type(&self) -> Result<Option<UserType>> {
        Ok(self.get(KEY_USER_TYPE)?.as_deref().and_then(UserType::parse))
    }

    pub fn save_user_type(&self, user_type: UserType) -> Result<()> {
        self.set(KEY_USER_TYPE, user_type.as_str())
    }
}
