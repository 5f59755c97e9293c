use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

pub const USERS_FILE: &str = "crab_users.json";
pub const GUILDS_FILE: &str = "crab_guilds.json";

pub const DEFAULT_FREQUENCY_MINUTES: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read or write record file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One user's progression, keyed by the Discord user id as a string.
/// Field names match the on-disk JSON layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub crabs_caught: u64,
    pub crab_coins: u64,
    pub inventory: Vec<String>,
    pub level: u32,
    pub xp: u64,
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            crabs_caught: 0,
            crab_coins: 0,
            inventory: Vec::new(),
            level: 1,
            xp: 0,
        }
    }
}

/// Per-guild spawn settings, written by `/setup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuildRecord {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crab_channel: Option<u64>,
    pub crab_frequency: u64,
}

impl Default for GuildRecord {
    fn default() -> Self {
        Self {
            enabled: false,
            crab_channel: None,
            crab_frequency: DEFAULT_FREQUENCY_MINUTES,
        }
    }
}

impl GuildRecord {
    /// Whether the scheduler should consider this guild on a tick.
    pub fn spawn_target(&self) -> Option<u64> {
        if self.enabled {
            self.crab_channel
        } else {
            None
        }
    }
}

/// In-memory copy of both record maps plus the directory they persist to.
///
/// Loaded once at startup; every mutating command saves the whole file back.
/// A failed save leaves the in-memory maps intact and is surfaced to the
/// caller, never to the process.
pub struct Store {
    pub users: HashMap<String, UserRecord>,
    pub guilds: HashMap<String, GuildRecord>,
    data_dir: PathBuf,
}

pub type SharedStore = Arc<RwLock<Store>>;

pub fn new_shared(store: Store) -> SharedStore {
    Arc::new(RwLock::new(store))
}

impl Store {
    /// Reads both record files from `data_dir`. A missing file is an empty
    /// map, not an error.
    pub fn load(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        let users = read_map(&data_dir.join(USERS_FILE))?;
        let guilds = read_map(&data_dir.join(GUILDS_FILE))?;
        Ok(Self {
            users,
            guilds,
            data_dir,
        })
    }

    pub fn save_users(&self) -> Result<(), StoreError> {
        write_map(&self.data_dir.join(USERS_FILE), &self.users)
    }

    pub fn save_guilds(&self) -> Result<(), StoreError> {
        write_map(&self.data_dir.join(GUILDS_FILE), &self.guilds)
    }
}

fn read_map<T: DeserializeOwned>(path: &Path) -> Result<HashMap<String, T>, StoreError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
        Err(e) => Err(e.into()),
    }
}

// Whole-file rewrite through a temp file so a crash mid-write can't leave a
// truncated record file behind.
fn write_map<T: Serialize>(path: &Path, map: &HashMap<String, T>) -> Result<(), StoreError> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_string_pretty(map)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
