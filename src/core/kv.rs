use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Storage port: raw bytes under string keys. Object-safe so domain code
/// can take `&dyn KeyValue` and stay backend-agnostic.
pub trait KeyValue {
    fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>>;
    fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()>;
    fn delete(&self, key: &str) -> anyhow::Result<()>;
}

/// JSON view over the raw port.
pub trait KeyValueExt {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>>;
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> anyhow::Result<()>;

    /// Read `key`, falling back to `fallback` when the key is absent,
    /// unreadable, or holds bytes that don't parse as `T`. No error
    /// escapes; corruption is masked, not surfaced.
    fn load_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T;
}

impl<S: KeyValue + ?Sized> KeyValueExt for S {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        match self.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        self.set(key, &serde_json::to_vec(value)?)
    }

    fn load_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.get_json(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                warn!(key, %err, "unreadable value, using fallback");
                fallback
            }
        }
    }
}

/// Heap-only backend for tests and throwaway runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// One file per key under a directory, keys percent-encoded so
/// `chat:a|b` stays a valid file name.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.json", urlencoding::encode(key)))
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> anyhow::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("kindred-{}-{}-{}", tag, std::process::id(), nanos))
    }

    #[test]
    fn memory_roundtrip() {
        let store = MemoryStore::new();
        store.set_json("names", &vec!["alice", "bob"]).unwrap();
        let names: Vec<String> = store.get_json("names").unwrap().unwrap();
        assert_eq!(names, vec!["alice", "bob"]);

        store.delete("names").unwrap();
        assert!(store.get("names").unwrap().is_none());
    }

    #[test]
    fn load_or_falls_back_on_missing_and_corrupt() {
        let store = MemoryStore::new();
        let missing: Vec<String> = store.load_or("nope", Vec::new());
        assert!(missing.is_empty());

        store.set("broken", b"{not json").unwrap();
        let corrupt: Vec<String> = store.load_or("broken", vec!["fallback".to_string()]);
        assert_eq!(corrupt, vec!["fallback"]);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = scratch_dir("kv");
        {
            let store = FileStore::open(&dir).unwrap();
            store.set_json("chat:alice|bob", &vec!["hi"]).unwrap();
        }
        let store = FileStore::open(&dir).unwrap();
        let messages: Vec<String> = store.get_json("chat:alice|bob").unwrap().unwrap();
        assert_eq!(messages, vec!["hi"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
