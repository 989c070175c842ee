use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use crate::core::error::{Error, Result};
use crate::storage::store::Store;

/// Snapshot file layout: version (u32 LE), CRC32 of body (u32 LE), body
/// (bincode-serialized map). The whole map is loaded on open and written
/// back on close via a temp-file rename.
pub struct FileStore {
    pub path: PathBuf,
    map: BTreeMap<String, String>,
    opened: bool,
}

impl FileStore {
    pub const VERSION: u32 = 1;
    const HEADER_SIZE: usize = 8;

    pub fn new(path: PathBuf) -> Self {
        FileStore {
            path,
            map: BTreeMap::new(),
            opened: false,
        }
    }

    fn check_open(&self) -> Result<()> {
        if self.opened {
            Ok(())
        } else {
            Err(Error::store(format!("store is not open: {}", self.path.display())))
        }
    }

    fn load(&mut self) -> Result<()> {
        let bytes = fs::read(&self.path)?;
        let key = self.path.display().to_string();

        if bytes.len() < Self::HEADER_SIZE {
            return Err(Error::corruption(&key, "snapshot shorter than header"));
        }

        let version = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        if version != Self::VERSION {
            return Err(Error::corruption(&key, &format!("unknown snapshot version {}", version)));
        }

        let checksum = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let body = &bytes[Self::HEADER_SIZE..];
        if crc32fast::hash(body) != checksum {
            return Err(Error::corruption(&key, "snapshot checksum mismatch"));
        }

        self.map = bincode::deserialize(body)
            .map_err(|e| Error::corruption(&key, &format!("snapshot decode failed: {}", e)))?;
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let body = bincode::serialize(&self.map)
            .map_err(|e| Error::store(format!("snapshot encode failed: {}", e)))?;

        let mut bytes = Vec::with_capacity(Self::HEADER_SIZE + body.len());
        bytes.extend_from_slice(&Self::VERSION.to_le_bytes());
        bytes.extend_from_slice(&crc32fast::hash(&body).to_le_bytes());
        bytes.extend_from_slice(&body);

        // Write-then-rename so a failed close never truncates the snapshot
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Store for FileStore {
    fn open(&mut self) -> Result<()> {
        if self.path.exists() {
            self.load()?;
        } else {
            self.map.clear();
        }
        self.opened = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if !self.opened {
            return Ok(());
        }
        self.persist()?;
        self.opened = false;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_open()?;
        Ok(self.map.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_open()?;
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.check_open()?;
        self.map.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.check_open()?;
        self.map.clear();
        Ok(())
    }
}
