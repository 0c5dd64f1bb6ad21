//! Single-file implementation of the Store trait.
//!
//! The whole snapshot lives in one JSON file. Every operation reads the file
//! under a reader/writer lock; creates hold the lock exclusively while they
//! load, mutate, and write the snapshot back.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tempfile::Builder;
use tracing::{debug, info};

use chirpy_core::{codec, Chirp, ChirpId, HashParams, PasswordHasher, Snapshot, User};

use crate::auth::authenticate;
use crate::error::{Result, StoreError};
use crate::traits::Store;

/// Prefix of the temporary files written next to the snapshot.
const TEMP_PREFIX: &str = ".chirpy-";

/// File-backed store.
///
/// Safe to share between threads. Not safe to point two processes (or two
/// `FileStore`s) at the same path.
pub struct FileStore {
    path: PathBuf,
    /// Guards the file, not any in-memory data.
    lock: RwLock<()>,
    hasher: PasswordHasher,
}

impl FileStore {
    /// Open the store at `path`, creating an empty snapshot if the file does
    /// not exist yet.
    ///
    /// An existing file is left as is; a corrupt one surfaces as `Format` on
    /// first use. Any failure to read other than "not found" is `Io`.
    pub fn open(path: impl AsRef<Path>, params: HashParams) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
            hasher: PasswordHasher::new(params)?,
        };
        store.ensure()?;
        Ok(store)
    }

    /// Open with the default password hashing parameters.
    pub fn open_default(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, HashParams::default())
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure(&self) -> Result<()> {
        let _guard = self.write_guard();
        match fs::read(&self.path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "creating empty snapshot");
                self.persist(&Snapshot::empty())
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, ()> {
        self.lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, ()> {
        self.lock.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read and decode the file. Caller holds the lock.
    fn load(&self) -> Result<Snapshot> {
        let bytes = fs::read(&self.path)?;
        let snapshot = codec::decode(&bytes)?;
        debug!(
            bytes = bytes.len(),
            chirps = snapshot.chirp_count(),
            users = snapshot.user_count(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Encode and atomically replace the file. Caller holds the write lock.
    fn persist(&self, snapshot: &Snapshot) -> Result<()> {
        let bytes = codec::encode(snapshot)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(".tmp")
            .tempfile_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        sync_dir(dir)?;

        debug!(bytes = bytes.len(), "persisted snapshot");
        Ok(())
    }

    /// Run one mutation as a full load-mutate-persist cycle under the write lock.
    fn update<T>(&self, mutate: impl FnOnce(&mut Snapshot) -> T) -> Result<T> {
        let _guard = self.write_guard();
        let mut snapshot = self.load()?;
        let out = mutate(&mut snapshot);
        self.persist(&snapshot)?;
        Ok(out)
    }

    /// Load the snapshot under the read lock.
    fn read(&self) -> Result<Snapshot> {
        let _guard = self.read_guard();
        self.load()
    }
}

/// Flush a directory entry so a rename inside it survives a crash.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

/// Directories cannot be opened as files here; the rename is all we get.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

impl Store for FileStore {
    fn create_chirp(&self, body: &str) -> Result<Chirp> {
        let chirp = self.update(|snapshot| snapshot.insert_chirp(body))?;
        info!(chirp_id = %chirp.id, "created chirp");
        Ok(chirp)
    }

    fn get_chirps(&self) -> Result<Vec<Chirp>> {
        Ok(self.read()?.chirps_sorted())
    }

    fn get_chirp(&self, id: ChirpId) -> Result<Chirp> {
        self.read()?
            .chirp(id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create_user(&self, email: &str, password: &str) -> Result<User> {
        // Hashing is slow; keep it outside the lock.
        let hash = self.hasher.hash(password)?;
        let user = self.update(|snapshot| snapshot.upsert_user(email, hash))?;
        info!(user_id = %user.id, "created user");
        Ok(user)
    }

    fn login(&self, email: &str, password: &str) -> Result<User> {
        let user = self.read()?.user(email).cloned();
        authenticate(&self.hasher, user, password)
    }

    fn snapshot(&self) -> Result<Snapshot> {
        self.read()
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("hash_params", &self.hasher.params())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpy_core::UserId;

    fn open_temp() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open_default(dir.path().join("database.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        assert!(!path.exists());

        let store = FileStore::open_default(&path).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), br#"{"chirps":{},"users":{}}"#);

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.chirp_count(), 0);
        assert_eq!(snapshot.user_count(), 0);
    }

    #[test]
    fn test_open_existing_keeps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        {
            let store = FileStore::open_default(&path).unwrap();
            store.create_chirp("persisted").unwrap();
        }
        let store = FileStore::open_default(&path).unwrap();
        assert_eq!(store.get_chirp(ChirpId(1)).unwrap().body, "persisted");
    }

    #[test]
    fn test_open_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileStore::open_default(dir.path());
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn test_open_missing_parent_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileStore::open_default(dir.path().join("missing").join("database.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn test_open_rejects_weak_params() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileStore::open(dir.path().join("db.json"), HashParams::new(8, 1, 1));
        assert!(matches!(result, Err(StoreError::Password(_))));
    }

    #[test]
    fn test_sequential_chirp_ids() {
        let (_dir, store) = open_temp();
        let ids: Vec<u64> = (0..5)
            .map(|i| store.create_chirp(&format!("chirp {}", i)).unwrap().id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_chirps_empty_and_ordered() {
        let (_dir, store) = open_temp();
        assert!(store.get_chirps().unwrap().is_empty());

        for i in 0..11 {
            store.create_chirp(&format!("{}", i)).unwrap();
        }
        let first = store.get_chirps().unwrap();
        let second = store.get_chirps().unwrap();
        assert_eq!(first, second);
        let ids: Vec<u64> = first.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_get_chirp_range_boundary() {
        let (_dir, store) = open_temp();
        for body in ["a", "b", "c"] {
            store.create_chirp(body).unwrap();
        }
        assert_eq!(store.get_chirp(ChirpId(1)).unwrap().body, "a");
        assert_eq!(store.get_chirp(ChirpId(3)).unwrap().body, "c");
        assert!(matches!(
            store.get_chirp(ChirpId(0)),
            Err(StoreError::NotFound(ChirpId(0)))
        ));
        assert!(matches!(
            store.get_chirp(ChirpId(4)),
            Err(StoreError::NotFound(ChirpId(4)))
        ));
    }

    #[test]
    fn test_create_user_and_login() {
        let (_dir, store) = open_temp();
        let created = store.create_user("a@x.com", "secret").unwrap();
        assert_eq!(created.id, UserId(1));
        assert_ne!(created.password_hash.as_bytes(), b"secret");

        let user = store.login("a@x.com", "secret").unwrap();
        assert_eq!(user.id, created.id);
        assert_eq!(user.email, "a@x.com");

        assert!(matches!(
            store.login("a@x.com", "wrong"),
            Err(StoreError::Auth)
        ));
        assert!(matches!(
            store.login("nobody@x.com", "anything"),
            Err(StoreError::Auth)
        ));
    }

    #[test]
    fn test_auth_errors_indistinguishable() {
        let (_dir, store) = open_temp();
        store.create_user("a@x.com", "secret").unwrap();

        let wrong = store.login("a@x.com", "wrong").unwrap_err().to_string();
        let unknown = store.login("nobody@x.com", "wrong").unwrap_err().to_string();
        assert_eq!(wrong, unknown);
    }

    #[test]
    fn test_password_not_stored_in_plaintext() {
        let (_dir, store) = open_temp();
        store.create_user("a@x.com", "hunter2-plaintext").unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("hunter2-plaintext"));
    }

    #[test]
    fn test_corrupt_file_is_format_error_and_untouched() {
        let (_dir, store) = open_temp();
        store.create_chirp("before").unwrap();
        let original = fs::read(store.path()).unwrap();
        let truncated = &original[..original.len() / 2];
        fs::write(store.path(), truncated).unwrap();

        assert!(matches!(store.get_chirps(), Err(StoreError::Format(_))));
        assert!(matches!(
            store.create_chirp("after"),
            Err(StoreError::Format(_))
        ));
        assert!(matches!(
            store.login("a@x.com", "pw"),
            Err(StoreError::Format(_))
        ));
        assert_eq!(fs::read(store.path()).unwrap(), truncated);
    }

    #[test]
    fn test_deleted_file_is_not_recreated() {
        let (_dir, store) = open_temp();
        fs::remove_file(store.path()).unwrap();
        assert!(matches!(store.get_chirps(), Err(StoreError::Io(_))));
        assert!(matches!(store.create_chirp("x"), Err(StoreError::Io(_))));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let (dir, store) = open_temp();
        store.create_chirp("one").unwrap();
        store.create_user("a@x.com", "pw").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["database.json".to_string()]);
    }

    #[test]
    fn test_sync_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sync_dir(dir.path()).is_ok());
    }

    #[test]
    fn test_user_ids_with_gaps_load_and_extend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        let hasher = PasswordHasher::new(HashParams::default()).unwrap();

        // Registering a, b, then a again under count + 1 numbering.
        let mut snapshot = Snapshot::empty();
        snapshot.insert_chirp("hello");
        for (email, id, pw) in [("a@x.com", 3, "pw-a"), ("b@x.com", 2, "pw-b")] {
            snapshot.users.insert(
                email.into(),
                User {
                    id: UserId(id),
                    email: email.into(),
                    password_hash: hasher.hash(pw).unwrap(),
                },
            );
        }
        fs::write(&path, codec::encode(&snapshot).unwrap()).unwrap();

        let store = FileStore::open_default(&path).unwrap();
        assert_eq!(store.get_chirps().unwrap().len(), 1);
        assert_eq!(store.login("a@x.com", "pw-a").unwrap().id, UserId(3));
        assert_eq!(store.create_user("c@x.com", "pw-c").unwrap().id, UserId(4));
        assert_eq!(store.create_user("b@x.com", "new").unwrap().id, UserId(2));
    }
}
