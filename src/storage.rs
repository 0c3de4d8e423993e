// ============================================================================
// Storage - Store clé/valeur local (équivalent localStorage)
// ============================================================================
// La page web d'origine écrivait une seule entrée localStorage ("userEmail").
// Ici : un trait injecté dans le contrôleur, avec deux implémentations :
// - JsonFileStore : fichier JSON dans le répertoire de données utilisateur
// - MemoryStore : HashMap en mémoire pour les tests
//
// CONCEPTS RUST :
// 1. Trait comme seam d'injection : le contrôleur ne connaît que get/set
// 2. Mutex pour la mutabilité intérieure (méthodes en &self)
// 3. anyhow::Context : erreurs d'I/O avec contexte
// ============================================================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::debug;

/// Store clé/valeur process-wide
///
/// Les méthodes prennent &self : les implémentations gèrent leur propre
/// mutabilité intérieure, ce qui permet de partager le store entre threads.
pub trait KeyValueStore: Send + Sync {
    /// Lit la valeur associée à une clé (None si absente)
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Écrit (ou remplace) une valeur
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

// Un Arc<Store> est lui-même un store : pratique pour partager la même
// instance entre le contrôleur et les assertions de test
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

// ============================================================================
// MemoryStore : implémentation en mémoire
// ============================================================================

/// Store en mémoire, utilisé par les tests (et sans persistance)
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// JsonFileStore : implémentation fichier JSON
// ============================================================================

/// Store persisté dans un fichier JSON (une map plate clé -> valeur)
///
/// Chaque set relit puis réécrit le fichier entier : largement suffisant
/// pour une unique entrée écrite une fois par soumission réussie.
pub struct JsonFileStore {
    path: PathBuf,
    // Sérialise les accès au fichier entre threads
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Crée un store sur un chemin donné (le fichier peut ne pas exister)
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Chemin par défaut du store
    ///
    /// - Linux/WSL : ~/.local/share/cryptoview/store.json
    /// - macOS : ~/Library/Application Support/cryptoview/store.json
    /// - Windows : C:\Users\<user>\AppData\Local\cryptoview\store.json
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cryptoview")
            .join("store.json")
    }

    fn read_entries(path: &Path) -> Result<HashMap<String, String>> {
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Échec de lecture du store {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Store JSON invalide : {}", path.display()))
    }

    fn write_entries(path: &Path, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Échec de création du répertoire {}", parent.display()))?;
        }

        let raw = serde_json::to_string_pretty(entries).context("Échec de sérialisation du store")?;
        std::fs::write(path, raw)
            .with_context(|| format!("Échec d'écriture du store {}", path.display()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().unwrap();
        let entries = Self::read_entries(&self.path)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = Self::read_entries(&self.path)?;
        entries.insert(key.to_string(), value.to_string());
        Self::write_entries(&self.path, &entries)?;
        debug!(key = %key, path = %self.path.display(), "Store entry written");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("userEmail").unwrap(), None);

        store.set("userEmail", "a@b.com").unwrap();
        assert_eq!(store.get("userEmail").unwrap(), Some("a@b.com".to_string()));

        // Écrasement
        store.set("userEmail", "c@d.com").unwrap();
        assert_eq!(store.get("userEmail").unwrap(), Some("c@d.com".to_string()));
    }

    #[test]
    fn test_arc_store_delegates() {
        let store = Arc::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_json_file_store_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "cryptoview-store-test-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("userEmail").unwrap(), None);

        store.set("userEmail", "a@b.com").unwrap();
        assert_eq!(store.get("userEmail").unwrap(), Some("a@b.com".to_string()));

        // Une seconde instance relit le même fichier
        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("userEmail").unwrap(),
            Some("a@b.com".to_string())
        );

        let _ = std::fs::remove_file(&path);
    }
}
