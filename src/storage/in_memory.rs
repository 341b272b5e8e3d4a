//! In-memory implementation of the entity stores for testing and development

use crate::core::error::StorageError;
use crate::core::store::{EntityStore, WalksRepository};
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tables::{Table, Tables};
use uuid::Uuid;

/// In-memory store holding every entity kind.
///
/// All tables sit behind a single `RwLock`, so a write and the integrity
/// checks it depends on observe one consistent state. Cloning shares the
/// underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StorageError> {
        self.tables.read().map_err(|e| StorageError::Poisoned {
            message: format!("Failed to acquire read lock: {}", e),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StorageError> {
        self.tables.write().map_err(|e| StorageError::Poisoned {
            message: format!("Failed to acquire write lock: {}", e),
        })
    }
}

#[async_trait]
impl<T: Table> EntityStore<T> for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<T>, StorageError> {
        let tables = self.read()?;

        Ok(T::rows(&tables)
            .values()
            .cloned()
            .map(|record| record.resolve(&tables))
            .collect())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>, StorageError> {
        let tables = self.read()?;

        Ok(T::rows(&tables)
            .get(id)
            .cloned()
            .map(|record| record.resolve(&tables)))
    }

    async fn create(&self, record: T) -> Result<T, StorageError> {
        let mut tables = self.write()?;
        record.check_references(&tables)?;

        let mut id = Uuid::new_v4();
        while T::rows(&tables).contains_key(&id) {
            id = Uuid::new_v4();
        }

        let record = record.with_id(id).detach();
        T::rows_mut(&mut tables).insert(id, record.clone());

        Ok(record.resolve(&tables))
    }

    async fn update(&self, id: &Uuid, record: T) -> Result<Option<T>, StorageError> {
        let mut tables = self.write()?;
        if !T::rows(&tables).contains_key(id) {
            return Ok(None);
        }
        record.check_references(&tables)?;

        let Some(stored) = T::rows_mut(&mut tables).get_mut(id) else {
            return Ok(None);
        };
        stored.overwrite(record.detach());
        let updated = stored.clone();

        Ok(Some(updated.resolve(&tables)))
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<T>, StorageError> {
        let mut tables = self.write()?;
        if !T::rows(&tables).contains_key(id) {
            return Ok(None);
        }
        T::check_unreferenced(id, &tables)?;

        let removed = T::rows_mut(&mut tables).remove(id);
        Ok(removed.map(|record| record.resolve(&tables)))
    }
}

impl WalksRepository for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "in-memory"
    }
}

mod tables {
    use crate::core::entity::Entity;
    use crate::core::error::StorageError;
    use crate::entities::{Region, Walk, WalkDifficulty};
    use std::collections::HashMap;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct Tables {
        regions: HashMap<Uuid, Region>,
        walk_difficulties: HashMap<Uuid, WalkDifficulty>,
        walks: HashMap<Uuid, Walk>,
    }

    /// Per-kind access to the shared tables, with the relational rules of
    /// that kind.
    pub trait Table: Entity {
        fn rows(tables: &Tables) -> &HashMap<Uuid, Self>;

        fn rows_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self>;

        /// Fail when a reference carried by `self` does not resolve
        fn check_references(&self, _tables: &Tables) -> Result<(), StorageError> {
            Ok(())
        }

        /// Fail when another record still references `id`
        fn check_unreferenced(_id: &Uuid, _tables: &Tables) -> Result<(), StorageError> {
            Ok(())
        }

        /// Strip data that is derived on read rather than stored
        fn detach(self) -> Self {
            self
        }

        /// Populate data derived from other tables
        fn resolve(self, _tables: &Tables) -> Self {
            self
        }
    }

    impl Table for Region {
        fn rows(tables: &Tables) -> &HashMap<Uuid, Self> {
            &tables.regions
        }

        fn rows_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
            &mut tables.regions
        }

        fn check_unreferenced(id: &Uuid, tables: &Tables) -> Result<(), StorageError> {
            let walks = tables.walks.values().filter(|w| &w.region_id == id).count();
            if walks > 0 {
                return Err(StorageError::integrity(format!(
                    "region '{}' is still referenced by {} walk(s)",
                    id, walks
                )));
            }
            Ok(())
        }
    }

    impl Table for WalkDifficulty {
        fn rows(tables: &Tables) -> &HashMap<Uuid, Self> {
            &tables.walk_difficulties
        }

        fn rows_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
            &mut tables.walk_difficulties
        }

        fn check_unreferenced(id: &Uuid, tables: &Tables) -> Result<(), StorageError> {
            let walks = tables
                .walks
                .values()
                .filter(|w| &w.walk_difficulty_id == id)
                .count();
            if walks > 0 {
                return Err(StorageError::integrity(format!(
                    "walk difficulty '{}' is still referenced by {} walk(s)",
                    id, walks
                )));
            }
            Ok(())
        }
    }

    impl Table for Walk {
        fn rows(tables: &Tables) -> &HashMap<Uuid, Self> {
            &tables.walks
        }

        fn rows_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
            &mut tables.walks
        }

        fn check_references(&self, tables: &Tables) -> Result<(), StorageError> {
            if !tables.regions.contains_key(&self.region_id) {
                return Err(StorageError::integrity(format!(
                    "walk references missing region '{}'",
                    self.region_id
                )));
            }
            if !tables.walk_difficulties.contains_key(&self.walk_difficulty_id) {
                return Err(StorageError::integrity(format!(
                    "walk references missing walk difficulty '{}'",
                    self.walk_difficulty_id
                )));
            }
            Ok(())
        }

        fn detach(self) -> Self {
            self.detached()
        }

        fn resolve(self, tables: &Tables) -> Self {
            Walk {
                region: tables.regions.get(&self.region_id).cloned(),
                walk_difficulty: tables.walk_difficulties.get(&self.walk_difficulty_id).cloned(),
                ..self
            }
        }
    }
}
