//! Macro-generated test suite for `EntityStore<T>` contract validation.
//!
//! The `entity_store_tests!` macro generates a test module that validates any
//! `WalksRepository` implementation against the full contract: CRUD for every
//! entity kind, identifier assignment, resolved walk reads, referential
//! integrity, pipeline rejection and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use nzwalks::storage::InMemoryStore;
//!
//! entity_store_tests!(InMemoryStore::new());
//! ```

/// Generate a full `WalksRepository` conformance test suite.
///
/// `$factory` must be an expression that evaluates to a fresh, empty store.
/// It is re-evaluated for each test to ensure isolation. For the concurrent
/// access test, the returned store must also implement `Clone + 'static`.
#[macro_export]
macro_rules! entity_store_tests {
    ($factory:expr) => {
        mod entity_store_contract_tests {
            use super::*;
            use nzwalks::core::entity::Entity;
            use nzwalks::core::pipeline::WritePipeline;
            use nzwalks::core::store::EntityStore;
            use nzwalks::entities::{Region, Walk, WalkDifficulty, WalkPayload};
            use uuid::Uuid;

            // ==================================================================
            // CRUD - Create & Get
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let store = $factory;

                let created = EntityStore::<Region>::create(&store, region_record("AKL"))
                    .await
                    .unwrap();
                assert!(!created.id.is_nil());
                assert_eq!(created.code, "AKL");
                assert_eq!(created.name, "AKL region");
                assert!((created.area - 1234.5).abs() < f64::EPSILON);
                assert_eq!(created.population, 250_000);

                let retrieved = EntityStore::<Region>::get(&store, &created.id)
                    .await
                    .unwrap();
                assert_eq!(retrieved, Some(created));
            }

            #[tokio::test]
            async fn test_create_ignores_supplied_identifier() {
                let store = $factory;
                let supplied = Uuid::new_v4();

                let created = EntityStore::<WalkDifficulty>::create(
                    &store,
                    difficulty_record("Medium").with_id(supplied),
                )
                .await
                .unwrap();
                assert_ne!(created.id, supplied);
                assert!(EntityStore::<WalkDifficulty>::get(&store, &supplied)
                    .await
                    .unwrap()
                    .is_none());
            }

            #[tokio::test]
            async fn test_identifiers_are_distinct() {
                let store = $factory;

                let first = EntityStore::<Region>::create(&store, region_record("A"))
                    .await
                    .unwrap();
                let second = EntityStore::<Region>::create(&store, region_record("A"))
                    .await
                    .unwrap();
                assert_ne!(first.id, second.id);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;

                let result = EntityStore::<Walk>::get(&store, &Uuid::new_v4()).await.unwrap();
                assert!(result.is_none(), "Getting a nonexistent record should return None");
            }

            // ==================================================================
            // CRUD - List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;

                assert!(EntityStore::<Region>::list_all(&store).await.unwrap().is_empty());
                assert!(EntityStore::<WalkDifficulty>::list_all(&store).await.unwrap().is_empty());
                assert!(EntityStore::<Walk>::list_all(&store).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_multiple() {
                let store = $factory;

                for code in ["NTL", "AKL", "WKO", "BOP", "GIS"] {
                    EntityStore::<Region>::create(&store, region_record(code))
                        .await
                        .unwrap();
                }

                let mut codes: Vec<String> = EntityStore::<Region>::list_all(&store)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|r| r.code)
                    .collect();
                codes.sort();
                assert_eq!(codes, vec!["AKL", "BOP", "GIS", "NTL", "WKO"]);
            }

            // ==================================================================
            // CRUD - Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let store = $factory;
                let created = EntityStore::<Region>::create(&store, region_record("OTA"))
                    .await
                    .unwrap();

                let mut values = region_record("STL");
                values.population = 100_000;
                let updated = EntityStore::<Region>::update(&store, &created.id, values)
                    .await
                    .unwrap()
                    .expect("record exists");
                assert_eq!(updated.id, created.id);
                assert_eq!(updated.code, "STL");
                assert_eq!(updated.population, 100_000);

                let retrieved = EntityStore::<Region>::get(&store, &created.id)
                    .await
                    .unwrap();
                assert_eq!(retrieved, Some(updated));
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory;
                let (region, difficulty) = create_references(&store).await;

                let result =
                    EntityStore::<Region>::update(&store, &Uuid::new_v4(), region_record("NTL"))
                        .await
                        .unwrap();
                assert!(result.is_none());
                assert_eq!(
                    EntityStore::<Region>::list_all(&store).await.unwrap(),
                    vec![region.clone()]
                );

                let result = EntityStore::<WalkDifficulty>::update(
                    &store,
                    &Uuid::new_v4(),
                    difficulty_record("Hard"),
                )
                .await
                .unwrap();
                assert!(result.is_none());
                assert_eq!(
                    EntityStore::<WalkDifficulty>::list_all(&store).await.unwrap(),
                    vec![difficulty.clone()]
                );

                // Resolvable references
                let result = EntityStore::<Walk>::update(
                    &store,
                    &Uuid::new_v4(),
                    walk_record("Abel Tasman Coast Track", region.id, difficulty.id),
                )
                .await
                .unwrap();
                assert!(result.is_none());

                // References to records that do not exist either
                let result = EntityStore::<Walk>::update(
                    &store,
                    &Uuid::new_v4(),
                    walk_record("Heaphy Track", Uuid::new_v4(), Uuid::new_v4()),
                )
                .await
                .unwrap();
                assert!(result.is_none());
                assert!(EntityStore::<Walk>::list_all(&store).await.unwrap().is_empty());
            }

            // ==================================================================
            // CRUD - Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let created =
                    EntityStore::<WalkDifficulty>::create(&store, difficulty_record("Easy"))
                        .await
                        .unwrap();

                let removed = EntityStore::<WalkDifficulty>::delete(&store, &created.id)
                    .await
                    .unwrap();
                assert_eq!(removed, Some(created.clone()));
                assert!(EntityStore::<WalkDifficulty>::get(&store, &created.id)
                    .await
                    .unwrap()
                    .is_none());

                // A second delete is absent, not an error
                let again = EntityStore::<WalkDifficulty>::delete(&store, &created.id)
                    .await
                    .unwrap();
                assert!(again.is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory;

                let removed = EntityStore::<Region>::delete(&store, &Uuid::new_v4())
                    .await
                    .unwrap();
                assert!(removed.is_none());
            }

            // ==================================================================
            // Walks - resolved references
            // ==================================================================

            #[tokio::test]
            async fn test_walk_reads_are_resolved() {
                let store = $factory;
                let (region, difficulty) = create_references(&store).await;

                let created = EntityStore::<Walk>::create(
                    &store,
                    walk_record("Red Rocks", region.id, difficulty.id),
                )
                .await
                .unwrap();
                assert_eq!(created.region.as_ref(), Some(&region));
                assert_eq!(created.walk_difficulty.as_ref(), Some(&difficulty));

                let retrieved = EntityStore::<Walk>::get(&store, &created.id)
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(retrieved, created);

                let listed = EntityStore::<Walk>::list_all(&store).await.unwrap();
                assert_eq!(listed, vec![created]);
            }

            #[tokio::test]
            async fn test_walk_update_moves_reference() {
                let store = $factory;
                let (region, difficulty) = create_references(&store).await;
                let other = EntityStore::<Region>::create(&store, region_record("TKI"))
                    .await
                    .unwrap();
                let walk = EntityStore::<Walk>::create(
                    &store,
                    walk_record("Pouakai", region.id, difficulty.id),
                )
                .await
                .unwrap();

                let updated = EntityStore::<Walk>::update(
                    &store,
                    &walk.id,
                    walk_record("Pouakai Circuit", other.id, difficulty.id),
                )
                .await
                .unwrap()
                .unwrap();
                assert_eq!(updated.id, walk.id);
                assert_eq!(updated.region_id, other.id);
                assert_eq!(updated.region.map(|r| r.code), Some("TKI".to_string()));
            }

            // ==================================================================
            // Referential integrity
            // ==================================================================

            #[tokio::test]
            async fn test_walk_with_dangling_reference_is_refused() {
                let store = $factory;
                let (region, _) = create_references(&store).await;

                let err = EntityStore::<Walk>::create(
                    &store,
                    walk_record("Nowhere", region.id, Uuid::new_v4()),
                )
                .await
                .unwrap_err();
                assert!(err.is_integrity(), "unexpected error: {}", err);
                assert!(EntityStore::<Walk>::list_all(&store).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_referenced_records_cannot_be_deleted() {
                let store = $factory;
                let (region, difficulty) = create_references(&store).await;
                let walk = EntityStore::<Walk>::create(
                    &store,
                    walk_record("Kelburn", region.id, difficulty.id),
                )
                .await
                .unwrap();

                let err = EntityStore::<Region>::delete(&store, &region.id)
                    .await
                    .unwrap_err();
                assert!(err.is_integrity(), "unexpected error: {}", err);
                let err = EntityStore::<WalkDifficulty>::delete(&store, &difficulty.id)
                    .await
                    .unwrap_err();
                assert!(err.is_integrity(), "unexpected error: {}", err);

                EntityStore::<Walk>::delete(&store, &walk.id).await.unwrap();
                assert!(EntityStore::<Region>::delete(&store, &region.id)
                    .await
                    .unwrap()
                    .is_some());
            }

            // ==================================================================
            // Write pipeline over the backend
            // ==================================================================

            #[tokio::test]
            async fn test_pipeline_rejects_unresolved_references() {
                let store = $factory;

                let err = WritePipeline::new(&store)
                    .create(Some(WalkPayload {
                        name: String::new(),
                        length: -1.0,
                        region_id: Uuid::new_v4(),
                        walk_difficulty_id: Uuid::nil(),
                    }))
                    .await
                    .unwrap_err();
                assert_eq!(
                    err.violations().unwrap().fields(),
                    vec!["name", "length", "regionId", "walkDifficultyId"]
                );
                assert!(EntityStore::<Walk>::list_all(&store).await.unwrap().is_empty());
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_access() {
                let store = $factory;

                let mut handles = Vec::new();
                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        EntityStore::<WalkDifficulty>::create(
                            &store,
                            difficulty_record(&format!("Grade {}", i)),
                        )
                        .await
                        .unwrap()
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap().id);
                }
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), 10);

                let all = EntityStore::<WalkDifficulty>::list_all(&store).await.unwrap();
                assert_eq!(all.len(), 10);
            }
        }
    };
}
