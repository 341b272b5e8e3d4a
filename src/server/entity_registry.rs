//! Entity registry for managing entity descriptors and auto-generating CRUD routes

use super::dto::Resource;
use super::handlers::{self, AppState};
use crate::core::store::{EntityStore, WalksRepository};
use axum::Router;
use axum::routing::get;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Trait that describes how to build routes for an entity
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "region")
    fn entity_type(&self) -> &str;

    /// The resource name used in paths (e.g., "regions")
    fn plural(&self) -> &str;

    /// Build the CRUD routes for this entity:
    /// - GET/POST /{plural}
    /// - GET/PUT/DELETE /{plural}/{id}
    fn build_routes(&self) -> Router<AppState>;
}

/// Descriptor serving any [`Resource`] through the generic handlers
pub struct ResourceDescriptor<T>(PhantomData<fn() -> T>);

impl<T> ResourceDescriptor<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ResourceDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityDescriptor for ResourceDescriptor<T>
where
    T: Resource,
    dyn WalksRepository: EntityStore<T>,
{
    fn entity_type(&self) -> &str {
        T::resource_name_singular()
    }

    fn plural(&self) -> &str {
        T::resource_name()
    }

    fn build_routes(&self) -> Router<AppState> {
        let collection = format!("/{}", T::resource_name());
        let item = format!("/{}/{{id}}", T::resource_name());

        Router::new()
            .route(&collection, get(handlers::list::<T>).post(handlers::create::<T>))
            .route(
                &item,
                get(handlers::get::<T>)
                    .put(handlers::update::<T>)
                    .delete(handlers::delete::<T>),
            )
    }
}

/// Registry for all entities exposed by the server
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor
    ///
    /// The entity type name will be used as the key.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Register the generic CRUD routes of `T`
    pub fn register_resource<T>(&mut self)
    where
        T: Resource,
        dyn WalksRepository: EntityStore<T>,
    {
        self.register(Box::new(ResourceDescriptor::<T>::new()));
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router<AppState> {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
