//! Client Intake Form Engine
//!
//! This library provides the metadata-driven engine behind the client
//! creation form: fetching organization-defined field descriptors,
//! rendering them as typed input widgets, collecting fixed and dynamic
//! values, and serializing one-hot typed attributes for the creation
//! mutation.
//!
//! # Modules
//!
//! - `api`: Form-facing surface (session, rendering, selection).
//! - `core`: Engine internals (catalog, values, serializer, models, errors).
//! - `integrations`: Remote GraphQL integration.
//! - `obs`: Observability and logging.
//! - `catalog`: Field metadata store with refresh supersession.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `graphql_client`: Transport seam and the bundled GraphQL client.
//! - `models`: Wire and domain models.
//! - `render`: Style-dispatching field renderer.
//! - `selection`: Active dynamic-field selection.
//! - `serializer`: Typed attribute serializer.
//! - `services`: Operation documents and typed API calls.
//! - `session`: Form session and submission coordinator.
//! - `values`: Fixed and dynamic value store.

pub mod api;
pub mod core;
pub mod integrations;
pub mod obs;

// Re-export primary modules for shared use in tests and host applications
pub mod catalog;
pub mod config;
pub mod errors;
pub mod graphql_client;
pub mod models;
pub mod render;
pub mod selection;
pub mod serializer;
pub mod services;
pub mod session;
pub mod values;
