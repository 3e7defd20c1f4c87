//! filestore-client - state-managed client core for the FileStore backend
//!
//! This crate implements the unidirectional data flow of a file-explorer
//! client:
//! - One [`state::State`] record per session, owned by a [`state::StateManager`]
//! - [`mutators::Mutator`] values applying single-field transitions
//! - [`actions`] orchestrating REST calls around those transitions
//! - A typed [`api::FileStoreApi`] client classifying every failure
//!
//! UI layers subscribe to individual state fields, re-render from snapshots,
//! and translate failure records through [`notices`]. They never touch the
//! state directly and never see a raw HTTP response.

pub mod actions;
pub mod api;
pub mod config;
pub mod models;
pub mod mutators;
pub mod notices;
pub mod services;
pub mod state;
