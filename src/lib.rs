//! DoggoDex: a dog breed catalog with personal collections.
//!
//! The interesting part lives in [`state`]: two reducers (catalog and
//! collections) composed by a root [`state::Store`] that coordinates
//! asynchronous fetches through a [`api::BreedGateway`].

pub mod api;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod detail;
pub mod logging;
pub mod pagination;
pub mod state;
