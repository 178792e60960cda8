//! Support modules for the provider adapter BDD tests.

pub(crate) mod state;

pub(crate) use state::{ProviderState, run_provider};
