//! Hash states for the containers of this crate, re-exports *hashbrown*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{NoOpHashState, NoOpHasher};

// -----------------------------------------------------------------------------
// Re-export crates

pub use hashbrown;
