//! OS-level interaction utilities.
//!
//! Provides the [`Env`](env::Env) snapshot over the process environment.

pub mod env;
