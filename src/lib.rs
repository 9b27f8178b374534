//! Basedirs - XDG Base Directory path resolution.
//!
//! This crate computes standard per-application and per-user directory paths
//! (configuration, cache, data, state, runtime, and user media folders) from
//! the process environment, following the XDG Base Directory convention on
//! Linux. It never creates, inspects or mutates anything on disk.

pub mod os;
pub mod xdg;
