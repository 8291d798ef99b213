//! # mentor-session
//!
//! In-process implementation of the progress storage seam: sessions,
//! attempt logs, and review schedules in `DashMap`s with entry-level
//! locking, so read-modify-write cycles are atomic per session while
//! distinct sessions proceed fully in parallel. A database-backed
//! store implements the same trait behind a single-writer transaction.

pub mod store;

pub use store::ProgressStore;
