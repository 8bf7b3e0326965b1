//! Timesheet calendar projection.
//!
//! A fetched timesheet payload is
//! normalized once ([`normalize`]),
//! then every render or month
//! navigation recomputes the derived
//! views from the immutable record:
//! [`agenda`] groups dosing events by
//! day and time, [`grid`] lays one
//! month out on a fixed 42-cell
//! grid. Nothing here is cached or
//! mutated between calls.

pub mod agenda;
pub mod grid;
pub mod model;
pub mod month;
pub mod normalize;
