//! Astral Cycle - deterministic constellation visibility scheduler

pub mod constellation;
pub mod core;
pub mod schedule;
pub mod sky;
