//! Notedrill CLI library.
//!
//! This crate provides the command implementations for the `notedrill`
//! binary: drawing random note prompts, dumping candidate pools, and
//! managing the persisted naming preference.

pub mod commands;
