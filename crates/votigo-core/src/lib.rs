//! # votigo-core
//!
//! Core domain types for Votigo, the event polling engine.
//!
//! This crate provides the foundational types shared across all Votigo crates:
//! - Entity structs for categories, options, votes, and selections
//! - Vote type, status, and visibility enums with the lifecycle state machine
//! - Pure rules: effective max-rank, results visibility, nickname identity
//! - Typed tally rows and results responses
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod rules;
