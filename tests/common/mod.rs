//! Shared test utilities for git-jump integration tests
//!
//! Every scenario runs the real binary against a throwaway git repository.

pub mod assertions;
pub mod fixtures;
pub mod repository;
