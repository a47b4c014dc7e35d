//! Crate-level tests that exercise the whole pipeline.

mod behaviour;
