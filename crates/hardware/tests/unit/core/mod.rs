//! Processor core tests.
