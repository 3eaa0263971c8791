//! Unit tests for the coordinate module

#[cfg(test)]
mod bbox_tests;
