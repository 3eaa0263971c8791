//! Unit tests for the distance formulas

#[cfg(test)]
mod factory_tests;
