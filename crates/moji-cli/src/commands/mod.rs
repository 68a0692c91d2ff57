pub mod check;
pub mod compile;
pub mod dump;
pub mod input;
pub mod scan;

#[cfg(test)]
mod scan_tests;
