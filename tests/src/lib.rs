//! Cross-crate integration tests: validate a payload end to end, render
//! and rewrite error messages, and hold the table/map/schema invariants
//! that span crate boundaries.

#[cfg(test)]
mod boundaries;
#[cfg(test)]
mod end_to_end;
