//! Mapping from parsed bulletin rows to earthquake records
//!
//! - [`mapper`] - Timestamp, identity and magnitude mapping for one row

pub mod mapper;

#[cfg(test)]
mod tests;

pub use mapper::{build_identity, build_timestamp, map_record, map_records};
