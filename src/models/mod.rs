//! Data models for extracted export records.
//!
//! Records are schemaless: the dumps this tool reads carry no guaranteed
//! shape, so a decoded record stays a [`serde_json::Value`] mapping and
//! field access goes through the typed deep accessors in [`record`]. The
//! [`RunSummary`] counters report what one pass over the input produced.

pub mod record;
pub mod summary;

pub use record::{is_genuine_record, nested_field, nested_text, value_to_text};
pub use summary::RunSummary;
