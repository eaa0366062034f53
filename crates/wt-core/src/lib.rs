//! # wt-core
//!
//! Core types shared across the webtypes crates:
//! - [`PlainValue`]: data reconstructed from literal expressions
//! - Member records (attributes, events, slots, methods) with their defaults
//! - [`ComponentRecord`]: one component's full API surface

pub mod records;
pub mod value;

pub use records::{
    AttributeRecord, ComponentRecord, EventRecord, MemberList, MethodRecord, SlotRecord,
};
pub use value::PlainValue;
