//! Shared Kernel - Domain-crossing minimal core
//!
//! The "smallest core" of vocabulary every crate agrees on:
//! - Unified error type and result alias
//! - Typed entity IDs
//!
//! Only things that are hard to change and mean the same thing in every
//! domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
