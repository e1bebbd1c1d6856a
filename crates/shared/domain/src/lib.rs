//! # Domain Models
//!
//! Pure types shared by every GUIDEX crate: the settings tree, well-known
//! constants of the GUID database format, and GUID key helpers.
//! Keep it lean: no I/O and no heavy logic.

pub mod config;
pub mod constants;
pub mod guid;
