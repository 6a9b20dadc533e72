//! Client-local state: the pieces a browsing session keeps on its own device.
//! Everything here goes through an injected [`storage::KeyValueStorage`] so
//! the backing store (memory, file, browser storage) is interchangeable.

pub mod comparison;
pub mod debounce;
pub mod drafts;
pub mod enrollments;
pub mod favorites;
pub mod form;
pub mod history;
pub mod storage;
