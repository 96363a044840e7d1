//! Typed values over a string-only key-value medium.
//!
//! Every stored string starts with a type tag, `json|`, `boolean|`,
//! `number|` or `string|`, so values come back with the type they went in with
//! and the stored text stays readable.

pub mod codec;
pub mod error;
pub mod storage;
pub mod store;
pub mod value;

pub use codec::{decode, encode};
pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::KeyValueStore;
pub use value::StoredValue;
