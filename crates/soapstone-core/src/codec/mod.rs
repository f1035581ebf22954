//! Scalar token codecs, the optional-field projector, and the collection
//! mapper.
//!
//! Everything here is a pure function over descriptors and values. All
//! failures carry the owning shape and field names; none of these
//! functions touch shared state.

mod collect;
mod project;
mod scalar;

pub use collect::{read_list, write_list};
pub use project::{project, require};
pub use scalar::{
    decode_bool, decode_enum, decode_i64, decode_selector_token, decode_tribool, encode_i64,
};
