//! Static message-shape metadata.
//!
//! Shapes and field descriptors are plain `'static` data declared next to
//! the record types they describe. The codecs consult them per field; the
//! registry validates them once at build.

mod field;
mod shape;

pub use field::{Binding, FieldDescriptor, FieldKind, ListKind, ListOrder, Presence};
pub use shape::{MessageRole, MessageShape};
