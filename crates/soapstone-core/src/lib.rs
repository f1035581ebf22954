//! Core mapping primitives for the admin wire protocol: the element tree
//! model, field descriptors and message shapes, scalar token codecs, the
//! optional-field projector, the collection mapper, and the shape registry.
//!
//! Nothing in this crate names a concrete admin message. Catalog crates
//! declare shapes as `'static` tables next to their record types and build
//! their codecs out of [`read::ElementReader`] and [`write::ElementWriter`].

mod macros;

pub mod codec;
pub mod error;
pub mod fmt;
pub mod model;
pub mod read;
pub mod registry;
pub mod traits;
pub mod tribool;
pub mod validate;
pub mod write;
pub mod xml;

/// Re-exports consumed by macro expansions.
///
/// Lets downstream crates call the exported macros without declaring
/// these dependencies themselves.
pub mod __reexports {
    pub use remain;
}

///
/// PRELUDE
///

pub mod prelude {
    pub use crate::{
        error::{WireError, WireErrorKind},
        fmt::{DebugFields, FieldFormatter},
        model::{
            Binding, FieldDescriptor, FieldKind, ListKind, ListOrder, MessageRole, MessageShape,
            Presence,
        },
        read::ElementReader,
        traits::{AdminRequest, MessageKind, WireEnum},
        tribool::TriBool,
        wire_enum,
        write::ElementWriter,
        xml::Element,
    };
}
