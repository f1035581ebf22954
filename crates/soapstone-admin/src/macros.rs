//! Declarative helpers for the catalog's recurring shape patterns.
//!
//! These expand unqualified names (`MessageKind`, `ElementWriter`, ...);
//! every expansion site imports the core prelude.

/// A message carrying nothing but its element.
macro_rules! empty_shape {
    (
        $(#[$meta:meta])*
        $name:ident : $role:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl MessageKind for $name {
            const SHAPE: &'static MessageShape = &MessageShape {
                name: stringify!($name),
                role: MessageRole::$role,
                fields: &[],
            };

            fn to_element(&self) -> Result<Element, WireError> {
                Ok(Element::new(Self::SHAPE.name))
            }

            fn from_element(el: &Element) -> Result<Self, WireError> {
                ElementReader::new(Self::SHAPE, el)?;
                Ok(Self)
            }
        }

        impl DebugFields for $name {
            fn fmt_fields(&self, _f: &mut FieldFormatter) {}
        }
    };
}

/// A response carrying exactly one required child record.
macro_rules! record_response {
    (
        $(#[$meta:meta])*
        $name:ident { $field:ident : $item:ty as $wire:literal }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $name {
            pub $field: $item,
        }

        impl $name {
            const FIELD: FieldDescriptor = FieldDescriptor::required(
                $wire,
                Binding::Child,
                FieldKind::Record(<$item as MessageKind>::SHAPE),
            );

            #[must_use]
            pub fn new($field: $item) -> Self {
                Self { $field }
            }
        }

        impl MessageKind for $name {
            const SHAPE: &'static MessageShape = &MessageShape {
                name: stringify!($name),
                role: MessageRole::Response,
                fields: &[Self::FIELD],
            };

            fn to_element(&self) -> Result<Element, WireError> {
                let mut w = ElementWriter::new(Self::SHAPE);
                w.record(Self::FIELD, Some(&self.$field))?;
                Ok(w.finish())
            }

            fn from_element(el: &Element) -> Result<Self, WireError> {
                let r = ElementReader::new(Self::SHAPE, el)?;
                Ok(Self {
                    $field: r.req_record(Self::FIELD)?,
                })
            }
        }

        impl DebugFields for $name {
            fn fmt_fields(&self, f: &mut FieldFormatter) {
                f.record($wire, &self.$field);
            }
        }
    };
}

/// A response carrying one optional unwrapped collection.
macro_rules! list_response {
    (
        $(#[$meta:meta])*
        $name:ident { $field:ident : [$item:ty] as $wire:literal }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $name {
            pub $field: Vec<$item>,
        }

        impl $name {
            const FIELD: FieldDescriptor = FieldDescriptor::optional(
                $wire,
                Binding::Child,
                FieldKind::List(ListKind {
                    item: <$item as MessageKind>::SHAPE,
                    wrapper: None,
                    order: ListOrder::Insignificant,
                }),
            );
        }

        impl MessageKind for $name {
            const SHAPE: &'static MessageShape = &MessageShape {
                name: stringify!($name),
                role: MessageRole::Response,
                fields: &[Self::FIELD],
            };

            fn to_element(&self) -> Result<Element, WireError> {
                let mut w = ElementWriter::new(Self::SHAPE);
                w.list(Self::FIELD, &self.$field)?;
                Ok(w.finish())
            }

            fn from_element(el: &Element) -> Result<Self, WireError> {
                let r = ElementReader::new(Self::SHAPE, el)?;
                Ok(Self {
                    $field: r.list(Self::FIELD)?,
                })
            }
        }

        impl DebugFields for $name {
            fn fmt_fields(&self, f: &mut FieldFormatter) {
                f.list($wire, &self.$field);
            }
        }
    };
}
