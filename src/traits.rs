use crate::types::{CharPayload, Presence, VariantPayload};

/// Reads the opaque payload attached to a native command.
///
/// Hosts implement this over their raw variant representation. The translator
/// only decides how the answers are interpreted.
pub trait NativeVariant {
    /// The payload read as a 16-bit character code.
    fn char_code(&self) -> CharPayload;

    /// Whether the payload is there, and whether it means anything.
    fn presence(&self) -> Presence;
}

impl NativeVariant for VariantPayload {
    fn char_code(&self) -> CharPayload {
        match *self {
            VariantPayload::Empty | VariantPayload::Null => CharPayload::Absent,
            VariantPayload::Char(c) => CharPayload::Code(c),
            VariantPayload::Int(_) => CharPayload::Invalid,
        }
    }

    fn presence(&self) -> Presence {
        match self {
            VariantPayload::Empty => Presence::Absent,
            VariantPayload::Null => Presence::Ignorable,
            VariantPayload::Char(_) | VariantPayload::Int(_) => Presence::Specific,
        }
    }
}

impl<V: NativeVariant> NativeVariant for Option<V> {
    fn char_code(&self) -> CharPayload {
        self.as_ref()
            .map_or(CharPayload::Absent, NativeVariant::char_code)
    }

    fn presence(&self) -> Presence {
        self.as_ref().map_or(Presence::Absent, NativeVariant::presence)
    }
}

impl<V: NativeVariant + ?Sized> NativeVariant for &V {
    fn char_code(&self) -> CharPayload {
        (**self).char_code()
    }

    fn presence(&self) -> Presence {
        (**self).presence()
    }
}
