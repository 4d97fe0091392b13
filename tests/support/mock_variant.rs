use vim_ole::types::{CharPayload, Presence};
use vim_ole::NativeVariant;

pub const VT_EMPTY: u16 = 0;
pub const VT_I4: u16 = 3;
pub const VT_UI2: u16 = 18;

/// A host payload as it arrives over COM: a type tag and raw bits.
///
/// A null payload pointer is modelled as `Option::<MockVariant>::None`.
#[derive(Debug, Clone, Copy)]
pub struct MockVariant {
    vt: u16,
    bits: u64,
}

impl MockVariant {
    pub fn empty() -> Self {
        Self { vt: VT_EMPTY, bits: 0 }
    }

    pub fn ui2(value: u16) -> Self {
        Self {
            vt: VT_UI2,
            bits: value as u64,
        }
    }

    pub fn i4(value: i32) -> Self {
        Self {
            vt: VT_I4,
            bits: value as u32 as u64,
        }
    }
}

impl NativeVariant for MockVariant {
    fn char_code(&self) -> CharPayload {
        match self.vt {
            VT_EMPTY => CharPayload::Absent,
            VT_UI2 => CharPayload::Code(self.bits as u16),
            _ => CharPayload::Invalid,
        }
    }

    fn presence(&self) -> Presence {
        // A non-null pointer to a VT_EMPTY VARIANT counts as a plain button press.
        match self.vt {
            VT_EMPTY => Presence::Ignorable,
            _ => Presence::Specific,
        }
    }
}
