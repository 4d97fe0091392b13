pub mod error;
pub mod ids;
pub mod key;
pub mod traits;
pub mod translator;
pub mod types;

pub use crate::error::Unrecognized;
pub use crate::ids::{Std2KCmdId, Std97CmdId};
pub use crate::key::{KeyCode, KeyInput, Modifiers};
pub use crate::traits::NativeVariant;
pub use crate::translator::{Translator, TranslatorBuilder, decode, encode};
pub use crate::types::{
    CharPayload, CommandGroup, CommandKind, EditCommand, NativeCommand, Presence, VariantPayload,
};
