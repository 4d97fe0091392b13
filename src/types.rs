use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::Std2KCmdId;
use crate::key::KeyInput;

/// The namespace a numeric command id belongs to.
///
/// The host identifies command groups by GUID. Only [`CommandGroup::STANDARD_97`]
/// and [`CommandGroup::STANDARD_2K`] are understood by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CommandGroup(pub Uuid);

impl CommandGroup {
    /// `GUID_VSStandardCommandSet97`, the legacy command set.
    pub const STANDARD_97: CommandGroup =
        CommandGroup(Uuid::from_u128(0x5efc7975_14bc_11cf_9b2b_00aa00573819));

    /// `VSStd2K`, the editor command set.
    pub const STANDARD_2K: CommandGroup =
        CommandGroup(Uuid::from_u128(0x1496a755_94de_11d0_8c3f_00c04fc2aae2));
}

impl From<Uuid> for CommandGroup {
    fn from(guid: Uuid) -> Self {
        Self(guid)
    }
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.hyphenated())
    }
}

/// How a decoded command should be treated by the vim engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommandKind {
    /// Process the key as if the user typed it.
    UserInput,
    /// The host already performed a gesture (extend selection) that must not be
    /// re-derived from the plain key.
    VisualStudioCommand,
    /// Undo request with no keystroke behind it.
    Undo,
    /// Redo request with no keystroke behind it.
    Redo,
}

/// A native command decoded into vim terms.
///
/// Keeps the originating group and id so the command can be handed back to
/// the host unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditCommand {
    pub key_input: KeyInput,
    pub kind: CommandKind,
    pub group: CommandGroup,
    pub id: u32,
}

impl EditCommand {
    pub fn is_user_input(&self) -> bool {
        self.kind == CommandKind::UserInput
    }

    pub fn is_undo(&self) -> bool {
        self.kind == CommandKind::Undo
    }

    pub fn is_redo(&self) -> bool {
        self.kind == CommandKind::Redo
    }
}

/// Data attached to a native command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VariantPayload {
    /// No payload was passed.
    #[default]
    Empty,
    /// A payload was passed but holds no value.
    Null,
    /// A UTF-16 code unit.
    Char(u16),
    /// An integer, e.g. the history depth picked from the undo drop-down.
    Int(i32),
}

/// A command in the host's native representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NativeCommand {
    pub group: CommandGroup,
    pub id: u32,
    pub variant: VariantPayload,
}

impl NativeCommand {
    /// An editor command without payload.
    pub fn std2k(id: Std2KCmdId) -> Self {
        Self {
            group: CommandGroup::STANDARD_2K,
            id: id.into(),
            variant: VariantPayload::Empty,
        }
    }

    /// `TYPECHAR` carrying a single UTF-16 code unit.
    pub fn type_char(code: u16) -> Self {
        Self {
            group: CommandGroup::STANDARD_2K,
            id: Std2KCmdId::TypeChar.into(),
            variant: VariantPayload::Char(code),
        }
    }
}

/// What a payload says when read as a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharPayload {
    /// There is no payload. Character commands decode this to `'\0'`.
    Absent,
    Code(u16),
    /// The payload exists but is not a character.
    Invalid,
}

/// What a payload says when only its presence matters.
///
/// Multi-level undo/redo passes nothing for a plain button press and a value
/// when the user picked an entry from the history drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Absent,
    /// Present but carrying no value; treated like [`Presence::Absent`].
    Ignorable,
    /// Present and pointing at something specific.
    Specific,
}
