use thiserror::Error;

use crate::key::KeyInput;
use crate::types::CommandGroup;

/// A command or key the translator has no mapping for.
///
/// This is an expected outcome. Callers should let the host handle the
/// command natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unrecognized {
    /// The command group is not one of the two known sets.
    #[error("unknown command group {0}")]
    Group(CommandGroup),

    /// The id is not enumerated within its group.
    #[error("unknown command {id} in group {group}")]
    Command { group: CommandGroup, id: u32 },

    /// The payload does not fit the command's contract.
    #[error("payload not accepted for command {id} in group {group}")]
    Variant { group: CommandGroup, id: u32 },

    /// No native command can carry this key.
    #[error("no native command for key {0:?}")]
    Key(KeyInput),
}
