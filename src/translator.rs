use tracing::{debug, trace};

use crate::error::Unrecognized;
use crate::ids::{Std2KCmdId, Std97CmdId};
use crate::key::{KeyCode, KeyInput, Modifiers};
use crate::traits::NativeVariant;
use crate::types::{CharPayload, CommandGroup, CommandKind, EditCommand, NativeCommand, Presence};

type Decoded = (KeyInput, CommandKind);

/// Translates between native host commands and vim key input.
///
/// Holds configuration only, so it is `Copy` and can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    home_end_aliases: bool,
}

#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    home_end_aliases: bool,
}

impl TranslatorBuilder {
    /// Encode `Home`/`End` as `BOL`/`EOL`. Off by default, in which case those
    /// keys only exist on the decode side.
    pub fn home_end_aliases(mut self, enabled: bool) -> Self {
        self.home_end_aliases = enabled;
        self
    }

    pub fn build(self) -> Translator {
        Translator {
            home_end_aliases: self.home_end_aliases,
        }
    }
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    /// Decodes a native command and applies the modifiers the user is holding.
    ///
    /// Modifiers implied by the command (Shift for `_EXT` forms) are kept.
    pub fn decode<V>(
        &self,
        group: CommandGroup,
        id: u32,
        variant: &V,
        mods: Modifiers,
    ) -> Result<EditCommand, Unrecognized>
    where
        V: NativeVariant + ?Sized,
    {
        let (key_input, kind) = self.decode_key(group, id, variant)?;
        Ok(EditCommand {
            key_input: key_input.with_mods(mods),
            kind,
            group,
            id,
        })
    }

    pub fn decode_native(
        &self,
        command: &NativeCommand,
        mods: Modifiers,
    ) -> Result<EditCommand, Unrecognized> {
        self.decode(command.group, command.id, &command.variant, mods)
    }

    /// Decodes a native command without applying external modifiers.
    pub fn decode_key<V>(
        &self,
        group: CommandGroup,
        id: u32,
        variant: &V,
    ) -> Result<Decoded, Unrecognized>
    where
        V: NativeVariant + ?Sized,
    {
        let decoded = if group == CommandGroup::STANDARD_97 {
            Std97CmdId::try_from(id).map(|cmd| decode_std97(cmd, variant))
        } else if group == CommandGroup::STANDARD_2K {
            Std2KCmdId::try_from(id).map(|cmd| decode_std2k(cmd, variant))
        } else {
            trace!(%group, id, "unknown command group");
            return Err(Unrecognized::Group(group));
        };

        match decoded {
            Ok(Some(decoded)) => Ok(decoded),
            Ok(None) => {
                trace!(%group, id, "rejected command payload");
                Err(Unrecognized::Variant { group, id })
            }
            Err(id) => {
                trace!(%group, id, "unknown command id");
                Err(Unrecognized::Command { group, id })
            }
        }
    }

    /// Encodes a key as an editor command.
    pub fn encode(&self, key_input: &KeyInput) -> Result<NativeCommand, Unrecognized> {
        let id = match key_input.code {
            KeyCode::Enter => Std2KCmdId::Return,
            KeyCode::Esc => Std2KCmdId::Cancel,
            KeyCode::Delete => Std2KCmdId::Delete,
            KeyCode::Backspace => Std2KCmdId::Backspace,
            KeyCode::Up => Std2KCmdId::Up,
            KeyCode::Down => Std2KCmdId::Down,
            KeyCode::Left => Std2KCmdId::Left,
            KeyCode::Right => Std2KCmdId::Right,
            KeyCode::Tab if key_input.has_shift() => Std2KCmdId::BackTab,
            KeyCode::Tab => Std2KCmdId::Tab,
            KeyCode::PageUp => Std2KCmdId::PageUp,
            KeyCode::PageDown => Std2KCmdId::PageDown,
            KeyCode::Insert => Std2KCmdId::ToggleOvertypeMode,
            KeyCode::Home if self.home_end_aliases => Std2KCmdId::Bol,
            KeyCode::End if self.home_end_aliases => Std2KCmdId::Eol,
            _ => return encode_char(key_input),
        };
        Ok(NativeCommand::std2k(id))
    }
}

/// Decodes with the default [`Translator`].
pub fn decode<V>(
    group: CommandGroup,
    id: u32,
    variant: &V,
    mods: Modifiers,
) -> Result<EditCommand, Unrecognized>
where
    V: NativeVariant + ?Sized,
{
    Translator::new().decode(group, id, variant, mods)
}

/// Encodes with the default [`Translator`].
pub fn encode(key_input: &KeyInput) -> Result<NativeCommand, Unrecognized> {
    Translator::new().encode(key_input)
}

fn encode_char(key_input: &KeyInput) -> Result<NativeCommand, Unrecognized> {
    // TYPECHAR carries a single UTF-16 code unit, so astral characters can't be sent.
    let code = key_input
        .raw_char()
        .and_then(|c| u16::try_from(u32::from(c)).ok());
    match code {
        Some(code) => Ok(NativeCommand::type_char(code)),
        None => {
            trace!(?key_input, "no native command for key");
            Err(Unrecognized::Key(*key_input))
        }
    }
}

fn user_input(code: KeyCode) -> Decoded {
    (KeyInput::new(code), CommandKind::UserInput)
}

fn extended(code: KeyCode) -> Decoded {
    (
        KeyInput::new(code).with_mods(Modifiers::SHIFT),
        CommandKind::VisualStudioCommand,
    )
}

// The decoders below return `None` when the payload doesn't fit the command.

fn typed_char<V: NativeVariant + ?Sized>(variant: &V) -> Option<Decoded> {
    let c = match variant.char_code() {
        CharPayload::Absent => '\0',
        // Lone surrogates are not chars.
        CharPayload::Code(code) => char::from_u32(u32::from(code))?,
        CharPayload::Invalid => return None,
    };
    Some((KeyInput::from_char(c), CommandKind::UserInput))
}

fn history_step<V: NativeVariant + ?Sized>(variant: &V, kind: CommandKind) -> Option<Decoded> {
    match variant.presence() {
        Presence::Absent | Presence::Ignorable => Some((KeyInput::DEFAULT, kind)),
        Presence::Specific => {
            // A jump to a picked history entry can't be replayed as single steps.
            debug!(?kind, "leaving targeted history jump to the host");
            None
        }
    }
}

fn decode_std97<V: NativeVariant + ?Sized>(cmd: Std97CmdId, variant: &V) -> Option<Decoded> {
    match cmd {
        Std97CmdId::SingleChar => typed_char(variant),
        Std97CmdId::Escape => Some(user_input(KeyCode::Esc)),
        Std97CmdId::Delete => Some(user_input(KeyCode::Delete)),
        Std97CmdId::F1Help => Some(user_input(KeyCode::F(1))),
        Std97CmdId::Undo => Some((KeyInput::DEFAULT, CommandKind::Undo)),
        Std97CmdId::Redo => Some((KeyInput::DEFAULT, CommandKind::Redo)),
        Std97CmdId::MultiLevelUndo => history_step(variant, CommandKind::Undo),
        Std97CmdId::MultiLevelRedo => history_step(variant, CommandKind::Redo),
    }
}

fn decode_std2k<V: NativeVariant + ?Sized>(cmd: Std2KCmdId, variant: &V) -> Option<Decoded> {
    use Std2KCmdId as Id;

    let decoded = match cmd {
        Id::TypeChar => return typed_char(variant),
        Id::Return => user_input(KeyCode::Enter),
        Id::Cancel => user_input(KeyCode::Esc),
        Id::Delete => user_input(KeyCode::Delete),
        Id::Backspace => user_input(KeyCode::Backspace),
        Id::Tab => user_input(KeyCode::Tab),
        Id::BackTab => (
            KeyInput::new(KeyCode::Tab).with_mods(Modifiers::SHIFT),
            CommandKind::UserInput,
        ),
        Id::Left => user_input(KeyCode::Left),
        Id::LeftExt | Id::LeftExtCol => extended(KeyCode::Left),
        Id::Right => user_input(KeyCode::Right),
        Id::RightExt | Id::RightExtCol => extended(KeyCode::Right),
        Id::Up => user_input(KeyCode::Up),
        Id::UpExt | Id::UpExtCol => extended(KeyCode::Up),
        Id::Down => user_input(KeyCode::Down),
        Id::DownExt | Id::DownExtCol => extended(KeyCode::Down),
        Id::PageUp => user_input(KeyCode::PageUp),
        Id::PageUpExt => extended(KeyCode::PageUp),
        Id::PageDown => user_input(KeyCode::PageDown),
        Id::PageDownExt => extended(KeyCode::PageDown),
        Id::Bol => user_input(KeyCode::Home),
        Id::BolExt | Id::BolExtCol => extended(KeyCode::Home),
        Id::Eol => user_input(KeyCode::End),
        Id::EolExt | Id::EolExtCol => extended(KeyCode::End),
        Id::Undo | Id::UndoNoMove => (KeyInput::DEFAULT, CommandKind::Undo),
        Id::Redo | Id::RedoNoMove => (KeyInput::DEFAULT, CommandKind::Redo),
        Id::ToggleOvertypeMode => user_input(KeyCode::Insert),
    };
    Some(decoded)
}
