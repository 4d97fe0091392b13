//! Native command ids for the two command groups the translator recognizes.
//!
//! Only the ids that carry keyboard meaning are enumerated. Every other
//! numeric id converts to an error and is left to the host.

/// Legacy command set, `GUID_VSStandardCommandSet97`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Std97CmdId {
    Delete = 17,
    Redo = 29,
    MultiLevelRedo = 30,
    Undo = 43,
    MultiLevelUndo = 44,
    F1Help = 1104,
    SingleChar = 1111,
    Escape = 1113,
}

impl Std97CmdId {
    pub const ALL: [Std97CmdId; 8] = [
        Std97CmdId::Delete,
        Std97CmdId::Redo,
        Std97CmdId::MultiLevelRedo,
        Std97CmdId::Undo,
        Std97CmdId::MultiLevelUndo,
        Std97CmdId::F1Help,
        Std97CmdId::SingleChar,
        Std97CmdId::Escape,
    ];
}

/// Editor command set, `VSStd2K`.
///
/// `_EXT` ids extend the selection, `_EXT_COL` ids extend a box selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Std2KCmdId {
    TypeChar = 1,
    Backspace = 2,
    Return = 3,
    Tab = 4,
    BackTab = 5,
    Delete = 6,
    Left = 7,
    LeftExt = 8,
    Right = 9,
    RightExt = 10,
    Up = 11,
    UpExt = 12,
    Down = 13,
    DownExt = 14,
    // The host routes the Home/End keys through BOL/EOL, not HOME/END.
    Bol = 19,
    BolExt = 20,
    Eol = 23,
    EolExt = 24,
    PageUp = 27,
    PageUpExt = 28,
    PageDown = 29,
    PageDownExt = 30,
    ToggleOvertypeMode = 57,
    Undo = 71,
    UndoNoMove = 72,
    Redo = 73,
    RedoNoMove = 74,
    Cancel = 103,
    LeftExtCol = 124,
    RightExtCol = 125,
    UpExtCol = 126,
    DownExtCol = 127,
    BolExtCol = 131,
    EolExtCol = 132,
}

impl Std2KCmdId {
    pub const ALL: [Std2KCmdId; 34] = [
        Std2KCmdId::TypeChar,
        Std2KCmdId::Backspace,
        Std2KCmdId::Return,
        Std2KCmdId::Tab,
        Std2KCmdId::BackTab,
        Std2KCmdId::Delete,
        Std2KCmdId::Left,
        Std2KCmdId::LeftExt,
        Std2KCmdId::Right,
        Std2KCmdId::RightExt,
        Std2KCmdId::Up,
        Std2KCmdId::UpExt,
        Std2KCmdId::Down,
        Std2KCmdId::DownExt,
        Std2KCmdId::Bol,
        Std2KCmdId::BolExt,
        Std2KCmdId::Eol,
        Std2KCmdId::EolExt,
        Std2KCmdId::PageUp,
        Std2KCmdId::PageUpExt,
        Std2KCmdId::PageDown,
        Std2KCmdId::PageDownExt,
        Std2KCmdId::ToggleOvertypeMode,
        Std2KCmdId::Undo,
        Std2KCmdId::UndoNoMove,
        Std2KCmdId::Redo,
        Std2KCmdId::RedoNoMove,
        Std2KCmdId::Cancel,
        Std2KCmdId::LeftExtCol,
        Std2KCmdId::RightExtCol,
        Std2KCmdId::UpExtCol,
        Std2KCmdId::DownExtCol,
        Std2KCmdId::BolExtCol,
        Std2KCmdId::EolExtCol,
    ];
}

macro_rules! impl_id_conversions {
    ($ty:ty) => {
        impl TryFrom<u32> for $ty {
            type Error = u32;

            /// Returns the raw id back when it is not part of the enumeration.
            fn try_from(id: u32) -> Result<Self, Self::Error> {
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|known| *known as u32 == id)
                    .ok_or(id)
            }
        }

        impl From<$ty> for u32 {
            fn from(id: $ty) -> u32 {
                id as u32
            }
        }
    };
}

impl_id_conversions!(Std97CmdId);
impl_id_conversions!(Std2KCmdId);
