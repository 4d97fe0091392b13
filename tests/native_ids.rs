use vim_ole::{
    CommandGroup, CommandKind, KeyCode, KeyInput, Modifiers, Std2KCmdId, Std97CmdId,
    Unrecognized, VariantPayload, decode,
};

#[test]
fn editor_ids_match_host_values() {
    let cases = [
        (Std2KCmdId::TypeChar, 1),
        (Std2KCmdId::Backspace, 2),
        (Std2KCmdId::Return, 3),
        (Std2KCmdId::Tab, 4),
        (Std2KCmdId::BackTab, 5),
        (Std2KCmdId::Delete, 6),
        (Std2KCmdId::Left, 7),
        (Std2KCmdId::LeftExt, 8),
        (Std2KCmdId::Right, 9),
        (Std2KCmdId::RightExt, 10),
        (Std2KCmdId::Up, 11),
        (Std2KCmdId::UpExt, 12),
        (Std2KCmdId::Down, 13),
        (Std2KCmdId::DownExt, 14),
        (Std2KCmdId::Bol, 19),
        (Std2KCmdId::BolExt, 20),
        (Std2KCmdId::Eol, 23),
        (Std2KCmdId::EolExt, 24),
        (Std2KCmdId::PageUp, 27),
        (Std2KCmdId::PageUpExt, 28),
        (Std2KCmdId::PageDown, 29),
        (Std2KCmdId::PageDownExt, 30),
        (Std2KCmdId::ToggleOvertypeMode, 57),
        (Std2KCmdId::Undo, 71),
        (Std2KCmdId::UndoNoMove, 72),
        (Std2KCmdId::Redo, 73),
        (Std2KCmdId::RedoNoMove, 74),
        (Std2KCmdId::Cancel, 103),
        (Std2KCmdId::LeftExtCol, 124),
        (Std2KCmdId::RightExtCol, 125),
        (Std2KCmdId::UpExtCol, 126),
        (Std2KCmdId::DownExtCol, 127),
        (Std2KCmdId::BolExtCol, 131),
        (Std2KCmdId::EolExtCol, 132),
    ];
    assert_eq!(cases.len(), Std2KCmdId::ALL.len());
    for (id, value) in cases {
        assert_eq!(u32::from(id), value, "{id:?}");
        assert_eq!(Std2KCmdId::try_from(value), Ok(id));
    }
}

#[test]
fn legacy_ids_match_host_values() {
    let cases = [
        (Std97CmdId::Delete, 17),
        (Std97CmdId::Redo, 29),
        (Std97CmdId::MultiLevelRedo, 30),
        (Std97CmdId::Undo, 43),
        (Std97CmdId::MultiLevelUndo, 44),
        (Std97CmdId::F1Help, 1104),
        (Std97CmdId::SingleChar, 1111),
        (Std97CmdId::Escape, 1113),
    ];
    assert_eq!(cases.len(), Std97CmdId::ALL.len());
    for (id, value) in cases {
        assert_eq!(u32::from(id), value, "{id:?}");
        assert_eq!(Std97CmdId::try_from(value), Ok(id));
    }
}

#[test]
fn box_select_line_ends_decode_by_literal_id() {
    let group = CommandGroup::STANDARD_2K;
    let shifted = |code| KeyInput::new(code).with_mods(Modifiers::SHIFT);

    let cmd = decode(group, 131, &VariantPayload::Empty, Modifiers::empty()).unwrap();
    assert_eq!(cmd.key_input, shifted(KeyCode::Home));
    assert_eq!(cmd.kind, CommandKind::VisualStudioCommand);

    let cmd = decode(group, 132, &VariantPayload::Empty, Modifiers::empty()).unwrap();
    assert_eq!(cmd.key_input, shifted(KeyCode::End));
    assert_eq!(cmd.kind, CommandKind::VisualStudioCommand);
}

#[test]
fn neighbouring_editor_ids_are_unknown() {
    let group = CommandGroup::STANDARD_2K;
    // 129/130 are incremental search, not box selection.
    for id in [128, 129, 130, 133] {
        assert_eq!(
            decode(group, id, &VariantPayload::Empty, Modifiers::empty()),
            Err(Unrecognized::Command { group, id })
        );
    }
}
