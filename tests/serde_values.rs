#![cfg(feature = "serde")]

use vim_ole::{CommandGroup, KeyCode, KeyInput, Modifiers, Std2KCmdId, VariantPayload};

#[test]
fn key_input_serializes_modifiers_as_flags() {
    let ki = KeyInput::new(KeyCode::Left).with_mods(Modifiers::SHIFT | Modifiers::CTRL);
    let json = serde_json::to_string(&ki).unwrap();
    let back: KeyInput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ki);
}

#[test]
fn decoded_command_can_be_logged_and_replayed() {
    let cmd = vim_ole::decode(
        CommandGroup::STANDARD_2K,
        Std2KCmdId::TypeChar.into(),
        &VariantPayload::Char('j' as u16),
        Modifiers::empty(),
    )
    .unwrap();
    let json = serde_json::to_value(cmd).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["kind"], "UserInput");
    assert_eq!(json["group"], "1496a755-94de-11d0-8c3f-00c04fc2aae2");

    let native = vim_ole::encode(&cmd.key_input).unwrap();
    let json = serde_json::to_string(&native).unwrap();
    let replayed: vim_ole::NativeCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(replayed, native);
}
