//! Terminal example using crossterm.
//!
//! Reads keys from the terminal, encodes each one as the editor command the
//! host would receive, then decodes that command back.
//! Run with: RUST_LOG=vim_ole=trace cargo run --example tui_crossterm

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use vim_ole::{KeyCode, KeyInput, Modifiers, Translator};

fn convert_crossterm_event(event: CKeyEvent) -> KeyInput {
    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::BackTab => {
            return KeyInput::new(KeyCode::Tab).with_mods(Modifiers::SHIFT);
        }
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Insert => KeyCode::Insert,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::F(n) => KeyCode::F(n),
        _ => KeyCode::Nop,
    };

    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }
    KeyInput::new(code).with_mods(mods)
}

fn describe(translator: &Translator, key_input: KeyInput) -> String {
    match translator.encode(&key_input) {
        Ok(native) => match translator.decode_native(&native, key_input.mods) {
            Ok(cmd) => format!(
                "{key_input:?} -> {} #{} {:?} -> {:?} ({:?})",
                native.group, native.id, native.variant, cmd.key_input, cmd.kind
            ),
            Err(err) => format!("{key_input:?} -> {} #{} -> {err}", native.group, native.id),
        },
        Err(err) => format!("{key_input:?} -> {err}"),
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let translator = Translator::new();
    let mut stdout = io::stdout();

    enable_raw_mode()?;
    write!(stdout, "Press keys to translate them. Ctrl-C quits.\r\n")?;
    let result = (|| -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }
                let line = describe(&translator, convert_crossterm_event(key));
                write!(stdout, "{line}\r\n")?;
                stdout.flush()?;
            }
        }
    })();
    disable_raw_mode()?;
    result
}
