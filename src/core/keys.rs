//! Raw terminal input decoding.
//!
//! In raw mode the terminal delivers keystrokes as an untyped byte stream.
//! [`parse_keys`] splits one chunk of that stream into key tokens and
//! [`Key::from_bytes`] classifies a token into something the session can act on.
//!
//! Token grammar:
//! - `ESC [`, `ESC O` or `ESC N` opens a control sequence that runs up to and
//!   including the first `A-Z`, `a-z` or `~` byte.
//! - `ESC` followed by any other byte is a two byte meta combination (Alt+key).
//! - A C0 (`0x00-0x1F`) or C1 (`0x80-0x9F`) control byte is a token on its own.
//! - Anything else is one UTF-8 encoded character.
//!
//! Every call is self-contained: a token cut off by the end of the chunk is
//! flushed as-is, and concatenating the tokens always yields the input bytes.

pub const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;
const BACKSPACE: u8 = 0x08;
const CTRL_A: u8 = 0x01;
const CTRL_C: u8 = 0x03;
const CTRL_E: u8 = 0x05;
const CTRL_K: u8 = 0x0b;
const CTRL_W: u8 = 0x17;
const ENTER: u8 = 0x0d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// Saw ESC, waiting for the byte that decides the sequence kind
    EscapeSymbol,
    /// Inside `ESC [ ...`, waiting for the final byte
    Parameters,
    /// Inside a multi-byte UTF-8 character of the given total length
    Utf8 { expected: usize },
}

/// Split a raw input chunk into key tokens.
pub fn parse_keys(data: &[u8]) -> Vec<Vec<u8>> {
    let mut keys = Vec::new();
    let mut buffer = Vec::new();
    let mut pending: Option<Pending> = None;

    for &byte in data {
        pending = match pending {
            None => start_token(byte, &mut buffer, &mut keys),
            Some(Pending::EscapeSymbol) => {
                buffer.push(byte);
                if matches!(byte, b'[' | b'O' | b'N') {
                    Some(Pending::Parameters)
                } else {
                    keys.push(std::mem::take(&mut buffer));
                    None
                }
            }
            Some(Pending::Parameters) => {
                buffer.push(byte);
                if is_sequence_terminator(byte) {
                    keys.push(std::mem::take(&mut buffer));
                    None
                } else {
                    Some(Pending::Parameters)
                }
            }
            Some(Pending::Utf8 { expected }) => {
                if is_utf8_continuation(byte) {
                    buffer.push(byte);
                    if buffer.len() == expected {
                        keys.push(std::mem::take(&mut buffer));
                        None
                    } else {
                        pending
                    }
                } else {
                    // Malformed character, keep its bytes and start over
                    keys.push(std::mem::take(&mut buffer));
                    start_token(byte, &mut buffer, &mut keys)
                }
            }
        };
    }

    if !buffer.is_empty() {
        keys.push(buffer);
    }

    keys
}

fn start_token(byte: u8, buffer: &mut Vec<u8>, keys: &mut Vec<Vec<u8>>) -> Option<Pending> {
    buffer.push(byte);

    if byte == ESC {
        return Some(Pending::EscapeSymbol);
    }

    if is_control_byte(byte) {
        keys.push(std::mem::take(buffer));
        return None;
    }

    match utf8_sequence_len(byte) {
        1 => {
            keys.push(std::mem::take(buffer));
            None
        }
        expected => Some(Pending::Utf8 { expected }),
    }
}

fn is_sequence_terminator(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'~'
}

fn is_control_byte(byte: u8) -> bool {
    byte <= 0x1f || (0x80..=0x9f).contains(&byte)
}

fn is_utf8_continuation(byte: u8) -> bool {
    (0x80..=0xbf).contains(&byte)
}

/// Total encoded length announced by a leading byte. Invalid leading bytes
/// count as complete one byte tokens.
fn utf8_sequence_len(byte: u8) -> usize {
    match byte {
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 1,
    }
}

/// Escape sequences, control bytes and DEL are handled as commands;
/// everything else is text typed into the search bar.
pub fn is_special_key(key: &[u8]) -> bool {
    match key {
        [] => false,
        [first, ..] if *first == ESC => true,
        [byte] => is_control_byte(*byte) || *byte == DEL,
        _ => false,
    }
}

/// A classified key token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    CtrlC,
    Enter,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    WordLeft,
    WordRight,
    Backspace,
    ForwardDelete,
    DeleteWordBackward,
    ClearQuery,
    KillToEnd,
    /// Alt+digit, carrying the digit value
    QuickSelect(usize),
    Text(String),
    /// A special key we do not handle, or bytes that are not valid UTF-8
    Unknown(Vec<u8>),
}

impl Key {
    pub fn from_bytes(bytes: &[u8]) -> Key {
        if !is_special_key(bytes) {
            return match std::str::from_utf8(bytes) {
                Ok(text) if !text.is_empty() => Key::Text(text.to_string()),
                _ => Key::Unknown(bytes.to_vec()),
            };
        }

        match bytes {
            [CTRL_C] => Key::CtrlC,
            [ENTER] => Key::Enter,
            [DEL] | [BACKSPACE] => Key::Backspace,
            [CTRL_A] | b"\x1bOH" | b"\x1b[H" => Key::Home,
            [CTRL_E] | b"\x1bOF" | b"\x1b[F" => Key::End,
            [CTRL_K] => Key::KillToEnd,
            [CTRL_W] => Key::ClearQuery,
            b"\x1b[A" => Key::Up,
            b"\x1b[B" => Key::Down,
            b"\x1b[C" => Key::Right,
            b"\x1b[D" => Key::Left,
            b"\x1b[3~" => Key::ForwardDelete,
            b"\x1bb" => Key::WordLeft,
            b"\x1bf" => Key::WordRight,
            [ESC, DEL] => Key::DeleteWordBackward,
            // 0x30..0x39: the low nibble is the digit
            [ESC, digit @ b'0'..=b'9'] => Key::QuickSelect((digit & 0x0f) as usize),
            _ => Key::Unknown(bytes.to_vec()),
        }
    }
}

/// Decode a chunk straight into classified keys
pub fn decode(data: &[u8]) -> Vec<Key> {
    parse_keys(data)
        .iter()
        .map(|token| Key::from_bytes(token))
        .collect()
}
