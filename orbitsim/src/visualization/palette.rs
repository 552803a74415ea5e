//! Marker colors from configuration identifiers
//!
//! Accepts plain names ("blue"), matplotlib tableau names ("tab:orange")
//! and hex strings ("#1f77b4" or "1f77b4")

use bevy::color::{Color, Srgba};

/// Fallback for identifiers that match nothing
pub const FALLBACK: Color = Color::WHITE;

pub fn parse_color(name: &str) -> Color {
    let key = name.trim().to_ascii_lowercase();

    if let Some(c) = named_color(&key) {
        return c;
    }

    match Srgba::hex(&key) {
        Ok(srgba) => Color::Srgba(srgba),
        Err(_) => {
            eprintln!("palette: unknown color {name:?}, using white");
            FALLBACK
        }
    }
}

fn named_color(key: &str) -> Option<Color> {
    let c = match key {
        "white" => Color::srgb_u8(255, 255, 255),
        "black" => Color::srgb_u8(0, 0, 0),
        "red" => Color::srgb_u8(255, 0, 0),
        "green" => Color::srgb_u8(0, 128, 0),
        "blue" => Color::srgb_u8(0, 0, 255),
        "yellow" => Color::srgb_u8(255, 255, 0),
        "orange" => Color::srgb_u8(255, 165, 0),
        "purple" => Color::srgb_u8(128, 0, 128),
        "pink" => Color::srgb_u8(255, 192, 203),
        "brown" => Color::srgb_u8(165, 42, 42),
        "cyan" => Color::srgb_u8(0, 255, 255),
        "magenta" => Color::srgb_u8(255, 0, 255),
        "gray" | "grey" => Color::srgb_u8(128, 128, 128),

        // matplotlib tableau palette
        "tab:blue" => Color::srgb_u8(0x1f, 0x77, 0xb4),
        "tab:orange" => Color::srgb_u8(0xff, 0x7f, 0x0e),
        "tab:green" => Color::srgb_u8(0x2c, 0xa0, 0x2c),
        "tab:red" => Color::srgb_u8(0xd6, 0x27, 0x28),
        "tab:purple" => Color::srgb_u8(0x94, 0x67, 0xbd),
        "tab:brown" => Color::srgb_u8(0x8c, 0x56, 0x4b),
        "tab:pink" => Color::srgb_u8(0xe3, 0x77, 0xc2),
        "tab:gray" | "tab:grey" => Color::srgb_u8(0x7f, 0x7f, 0x7f),
        "tab:olive" => Color::srgb_u8(0xbc, 0xbd, 0x22),
        "tab:cyan" => Color::srgb_u8(0x17, 0xbe, 0xcf),
        _ => return None,
    };
    Some(c)
}
