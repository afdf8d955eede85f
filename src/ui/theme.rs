use ratatui::style::Color;

pub const TOMATO: Color = Color::Rgb(0xff, 0x61, 0x55);
pub const DARK_SLATE: Color = Color::Rgb(0x24, 0x27, 0x42);
pub const CHARCOAL: Color = Color::Rgb(0x36, 0x38, 0x4e);
pub const GREY: Color = Color::Rgb(0x92, 0x94, 0xa0);
pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const ERROR_TINT: Color = Color::Rgb(0xff, 0xe8, 0xe6);
pub const ERROR_PLACEHOLDER: Color = Color::Rgb(0xfc, 0xa5, 0xa5);
pub const BUTTON_ACTIVE: Color = Color::Rgb(0xff, 0x6a, 0x3a);
pub const ILLUSTRATION: Color = Color::Rgb(0xff, 0x52, 0x7b);
pub const SCREEN_BG: Color = CHARCOAL;
