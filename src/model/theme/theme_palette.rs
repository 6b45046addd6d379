use crate::common::*;

use crate::enums::theme_name::*;

#[doc = "테마별 색상표. 차트 배경, 텍스트, 그리드, 캡션 색상에 사용된다."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct ThemePalette {
    bg: &'static str,
    bg_card: &'static str,
    border: &'static str,
    border_light: &'static str,
    text: &'static str,
    text_muted: &'static str,
    text_dim: &'static str,
}

pub static LIGHT_PALETTE: ThemePalette = ThemePalette {
    bg: "#f5f6f8",
    bg_card: "#ffffff",
    border: "#e2e5ea",
    border_light: "#cdd2da",
    text: "#1a1f26",
    text_muted: "#5a6674",
    text_dim: "#8895a4",
};

pub static DARK_PALETTE: ThemePalette = ThemePalette {
    bg: "#0a0e14",
    bg_card: "#111820",
    border: "#1e2a38",
    border_light: "#2a3a4e",
    text: "#e8edf3",
    text_muted: "#8899aa",
    text_dim: "#556677",
};

pub fn get_palette(theme: ThemeName) -> &'static ThemePalette {
    match theme {
        ThemeName::Light => &LIGHT_PALETTE,
        ThemeName::Dark => &DARK_PALETTE,
    }
}
