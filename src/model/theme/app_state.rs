use crate::common::*;

use crate::enums::{theme_action::*, theme_name::*};
use crate::model::theme::theme_palette::*;

#[doc = r#"
    애플리케이션 상태. 현재는 테마 하나만 가진다.

    전역 가변 변수 대신 값으로 들고 다니며, 상태 변경은 `reduce()` 하나로만 한다.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, new)]
#[getset(get = "pub")]
pub struct AppState {
    theme: ThemeName,
}

impl AppState {
    pub fn palette(&self) -> &'static ThemePalette {
        get_palette(self.theme)
    }
}

#[doc = "상태와 액션을 받아 새 상태를 돌려주는 reducer"]
pub fn reduce(state: &AppState, action: ThemeAction) -> AppState {
    match action {
        ThemeAction::Toggle => AppState::new(state.theme.toggled()),
        ThemeAction::Set(theme) => AppState::new(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_light() {
        let state: AppState = AppState::default();
        assert_eq!(state.theme(), &ThemeName::Light);
        assert_eq!(state.palette(), &LIGHT_PALETTE);
    }

    #[test]
    fn toggle_flips_between_light_and_dark() {
        let light: AppState = AppState::default();
        let dark: AppState = reduce(&light, ThemeAction::Toggle);
        assert_eq!(dark.theme(), &ThemeName::Dark);
        assert_eq!(dark.palette().bg(), &"#0a0e14");

        let back: AppState = reduce(&dark, ThemeAction::Toggle);
        assert_eq!(back, light);
    }

    #[test]
    fn set_is_idempotent() {
        let state: AppState = AppState::default();
        let once: AppState = reduce(&state, ThemeAction::Set(ThemeName::Dark));
        let twice: AppState = reduce(&once, ThemeAction::Set(ThemeName::Dark));
        assert_eq!(once, twice);
        /* the input state is untouched */
        assert_eq!(state.theme(), &ThemeName::Light);
    }
}
