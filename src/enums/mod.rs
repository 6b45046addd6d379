pub mod chart_state;
pub mod resource_kind;
pub mod theme_action;
pub mod theme_name;
