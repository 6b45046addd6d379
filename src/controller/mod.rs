pub mod chart_component;
pub mod main_controller;
