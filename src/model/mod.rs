pub mod configs;
pub mod series;
pub mod theme;
