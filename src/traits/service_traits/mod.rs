pub mod chart_load_service;
pub mod chart_service;
pub mod eia_service;
pub mod parser_service;
pub mod series_service;
