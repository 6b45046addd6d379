pub mod chart_load_service_impl;
pub mod chart_service_impl;
pub mod csv_parser_service_impl;
pub mod eia_service_impl;
pub mod series_service_impl;
