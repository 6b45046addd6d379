pub mod chart_config;
pub mod eia_config;
pub mod system_config;
pub mod total_config;
