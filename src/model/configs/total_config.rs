use crate::common::*;

use crate::model::configs::{chart_config::*, eia_config::*, system_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize chart configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub system: SystemConfig,
    #[serde(default)]
    pub chart: Vec<ChartConfig>,
    #[serde(default)]
    pub eia: EiaConfig,
}

#[doc = "system 설정 정보"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

#[doc = "차트 목록 설정 정보"]
pub fn get_chart_config_list() -> &'static [ChartConfig] {
    &TOTAL_CONFIG.chart
}

#[doc = "EIA 수집 설정 정보"]
pub fn get_eia_config_info() -> &'static EiaConfig {
    &TOTAL_CONFIG.eia
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&CHART_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str =
                    "Failed to convert the data from CHART_CONFIG_PATH into TotalConfig.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::theme_name::*;

    const SAMPLE_CONFIG: &str = r##"
        [system]
        output_dir = "output"
        resource_base_dir = "data"
        theme = "dark"
        render_theme_variants = true
        load_timeout_sec = 5
        max_retry = 2

        [[chart]]
        name = "brent_crude"
        title = "Brent Crude Oil - Monthly Spot Price ($/barrel)"
        resource = "brent_crude_monthly.csv"
        value_column = "price_per_barrel"
        line_color = "#2563eb"
        source = "U.S. Energy Information Administration"

        [[chart]]
        name = "henry_hub"
        title = "Henry Hub Natural Gas - Monthly Spot Price ($/MMBtu)"
        resource = "https://example.com/data/henry_hub_monthly.csv"
        period_column = "month"
        value_column = "price_per_mmbtu"
        currency_prefix = "US$"
        line_color = "#16a34a"
        source = "U.S. Energy Information Administration"
    "##;

    #[test]
    fn parses_charts_with_defaults() {
        let config: TotalConfig = toml::from_str(SAMPLE_CONFIG).expect("config should parse");

        assert_eq!(config.system().theme(), &ThemeName::Dark);
        assert_eq!(*config.system().width(), 1000);
        assert_eq!(config.chart().len(), 2);

        let brent: &ChartConfig = &config.chart()[0];
        assert_eq!(brent.period_column(), "period");
        assert_eq!(brent.currency_prefix(), "$");
        assert_eq!(brent.tooltip_label(), "Price");

        let gas: &ChartConfig = &config.chart()[1];
        assert_eq!(gas.period_column(), "month");
        assert_eq!(gas.currency_prefix(), "US$");

        assert!(!config.eia().enabled());
        assert_eq!(*config.eia().length(), 60);
    }

    #[test]
    fn shipped_config_selects_henry_hub_spot_series() {
        let config: TotalConfig = read_toml_from_file(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/config/chart_config.toml"
        ))
        .expect("shipped config should parse");

        let henry_hub = config
            .eia()
            .series()
            .iter()
            .find(|s| s.output() == "henry_hub_monthly.csv")
            .expect("henry hub series should be configured");

        assert_eq!(henry_hub.facet(), "series");
        assert_eq!(henry_hub.facet_value(), "RNGWHHD");
        assert_eq!(config.chart().len(), 2);
    }
}
