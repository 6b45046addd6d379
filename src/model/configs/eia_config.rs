use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
pub struct EiaConfig {
    #[serde(default)]
    pub enabled: bool,
    pub api_url: String,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default)]
    pub series: Vec<EiaSeriesConfig>,
}

#[doc = r#"
    EIA 시계열 하나의 수집 설정

    # Fields
    * `route` - API 경로 (예: `petroleum/pri/spt`)
    * `facet` - 시계열을 고르는 facet 이름. 기본값 `product`
    * `facet_value` - facet 값. 같은 product 안에 현물/선물이 섞인 경로는 `series` facet으로 하나만 고른다
    * `value_column` - 저장할 CSV의 가격 컬럼명
    * `output` - 저장할 CSV 파일명 (`resource_base_dir` 기준)
"#]
#[derive(Debug, Deserialize, Serialize, Getters, Clone, new)]
#[getset(get = "pub")]
pub struct EiaSeriesConfig {
    pub route: String,
    #[serde(default = "default_facet")]
    pub facet: String,
    #[serde(alias = "product")]
    pub facet_value: String,
    pub value_column: String,
    pub output: String,
}

fn default_facet() -> String {
    String::from("product")
}

fn default_length() -> usize {
    60
}

impl Default for EiaConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: String::from("https://api.eia.gov/v2"),
            length: default_length(),
            series: Vec::new(),
        }
    }
}
