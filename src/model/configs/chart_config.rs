use crate::common::*;

#[doc = r#"
    차트 한 개에 대한 설정 정보.

    원래 유가/가스 가격 차트가 각각 따로 구현되어 있던 것을 하나의 설정 구조체로 일반화했다.
    리소스 경로, 컬럼명, 통화 접두어, 선 색상, 출처 문구만 바꿔서 같은 파이프라인을 재사용한다.

    # Fields
    * `name` - 출력 파일명에 쓰이는 차트 식별자
    * `title` - 차트 상단 제목
    * `resource` - CSV 리소스 (파일 경로 또는 http(s) URL)
    * `period_column` - 기간(`YYYY-MM`) 컬럼명
    * `value_column` - 가격 컬럼명 (예: `price_per_barrel`)
    * `currency_prefix` - Y축/툴팁 통화 접두어
    * `tooltip_label` - 툴팁 라벨
    * `line_color` - 선 색상 (`#rrggbb`)
    * `source` - 캡션에 표시할 데이터 제공처
"#]
#[derive(Debug, Deserialize, Serialize, Getters, Clone, new)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub name: String,
    pub title: String,
    pub resource: String,
    #[serde(default = "default_period_column")]
    pub period_column: String,
    pub value_column: String,
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
    #[serde(default = "default_tooltip_label")]
    pub tooltip_label: String,
    pub line_color: String,
    pub source: String,
}

fn default_period_column() -> String {
    String::from("period")
}

fn default_currency_prefix() -> String {
    String::from("$")
}

fn default_tooltip_label() -> String {
    String::from("Price")
}

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ColumnMapping {
    pub period_column: String,
    pub value_column: String,
}

impl ChartConfig {
    pub fn column_mapping(&self) -> ColumnMapping {
        ColumnMapping::new(self.period_column.clone(), self.value_column.clone())
    }
}
