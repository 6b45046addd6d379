use crate::common::*;

#[doc = r#"
    EIA v2 API 응답(`response.data[]`)의 한 행

    `value`는 문자열 또는 숫자로 내려오므로 `Value`로 받은 뒤 문자열로 변환한다.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct EiaDataRow {
    pub period: String,
    #[serde(default)]
    pub value: Value,
    #[serde(rename = "product-name", default)]
    pub product_name: String,
}

impl EiaDataRow {
    pub fn value_text(&self) -> Option<String> {
        match &self.value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct EiaResponseBody {
    #[serde(default)]
    pub data: Vec<EiaDataRow>,
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct EiaResponse {
    pub response: EiaResponseBody,
}
