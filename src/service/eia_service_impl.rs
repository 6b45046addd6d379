use crate::common::*;

use crate::dto::eia_data_row::*;
use crate::model::configs::eia_config::*;
use crate::traits::service_traits::eia_service::*;
use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone)]
pub struct EiaServiceImpl {
    client: Client,
    api_key: Option<String>,
}

impl EiaServiceImpl {
    pub fn new(api_key: Option<String>) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("[EiaServiceImpl->new] Failed to build http client")?;

        Ok(EiaServiceImpl { client, api_key })
    }

    fn build_url(api_url: &str, route: &str) -> String {
        format!(
            "{}/{}/data/",
            api_url.trim_end_matches('/'),
            route.trim_matches('/')
        )
    }

    #[doc = r#"
        월별 가격을 최신순으로 `length`개 요청하는 쿼리 파라미터.

        시계열은 설정된 facet(`facets[<facet>][]=<facet_value>`) 하나로 고른다.
    "#]
    fn build_query(
        api_key: &str,
        series_config: &EiaSeriesConfig,
        length: usize,
    ) -> Vec<(String, String)> {
        vec![
            ("api_key".to_string(), api_key.to_string()),
            ("frequency".to_string(), "monthly".to_string()),
            ("data[0]".to_string(), "value".to_string()),
            (
                format!("facets[{}][]", series_config.facet()),
                series_config.facet_value().to_string(),
            ),
            ("sort[0][column]".to_string(), "period".to_string()),
            ("sort[0][direction]".to_string(), "desc".to_string()),
            ("length".to_string(), length.to_string()),
        ]
    }

    #[doc = r#"
        EIA 응답 행을 `period,<value_column>,product` 형식의 CSV 문자열로 변환한다.

        값이 없는 행도 그대로 쓰며(빈 값), 차트 적재 시 숫자 검증에서 걸러진다.
    "#]
    pub fn convert_rows_to_csv(
        rows: &[EiaDataRow],
        value_column: &str,
    ) -> anyhow::Result<String> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        writer.write_record(["period", value_column, "product"])?;

        for row in rows {
            let value: String = row.value_text().unwrap_or_default();
            writer.write_record([
                row.period().as_str(),
                value.as_str(),
                row.product_name().as_str(),
            ])?;
        }

        let bytes: Vec<u8> = writer
            .into_inner()
            .map_err(|e| anyhow!("[EiaServiceImpl->convert_rows_to_csv] {:?}", e))?;

        Ok(String::from_utf8(bytes)?)
    }
}

#[async_trait]
impl EiaService for EiaServiceImpl {
    async fn pull_series(
        &self,
        eia_config: &EiaConfig,
        series_config: &EiaSeriesConfig,
        output_path: &Path,
    ) -> anyhow::Result<usize> {
        let api_key: &str = self.api_key.as_deref().ok_or_else(|| {
            anyhow!("[EiaServiceImpl->pull_series] 'EIA_API_KEY' must be set to pull EIA data")
        })?;

        let url: String = Self::build_url(eia_config.api_url(), series_config.route());
        let query: Vec<(String, String)> =
            Self::build_query(api_key, series_config, *eia_config.length());

        let response: reqwest::Response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .with_context(|| {
                format!("[EiaServiceImpl->pull_series] Request to {} failed", url)
            })?;

        let status: reqwest::StatusCode = response.status();

        if !status.is_success() {
            return Err(anyhow!(
                "[EiaServiceImpl->pull_series] EIA responded with {} for {}={}",
                status,
                series_config.facet(),
                series_config.facet_value()
            ));
        }

        let body: EiaResponse = response
            .json::<EiaResponse>()
            .await
            .context("[EiaServiceImpl->pull_series] Failed to decode EIA response")?;

        let rows: &[EiaDataRow] = body.response().data();
        let csv_text: String = Self::convert_rows_to_csv(rows, series_config.value_column())?;

        write_text_file(output_path, &csv_text).await?;

        info!(
            "EIA {}={} saved to {:?} ({} rows)",
            series_config.facet(),
            series_config.facet_value(),
            output_path,
            rows.len()
        );

        Ok(rows.len())
    }
}
