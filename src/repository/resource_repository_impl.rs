use crate::common::*;

use crate::enums::resource_kind::*;

use crate::traits::repository_traits::resource_repository::*;

use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone)]
pub struct ResourceRepositoryImpl {
    client: Client,
    base_dir: String,
}

impl ResourceRepositoryImpl {
    pub fn new(base_dir: &str) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .user_agent(concat!("price_chart_tracking/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("[ResourceRepositoryImpl->new] Failed to build http client")?;

        Ok(ResourceRepositoryImpl {
            client,
            base_dir: base_dir.to_string(),
        })
    }

    #[doc = "http(s) 리소스 조회. 2xx 이외의 응답은 오류로 처리한다."]
    async fn fetch_remote(&self, url: &str) -> anyhow::Result<String> {
        let response: reqwest::Response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| {
                format!("[ResourceRepositoryImpl->fetch_remote] Request to {} failed", url)
            })?;

        let status: reqwest::StatusCode = response.status();

        if !status.is_success() {
            return Err(anyhow!(
                "[ResourceRepositoryImpl->fetch_remote] {} responded with {}",
                url,
                status
            ));
        }

        let body: String = response.text().await.with_context(|| {
            format!("[ResourceRepositoryImpl->fetch_remote] Failed to read body of {}", url)
        })?;

        Ok(body)
    }

    #[doc = "파일 리소스 조회. 상대 경로는 base_dir 기준으로 해석한다."]
    async fn fetch_file(&self, file_path: &str) -> anyhow::Result<String> {
        let path: PathBuf = resolve_path(&self.base_dir, file_path);

        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| {
                format!("[ResourceRepositoryImpl->fetch_file] Failed to read {:?}", path)
            })
    }
}

#[async_trait]
impl ResourceRepository for ResourceRepositoryImpl {
    async fn fetch_text(&self, resource: &str) -> anyhow::Result<String> {
        match get_resource_kind(resource) {
            ResourceKind::Remote => self.fetch_remote(resource.trim()).await,
            ResourceKind::File => self.fetch_file(resource.trim()).await,
        }
    }
}
