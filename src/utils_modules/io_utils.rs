use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 적절한 오류 반환

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    텍스트 파일을 비동기로 저장하는 함수. 상위 디렉토리가 없으면 생성한다.

    # Arguments
    * `output_path` - 저장할 파일 경로
    * `content` - 파일 내용
"#]
pub async fn write_text_file(output_path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("[write_text_file] Failed to create directory {:?}", parent)
            })?;
        }
    }

    tokio::fs::write(output_path, content)
        .await
        .with_context(|| format!("[write_text_file] Failed to write {:?}", output_path))?;

    Ok(())
}

#[doc = "상대 경로이면 base_dir 기준으로 붙여주고, 절대 경로이면 그대로 반환한다."]
pub fn resolve_path(base_dir: &str, file_path: &str) -> PathBuf {
    let path: &Path = Path::new(file_path);

    if path.is_absolute() || base_dir.is_empty() {
        path.to_path_buf()
    } else {
        Path::new(base_dir).join(path)
    }
}
