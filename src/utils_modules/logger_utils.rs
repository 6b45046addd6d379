use crate::common::*;

#[doc = "로그 한 줄 포맷: [시각] [레벨] [파일:라인] 메시지"]
fn custom_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("<unknown>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 설정하는 함수.

    `logs/` 디렉토리에 하루 단위로 로그 파일을 회전시키며 최근 10개만 유지한다.
    info 이상의 로그는 표준 에러로도 함께 출력한다.
    반환된 핸들이 drop 되면 파일 로깅이 멈추므로 main에서 끝까지 들고 있어야 한다.
    로거 초기화 실패는 프로그램을 계속 진행할 수 없는 상황이므로 panic 처리한다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(FileSpec::default().directory(log_directory).discriminant("chart"))
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .duplicate_to_stderr(Duplicate::Info)
                .format_for_files(custom_format)
                .format_for_stderr(custom_format)
                .start()
        })
        .unwrap_or_else(|e| {
            panic!("[set_global_logger] Logger initialization failed: {:?}", e);
        })
}
