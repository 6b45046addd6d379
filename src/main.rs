/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : 월별 에너지 현물가격(CSV/URL)을 읽어 테마별 SVG 라인 차트로 저장하는 프로그램

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::resource_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    chart_load_service_impl::*, chart_service_impl::*, csv_parser_service_impl::*,
    eia_service_impl::*, series_service_impl::*,
};

mod controller;
use controller::main_controller::*;

type ChartPipeline =
    ChartLoadServiceImpl<ResourceRepositoryImpl, CsvParserServiceImpl, SeriesServiceImpl>;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger();

    info!("Price chart program start!");

    let system_config = get_system_config_info();

    /* 리소스 조회용 repository */
    let resource_repository: ResourceRepositoryImpl =
        ResourceRepositoryImpl::new(system_config.resource_base_dir()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing resource_repository.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    let eia_service: EiaServiceImpl = EiaServiceImpl::new(get_eia_api_key()).unwrap_or_else(|e| {
        let err_msg: &str = "[main] An issue occurred while initializing eia_service.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    /* 의존 주입 */
    let chart_pipeline: ChartPipeline = ChartLoadServiceImpl::new(
        resource_repository,
        CsvParserServiceImpl::new(b','),
        SeriesServiceImpl::new(),
    );

    let chart_service: ChartServiceImpl =
        ChartServiceImpl::new(*system_config.width(), *system_config.height());

    let main_controller: MainController<ChartPipeline, ChartServiceImpl, EiaServiceImpl> =
        MainController::new(
            Arc::new(chart_pipeline),
            chart_service,
            eia_service,
            system_config.clone(),
            get_chart_config_list().to_vec(),
            get_eia_config_info().clone(),
        );

    match main_controller.main_task().await {
        Ok(rendered_cnt) => {
            info!("Price chart program finished ({} chart(s) rendered)", rendered_cnt);
        }
        Err(e) => {
            error!("[main] {:?}", e);
            panic!("{:?}", e)
        }
    }
}
