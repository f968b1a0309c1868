use std::net::SocketAddr;

use retrospective_server::config::{establish_connection, AppConfig};
use retrospective_server::domain::health::init_start_time;
use retrospective_server::shutdown::shutdown_signal;
use retrospective_server::utils::logging::init_logging;
use retrospective_server::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 설정 및 로깅 초기화
    let config = AppConfig::from_env()?;
    let _log_guard = init_logging(&config.log_dir);
    init_start_time();

    // 3. 데이터베이스 연결
    let db = establish_connection(&config).await?;

    let port = config.server_port;
    let state = AppState { db, config };

    // 4. 서버 실행
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
