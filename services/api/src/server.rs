use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use onboarding_relay::config::AppConfig;
use onboarding_relay::error::AppError;
use onboarding_relay::evaluation::AlloyClient;
use onboarding_relay::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if config.alloy.token.is_none() {
        warn!("ALLOY_WORKFLOW_TOKEN is not set; evaluations will be sent unauthenticated");
    } else if config.alloy.secret.is_none() {
        warn!("ALLOY_WORKFLOW_SECRET is not set; evaluations will use an empty password");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let upstream = config.alloy.evaluation_url.clone();
    let client = Arc::new(AlloyClient::new(config.alloy.clone())?);

    let app = with_operational_routes(client)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, %upstream, "onboarding relay ready");

    axum::serve(listener, app).await?;
    Ok(())
}
