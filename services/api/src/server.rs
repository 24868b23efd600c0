use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_form_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use form_relay::config::AppConfig;
use form_relay::error::AppError;
use form_relay::telemetry;
use form_relay::{SmtpMailer, SubmissionHandler, SystemClock};
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

    if config.mail.credentials().is_err() {
        warn!("ZEPTO_USER or ZEPTO_PASS is unset; submissions will be answered with a configuration error");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let mailer = SmtpMailer::new(config.mail.clone());
    let handler = Arc::new(SubmissionHandler::new(
        config.mail.clone(),
        mailer,
        SystemClock,
    ));

    let app = with_form_routes(handler)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        smtp_host = %config.mail.host,
        smtp_port = config.mail.port,
        "form relay ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
