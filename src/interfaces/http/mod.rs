use actix_web::http::header::{self, HeaderValue};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use tracing::error;

use crate::application::{DailySummaryUseCase, SummaryFeedUseCase};
use crate::domain::error::GatewayError;
use crate::infrastructure::config::{GatewayConfig, BIND_HOST, PORT};

pub const SUMMARY_ROUTE: &str = "/api_endpoints_with_summary.csv";
pub const DAILY_SUMMARY_ROUTE: &str = "/api_endpoints_daily_summary.csv";

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const SUMMARY_DISPOSITION: &str = "attachment; filename=api_endpoints_with_summary.csv";
const DAILY_SUMMARY_DISPOSITION: &str = "attachment; filename=api_endpoints_daily_summary.csv";

pub struct HttpState {
    pub config: GatewayConfig,
}

/// Registers both CSV routes. Any method is accepted.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(SUMMARY_ROUTE).to(summary_feed))
        .service(web::resource(DAILY_SUMMARY_ROUTE).to(daily_summary));
}

async fn summary_feed(data: web::Data<HttpState>) -> Result<HttpResponse, GatewayError> {
    let use_case = SummaryFeedUseCase::new(data.config.summary_path());

    match use_case.execute().await {
        Ok(body) => Ok(HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, CSV_CONTENT_TYPE))
            .insert_header((header::CONTENT_DISPOSITION, SUMMARY_DISPOSITION))
            .body(body)),
        Err(err) => {
            log_failure(&err);
            Err(err)
        }
    }
}

async fn daily_summary(
    req: HttpRequest,
    data: web::Data<HttpState>,
) -> Result<HttpResponse, GatewayError> {
    let use_case = DailySummaryUseCase::new(data.config.daily_summary_path());

    let file = match use_case.execute().await {
        Ok(file) => file,
        Err(err) => {
            log_failure(&err);
            return Err(err);
        }
    };

    // NamedFile handles length, validators and ranges; the CSV headers go on top.
    let mut response = file.disable_content_disposition().into_response(&req);
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(CSV_CONTENT_TYPE),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(DAILY_SUMMARY_DISPOSITION),
    );

    Ok(response)
}

fn log_failure(err: &GatewayError) {
    match err {
        GatewayError::FileAccess { path, reason } => {
            error!(path = %path.display(), error = %reason, "Error opening CSV file");
        }
        GatewayError::CsvProcessing { path, reason } => {
            error!(path = %path.display(), error = %reason, "Error reading CSV file");
        }
        GatewayError::Config(msg) => {
            error!(error = %msg, "Gateway misconfigured");
        }
    }
}

/// Binds `0.0.0.0:8005` and serves until the process is stopped.
pub async fn serve(config: GatewayConfig) -> std::io::Result<()> {
    let state = web::Data::new(HttpState { config });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((BIND_HOST, PORT))
    .map_err(|err| {
        error!(error = %err, port = PORT, "Failed to bind CSV gateway");
        err
    })?
    .run();

    // Printed regardless of the log filter.
    for line in startup_banner() {
        println!("{}", line);
    }

    server.await
}

fn startup_banner() -> [String; 3] {
    [
        format!("Server starting on http://localhost:{}", PORT),
        format!("CSV endpoint: http://localhost:{}{}", PORT, SUMMARY_ROUTE),
        format!(
            "Daily summary endpoint: http://localhost:{}{}",
            PORT, DAILY_SUMMARY_ROUTE
        ),
    ]
}
