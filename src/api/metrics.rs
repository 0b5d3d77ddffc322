use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static ALERTS_RAISED: AtomicU64 = AtomicU64::new(0);
static SMS_FAILURES: AtomicU64 = AtomicU64::new(0);

pub fn increment_alerts_raised() {
    ALERTS_RAISED.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_sms_failures() {
    SMS_FAILURES.fetch_add(1, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub alerts_raised_total: u64,
    pub sms_failures_total: u64,
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "System metrics", body = MetricsResponse)
    )
)]
pub async fn get_metrics() -> HttpResponse {
    let alerts = ALERTS_RAISED.load(Ordering::Relaxed);
    let failures = SMS_FAILURES.load(Ordering::Relaxed);

    let metrics = format!(
        "# HELP alerts_raised_total Total number of SOS alerts recorded\n\
         # TYPE alerts_raised_total counter\n\
         alerts_raised_total {}\n\
         \n\
         # HELP sms_failures_total Total number of failed SMS dispatches\n\
         # TYPE sms_failures_total counter\n\
         sms_failures_total {}\n",
        alerts, failures
    );

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics)
}
