//! AWS Lambda entry point behind an API Gateway REST proxy integration.
//!
//! The proxy event deserializes straight into [`ApiEvent`] and the
//! [`ApiResponse`] serializes straight into the proxy response, so no
//! translation layer sits between the gateway and the event router.
//!
//! # Environment Variables
//!
//! - `TABLE_NAME` (required): DynamoDB table
//! - `LOG_FORMAT`: `json` recommended for CloudWatch
//!
//! See [`shortlink_api::config`] for the rest.

use std::sync::Arc;

use lambda_http::{Error, LambdaEvent, lambda_runtime, service_fn};
use shortlink_api::api::event::{ApiEvent, ApiResponse};
use shortlink_api::api::router::handle_event;
use shortlink_api::application::services::UrlService;
use shortlink_api::infrastructure::persistence::build_repository;
use shortlink_api::config::StoreBackend;
use shortlink_api::{config, telemetry};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = config::load_from_env()?;
    telemetry::init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    if config.store_backend != StoreBackend::DynamoDb {
        return Err("the Lambda entry point requires STORE_BACKEND=dynamodb".into());
    }

    let service = Arc::new(UrlService::new(build_repository(&config).await));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ApiEvent>| {
        let service = service.clone();
        async move { Ok::<ApiResponse, Error>(handle_event(&service, event.payload).await) }
    }))
    .await
}
