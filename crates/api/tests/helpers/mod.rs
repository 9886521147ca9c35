#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use cascade_dns_api::{create_api_routes, AppState};
use cascade_dns_application::ports::UpstreamResolver;
use cascade_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordsUseCase, GetCacheStatsUseCase, GetRecordsUseCase,
    ResolveQueryUseCase,
};
use cascade_dns_domain::{Answer, DnsQuery, RecordType, UpstreamResult};
use cascade_dns_infrastructure::database::run_migrations;
use cascade_dns_infrastructure::dns::{DnsServerHandler, TtlAnswerCache};
use cascade_dns_infrastructure::repositories::SqliteRecordRepository;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Upstream stand-in: `example.com` resolves to one A record, everything
/// else is a name error.
#[derive(Default)]
pub struct StubUpstream {
    calls: AtomicUsize,
}

impl StubUpstream {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for StubUpstream {
    async fn query(&self, query: &DnsQuery) -> UpstreamResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match (&*query.domain, query.record_type) {
            ("example.com", RecordType::A) => UpstreamResult::success(vec![Answer::new(
                "example.com",
                RecordType::A,
                60,
                "93.184.216.34",
            )]),
            ("example.com", _) => UpstreamResult::success(vec![]),
            ("broken.example", _) => UpstreamResult::server_failure("Upstream DNS timeout"),
            _ => UpstreamResult::name_error(),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub upstream: Arc<StubUpstream>,
    pub cache: Arc<TtlAnswerCache>,
}

pub async fn create_test_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();

    let records = Arc::new(SqliteRecordRepository::new(pool));
    let cache = Arc::new(TtlAnswerCache::new());
    let upstream = Arc::new(StubUpstream::default());

    let resolve_query = Arc::new(ResolveQueryUseCase::new(
        cache.clone(),
        records.clone(),
        upstream.clone(),
    ));

    let state = AppState {
        resolve_query: resolve_query.clone(),
        dns_handler: Arc::new(DnsServerHandler::new(resolve_query)),
        create_record: Arc::new(CreateRecordUseCase::new(records.clone())),
        get_records: Arc::new(GetRecordsUseCase::new(records.clone())),
        delete_records: Arc::new(DeleteRecordsUseCase::new(records)),
        get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
    };

    TestApp {
        router: create_api_routes(state),
        upstream,
        cache,
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (u16, Vec<u8>, Option<String>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body, content_type)
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (u16, Value) {
    let (status, body, _) = send(app, request).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}
