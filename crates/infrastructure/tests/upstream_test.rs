mod helpers;

use cascade_dns_application::ports::UpstreamResolver;
use cascade_dns_domain::{DnsQuery, RecordType, UpstreamStatus};
use cascade_dns_infrastructure::dns::ForwardingResolver;
use helpers::{MockBehavior, MockDnsServer};
use hickory_proto::op::ResponseCode;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

fn resolver(servers: &[SocketAddr], timeout_ms: u64, lifetime_ms: u64) -> ForwardingResolver {
    ForwardingResolver::new(
        servers.to_vec(),
        Duration::from_millis(timeout_ms),
        Duration::from_millis(lifetime_ms),
    )
}

fn a_query(domain: &str) -> DnsQuery {
    DnsQuery::new(domain, RecordType::A)
}

#[tokio::test]
async fn test_success_answers_are_named_after_the_query() {
    let server = MockDnsServer::start(MockBehavior::Answer {
        ip: Ipv4Addr::new(93, 184, 216, 34),
        ttl: 60,
    })
    .await;

    let result = resolver(&[server.addr()], 500, 1000)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::Success);
    assert_eq!(result.answers.len(), 1);
    assert_eq!(result.answers[0].name, "example.com");
    assert_eq!(result.answers[0].record_type, 1);
    assert_eq!(result.answers[0].ttl, Some(60));
    assert_eq!(result.answers[0].data, "93.184.216.34");
    assert_eq!(result.comment, None);
}

#[tokio::test]
async fn test_answers_of_other_types_are_dropped() {
    let server = MockDnsServer::start(MockBehavior::Answer {
        ip: Ipv4Addr::new(192, 0, 2, 1),
        ttl: 30,
    })
    .await;

    // The mock always answers with an A record.
    let result = resolver(&[server.addr()], 500, 1000)
        .query(&DnsQuery::new("example.com", RecordType::TXT))
        .await;

    assert_eq!(result.status, UpstreamStatus::Success);
    assert!(result.answers.is_empty());
}

#[tokio::test]
async fn test_nxdomain_is_a_name_error() {
    let server = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::NXDomain)).await;

    let result = resolver(&[server.addr()], 500, 1000)
        .query(&a_query("missing.example"))
        .await;

    assert_eq!(result.status, UpstreamStatus::NameError);
    assert!(result.answers.is_empty());
}

#[tokio::test]
async fn test_servfail_falls_through_to_next_nameserver() {
    let failing = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::ServFail)).await;
    let healthy = MockDnsServer::start(MockBehavior::Answer {
        ip: Ipv4Addr::new(198, 51, 100, 7),
        ttl: 120,
    })
    .await;

    let result = resolver(&[failing.addr(), healthy.addr()], 500, 2000)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::Success);
    assert_eq!(result.answers[0].data, "198.51.100.7");
    assert_eq!(failing.query_count(), 1);
    assert_eq!(healthy.query_count(), 1);
}

#[tokio::test]
async fn test_refused_and_unexpected_rcodes_fall_through() {
    let refused = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::Refused)).await;
    let not_impl = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::NotImp)).await;
    let healthy = MockDnsServer::start(MockBehavior::Answer {
        ip: Ipv4Addr::new(198, 51, 100, 9),
        ttl: 30,
    })
    .await;

    let result = resolver(&[refused.addr(), not_impl.addr(), healthy.addr()], 500, 3000)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::Success);
    assert_eq!(result.answers[0].data, "198.51.100.9");
    assert_eq!(refused.query_count(), 1);
    assert_eq!(not_impl.query_count(), 1);
}

#[tokio::test]
async fn test_refusal_is_reported_when_no_nameserver_answers() {
    let refused = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::Refused)).await;

    let result = resolver(&[refused.addr()], 500, 1000)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::ServerFailure);
    let comment = result.comment.unwrap();
    assert!(comment.starts_with("Upstream DNS error:"), "{}", comment);
    assert!(comment.to_lowercase().contains("refused"), "{}", comment);
}

#[tokio::test]
async fn test_nxdomain_stops_the_nameserver_walk() {
    let first = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::NXDomain)).await;
    let second = MockDnsServer::start(MockBehavior::Answer {
        ip: Ipv4Addr::new(198, 51, 100, 7),
        ttl: 120,
    })
    .await;

    let result = resolver(&[first.addr(), second.addr()], 500, 2000)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::NameError);
    assert_eq!(second.query_count(), 0);
}

#[tokio::test]
async fn test_every_nameserver_failing_reports_last_error() {
    let first = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::Refused)).await;
    let second = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::ServFail)).await;

    let result = resolver(&[first.addr(), second.addr()], 500, 2000)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::ServerFailure);
    assert!(result.answers.is_empty());
    let comment = result.comment.unwrap();
    assert!(comment.starts_with("Upstream DNS error:"), "{}", comment);
}

#[tokio::test]
async fn test_silent_nameserver_times_out() {
    let server = MockDnsServer::start(MockBehavior::Silent).await;

    let result = resolver(&[server.addr()], 100, 300)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::ServerFailure);
    assert_eq!(result.comment.as_deref(), Some("Upstream DNS timeout"));
}

#[tokio::test]
async fn test_lifetime_bounds_the_whole_query() {
    let servers = [
        MockDnsServer::start(MockBehavior::Silent).await,
        MockDnsServer::start(MockBehavior::Silent).await,
        MockDnsServer::start(MockBehavior::Silent).await,
    ];
    let addrs: Vec<SocketAddr> = servers.iter().map(|s| s.addr()).collect();

    let started = Instant::now();
    let result = resolver(&addrs, 200, 300)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::ServerFailure);
    assert!(started.elapsed() < Duration::from_millis(550));
    assert_eq!(servers[2].query_count(), 0);
}

#[tokio::test]
async fn test_mismatched_id_is_a_failed_attempt() {
    let server = MockDnsServer::start(MockBehavior::WrongId).await;

    let result = resolver(&[server.addr()], 200, 400)
        .query(&a_query("example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::ServerFailure);
}

#[tokio::test]
async fn test_truncated_response_is_retried_over_tcp() {
    let server = MockDnsServer::start(MockBehavior::Truncated {
        ip: Ipv4Addr::new(203, 0, 113, 5),
        ttl: 90,
    })
    .await;

    let result = resolver(&[server.addr()], 500, 1000)
        .query(&a_query("big.example.com"))
        .await;

    assert_eq!(result.status, UpstreamStatus::Success);
    assert_eq!(result.answers[0].data, "203.0.113.5");
    assert_eq!(server.query_count(), 1);
    assert_eq!(server.tcp_query_count(), 1);
}

#[tokio::test]
async fn test_from_config_defaults_port_53() {
    let config = cascade_dns_domain::config::UpstreamConfig {
        nameservers: vec!["9.9.9.9".to_string(), "127.0.0.1:5353".to_string()],
        timeout_secs: 2,
        lifetime_secs: 4,
    };

    let resolver = ForwardingResolver::from_config(&config).unwrap();

    assert_eq!(
        resolver.nameservers(),
        &[
            "9.9.9.9:53".parse::<SocketAddr>().unwrap(),
            "127.0.0.1:5353".parse::<SocketAddr>().unwrap(),
        ]
    );
}
