//! Tests for the application bootstrap, covering readiness signalling and
//! settings translation.

use std::net::SocketAddr;

use super::server::{ServerConfig, create_server};
use actix_web::web;
use bloglist::config::BloglistSettings;
use bloglist::inbound::http::health::HealthState;
use rstest::{fixture, rstest};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, bind_address: SocketAddr) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_accepts_testing_endpoints(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    let config = ServerConfig::new(bind_address).with_testing_endpoints(true);

    let _server = create_server(health_state.clone(), config).expect("server should build");

    assert!(health_state.is_ready());
}

#[rstest]
fn settings_translate_into_server_config() {
    let settings = BloglistSettings {
        host: Some("127.0.0.1".parse().expect("valid address")),
        port: Some(4000),
        testing_endpoints: true,
        session_ttl_secs: Some(60),
    };

    let config = ServerConfig::from_settings(&settings);

    assert_eq!(config.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 4000)));
    assert!(config.testing_endpoints);
    assert!(format!("{:?}", config.session_expiry).contains("FixedLifetime"));
}
