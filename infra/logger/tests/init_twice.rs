use jview_logger::{LevelFilter, Logger};

#[test]
fn init_twice_returns_subscriber_error() {
    let _logger = Logger::builder()
        .name("integration-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("integration-init-twice-second")
        .env_filter("jview_jndi=debug")
        .init()
        .expect_err("second init should fail");

    assert!(err.is_subscriber(), "expected subscriber error for second init, got {err}");
}
