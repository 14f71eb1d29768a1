use super::*;

#[test]
fn defaults_to_demo_mode_same_origin() {
    let cfg = PortalConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg, PortalConfig::default());
    assert!(cfg.is_demo());
    assert_eq!(cfg.latency_ms, DEFAULT_LATENCY_MS);
}

#[test]
fn parses_remote_mode() {
    let cfg = PortalConfig::from_values(Some("remote"), None, None).unwrap();
    assert_eq!(cfg.api_mode, ApiMode::Remote);
    assert!(!cfg.is_demo());
}

#[test]
fn blank_mode_means_demo() {
    let cfg = PortalConfig::from_values(Some("  "), None, None).unwrap();
    assert_eq!(cfg.api_mode, ApiMode::Demo);
}

#[test]
fn rejects_unknown_mode() {
    assert_eq!(
        PortalConfig::from_values(Some("mock"), None, None),
        Err(ConfigError::UnknownApiMode("mock".to_owned()))
    );
}

#[test]
fn rejects_non_numeric_latency() {
    assert_eq!(
        PortalConfig::from_values(None, None, Some("fast")),
        Err(ConfigError::InvalidLatency("fast".to_owned()))
    );
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let cfg = PortalConfig::from_values(Some("remote"), Some("https://api.example.com/"), Some("0")).unwrap();
    assert_eq!(cfg.api_base, "https://api.example.com");
    assert_eq!(cfg.latency_ms, 0);
    assert_eq!(cfg.endpoint("/api/jobs"), "https://api.example.com/api/jobs");
}

#[test]
fn same_origin_endpoint_is_bare_path() {
    assert_eq!(PortalConfig::default().endpoint("/api/auth/login"), "/api/auth/login");
}
