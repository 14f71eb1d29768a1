use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_are_used() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_port_falls_back_to_default() {
    assert_eq!(ServerConfig::from_values(None, Some("")).unwrap().port, DEFAULT_PORT);
}

#[test]
fn bad_port_is_rejected() {
    assert_eq!(ServerConfig::from_values(None, Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(ServerConfig::from_values(None, Some("0")), Err(ConfigError::InvalidPort("0".to_owned())));
    assert_eq!(ServerConfig::from_values(None, Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn empty_host_is_rejected() {
    assert_eq!(ServerConfig::from_values(Some("  "), None), Err(ConfigError::EmptyHost));
}
