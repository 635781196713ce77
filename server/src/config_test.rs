use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(cfg.static_dir.ends_with("../public"));
}

#[test]
fn from_lookup_reads_all_variables() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("DATABASE_URL", "postgres://u:p@localhost/portfolio"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("STATIC_DIR", "/srv/public"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.database_url.as_deref(), Some("postgres://u:p@localhost/portfolio"));
    assert_eq!(cfg.db_max_connections, 12);
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/public"));
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "   "), ("PORT", "")])).unwrap();
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_lookup_trims_values() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn from_lookup_rejects_invalid_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "not-an-ip")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}
