use super::*;

fn base_config() -> AppConfig {
    AppConfig {
        graphql_endpoint: Some("https://env.example/graphql".to_owned()),
        shop_name: "Demo Shop".to_owned(),
        shop_company: "Company".to_owned(),
        shop_url: "https://demo.beseller.com".to_owned(),
        currency: "BYN".to_owned(),
        status_id: 1,
        output_path: PathBuf::from("export.yml"),
        http_timeout: Duration::from_secs(30),
        log_level: "info".to_owned(),
        fetch_max_attempts: 3,
        fetch_backoff_secs: 1,
        products_page_size: 100,
    }
}

#[test]
fn no_flags_keeps_environment_config() {
    let cli = Cli::try_parse_from(["ymlfeed-cli"]).expect("expected valid cli args");
    let cfg = cli.apply(base_config());
    assert_eq!(
        cfg.graphql_endpoint.as_deref(),
        Some("https://env.example/graphql")
    );
    assert_eq!(cfg.output_path, PathBuf::from("export.yml"));
    assert_eq!(cfg.status_id, 1);
}

#[test]
fn flags_override_environment_config() {
    let cli = Cli::try_parse_from([
        "ymlfeed-cli",
        "--endpoint",
        "https://flag.example/graphql",
        "--out",
        "/tmp/feed.yml",
        "--shop-name",
        "Sneaker Hub",
        "--shop-company",
        "Hub LLC",
        "--shop-url",
        "https://shop.example",
        "--currency",
        "USD",
        "--status-id",
        "2",
        "--timeout",
        "45s",
        "--log-level",
        "debug",
    ])
    .expect("expected valid cli args");
    let cfg = cli.apply(base_config());

    assert_eq!(
        cfg.graphql_endpoint.as_deref(),
        Some("https://flag.example/graphql")
    );
    assert_eq!(cfg.output_path, PathBuf::from("/tmp/feed.yml"));
    assert_eq!(cfg.shop_name, "Sneaker Hub");
    assert_eq!(cfg.shop_company, "Hub LLC");
    assert_eq!(cfg.shop_url, "https://shop.example");
    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.status_id, 2);
    assert_eq!(cfg.http_timeout, Duration::from_secs(45));
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn empty_endpoint_flag_does_not_clear_environment_value() {
    let cli = Cli::try_parse_from(["ymlfeed-cli", "--endpoint", ""]).unwrap();
    let cfg = cli.apply(base_config());
    assert!(cfg.graphql_endpoint.is_some());
}

#[test]
fn invalid_timeout_flag_is_rejected() {
    let result = Cli::try_parse_from(["ymlfeed-cli", "--timeout", "soon"]);
    assert!(result.is_err());
}

#[test]
fn invalid_status_id_flag_is_rejected() {
    let result = Cli::try_parse_from(["ymlfeed-cli", "--status-id", "new"]);
    assert!(result.is_err());
}

#[test]
fn normalize_log_level_accepts_aliases() {
    assert_eq!(normalize_log_level("DEBUG"), "debug");
    assert_eq!(normalize_log_level("warning"), "warn");
    assert_eq!(normalize_log_level("error"), "error");
    assert_eq!(normalize_log_level("verbose"), "info");
}

#[tokio::test]
async fn run_without_endpoint_fails_before_network() {
    let mut cfg = base_config();
    cfg.graphql_endpoint = None;
    let err = run(&cfg).await.unwrap_err();
    assert!(err.to_string().contains("GraphQL endpoint is required"));
}

#[tokio::test]
async fn run_with_invalid_request_fails_in_validation() {
    let mut cfg = base_config();
    cfg.status_id = 0;
    let err = run(&cfg).await.unwrap_err();
    let export_err = err
        .downcast_ref::<ymlfeed_core::ExportError>()
        .expect("expected ExportError");
    assert_eq!(
        export_err.phase(),
        ymlfeed_core::ExportPhase::ValidatingRequest
    );
}
