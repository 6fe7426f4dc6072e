use super::*;

#[test]
fn parses_collect_command() {
    let cli = Cli::try_parse_from(["sov-cli", "collect", "--output", "results.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Collect {
            ref output,
            search: SearchArgs {
                query: None,
                max_results: None
            }
        } if output == &PathBuf::from("results.json")
    ));
}

#[test]
fn parses_collect_with_query_and_max_results() {
    let cli = Cli::try_parse_from([
        "sov-cli",
        "collect",
        "--output",
        "out.json",
        "--query",
        "bldc fan",
        "--max-results",
        "5",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Collect { search, .. } => {
            assert_eq!(search.query.as_deref(), Some("bldc fan"));
            assert_eq!(search.max_results, Some(5));
        }
        other => panic!("expected collect, got {other:?}"),
    }
}

#[test]
fn collect_requires_output() {
    assert!(Cli::try_parse_from(["sov-cli", "collect"]).is_err());
}

#[test]
fn parses_analyze_command() {
    let cli = Cli::try_parse_from(["sov-cli", "analyze", "--input", "results.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Analyze {
            output: OutputArgs {
                json: false,
                primary: None
            },
            ..
        }
    ));
}

#[test]
fn parses_analyze_with_json_and_primary() {
    let cli = Cli::try_parse_from([
        "sov-cli",
        "analyze",
        "--input",
        "results.json",
        "--json",
        "--primary",
        "Havells",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Analyze { input, output } => {
            assert_eq!(input, PathBuf::from("results.json"));
            assert!(output.json);
            assert_eq!(output.primary.as_deref(), Some("Havells"));
        }
        other => panic!("expected analyze, got {other:?}"),
    }
}

#[test]
fn parses_run_with_save() {
    let cli = Cli::try_parse_from(["sov-cli", "run", "--save", "raw.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Run { save: Some(ref path), .. } if path == &PathBuf::from("raw.json")
    ));
}

#[test]
fn brands_flag_is_global() {
    let cli = Cli::try_parse_from(["sov-cli", "run", "--brands", "custom.yaml"])
        .expect("expected valid cli args");
    assert_eq!(cli.brands, Some(PathBuf::from("custom.yaml")));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["sov-cli"]).is_err());
}

#[test]
fn search_args_override_config() {
    let config = sov_core::AppConfig {
        log_level: "info".to_string(),
        brands_path: PathBuf::from("./config/brands.yaml"),
        query: "smart ceiling fan india".to_string(),
        max_results: 20,
        country_code: "IN".to_string(),
        request_timeout_secs: 120,
        max_retries: 2,
        retry_backoff_base_ms: 1000,
        video_multiplier: 1.0,
        web_multiplier: 1.5,
        mention_weight: 0.5,
        apify_api_token: None,
    };

    let defaults = SearchArgs::default().to_request(&config);
    assert_eq!(defaults.query, "smart ceiling fan india");
    assert_eq!(defaults.max_results, 20);

    let overridden = SearchArgs {
        query: Some("bldc fan".to_string()),
        max_results: Some(0),
    }
    .to_request(&config);
    assert_eq!(overridden.query, "bldc fan");
    assert_eq!(overridden.max_results, 1);
    assert_eq!(overridden.country_code, "IN");
}
