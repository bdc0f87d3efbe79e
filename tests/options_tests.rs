use iobench_plot::config::{DEFAULT_PAGE_SIZE, ENV_PAGE_SIZE, ENV_THRESHOLD};
use iobench_plot::{Config, Format, Options, Threshold};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.threshold(), Threshold::default());
    assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(DEFAULT_PAGE_SIZE, 4096);
}

#[test]
fn test_config_builders() {
    let threshold = Threshold::new(0.2).expect("threshold");
    let config = Config::default()
        .with_threshold(threshold)
        .with_page_size(8192);

    assert_eq!(config, Config::new(threshold, 8192));
    assert_eq!(config.threshold().value(), 0.2);
    assert_eq!(config.page_size(), 8192);
}

#[test]
fn test_env_var_names() {
    assert_eq!(ENV_THRESHOLD, "IOBENCH_PLOT_THRESHOLD");
    assert_eq!(ENV_PAGE_SIZE, "IOBENCH_PLOT_PAGE_SIZE");
}

#[test]
fn test_options_default() {
    let options = Options::default();
    assert_eq!(options.format(), Format::Text);
    assert_eq!(options.threshold(), Threshold::default());
    assert_eq!(options.page_size(), 4096);
    assert_eq!(options.chart_size(), None);
}

#[test]
fn test_options_from_config() {
    let threshold = Threshold::new(0.1).expect("threshold");
    let options = Options::from_config(Config::new(threshold, 16_384));

    assert_eq!(options.format(), Format::Text);
    assert_eq!(options.threshold(), threshold);
    assert_eq!(options.page_size(), 16_384);
}

#[test]
fn test_options_builders() {
    let threshold = Threshold::new(0.01).expect("threshold");
    let options = Options::default()
        .with_format(Format::Csv)
        .with_threshold(threshold)
        .with_page_size(512)
        .with_chart_size((800, 400));

    assert_eq!(
        options,
        Options::new(Format::Csv, threshold, 512, Some((800, 400)))
    );
}

#[test]
fn test_options_display() {
    let options = Options::default().with_format(Format::Json);
    assert_eq!(
        options.to_string(),
        "Options { format: json, threshold: 5%, page_size: 4096 }"
    );
}

#[test]
fn test_options_serialization() {
    let options = Options::default().with_chart_size((640, 480));
    let json = serde_json::to_string(&options).expect("serialize");
    assert_eq!(
        json,
        r#"{"format":"text","threshold":0.05,"pageSize":4096,"chartSize":[640,480]}"#
    );

    let back: Options = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, options);
}

#[test]
fn test_format_display_and_text() {
    assert_eq!(Format::Text.to_string(), "text");
    assert_eq!(Format::Json.to_string(), "json");
    assert_eq!(Format::Csv.to_string(), "csv");
    assert!(Format::Text.is_text());
    assert!(!Format::Csv.is_text());
}
