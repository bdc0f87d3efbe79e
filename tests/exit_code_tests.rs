use std::io;

use anyhow::{Context, Error, anyhow};
use iobench_plot::exit_code::ExitCode;
use iobench_plot::{IobenchError, MeasurementTable};

fn create_io_error(kind: io::ErrorKind) -> Error {
    io::Error::new(kind, "test I/O error").into()
}

#[test]
fn test_io_error_not_found() {
    let err = create_io_error(io::ErrorKind::NotFound);
    assert_eq!(ExitCode::from(&err), ExitCode::InputNotFound);
}

#[test]
fn test_io_error_permission_denied() {
    let err = create_io_error(io::ErrorKind::PermissionDenied);
    assert_eq!(ExitCode::from(&err), ExitCode::PermissionDenied);
}

#[test]
fn test_io_error_already_exists() {
    let err = create_io_error(io::ErrorKind::AlreadyExists);
    assert_eq!(ExitCode::from(&err), ExitCode::OutputFailed);
}

#[test]
fn test_io_error_other() {
    let err = create_io_error(io::ErrorKind::ConnectionRefused);
    assert_eq!(ExitCode::from(&err), ExitCode::IoError);
}

#[test]
fn test_io_error_with_context() {
    let err = Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "missing"))
        .context("failed to open input file: results.csv")
        .unwrap_err();
    assert_eq!(ExitCode::from(&err), ExitCode::InputNotFound);
}

#[test]
fn test_clap_help() {
    let clap_err = clap::Command::new("test")
        .try_get_matches_from(vec!["test", "--help"])
        .unwrap_err();
    let err: Error = anyhow!(clap_err);
    assert_eq!(ExitCode::from(&err), ExitCode::Success);
}

#[test]
fn test_clap_version() {
    let clap_err = clap::Command::new("test")
        .version("1.0")
        .try_get_matches_from(vec!["test", "--version"])
        .unwrap_err();
    let err: Error = anyhow!(clap_err);
    assert_eq!(ExitCode::from(&err), ExitCode::Success);
}

#[test]
fn test_clap_usage_error() {
    let clap_err = clap::Command::new("test")
        .try_get_matches_from(vec!["test", "--bogus"])
        .unwrap_err();
    let err: Error = anyhow!(clap_err);
    assert_eq!(ExitCode::from(&err), ExitCode::UsageError);
}

#[test]
fn test_generic_error() {
    let err: Error = anyhow!("generic error");
    assert_eq!(ExitCode::from(&err), ExitCode::Failure);
}

#[test]
fn test_usage_errors() {
    for err in [
        IobenchError::Config("threshold must be a finite number".to_string()),
        IobenchError::UnsupportedChartFormat("chart.pdf".to_string()),
    ] {
        assert_eq!(ExitCode::from(&err), ExitCode::UsageError);
    }
}

#[test]
fn test_data_format_errors() {
    for err in [
        IobenchError::InvalidInput("measurement table has no rows".to_string()),
        IobenchError::MissingColumn {
            column: "multiplier".to_string(),
            available: vec!["size".to_string()],
        },
        IobenchError::InvalidValue {
            row: 3,
            column: "read_mbs".to_string(),
            value: "n/a".to_string(),
        },
    ] {
        assert_eq!(ExitCode::from(&err), ExitCode::DataFormat);
    }
}

#[test]
fn test_malformed_csv_is_data_format() {
    let err = MeasurementTable::from_reader("multiplier,read_mbs,write_mbs\n1,2\n".as_bytes())
        .unwrap_err();
    assert!(matches!(err, IobenchError::Csv(_)));
    assert_eq!(ExitCode::from(&err), ExitCode::DataFormat);
}

#[test]
fn test_chart_error_is_output_failed() {
    let err = IobenchError::Chart("backend failed".to_string());
    assert_eq!(ExitCode::from(&err), ExitCode::OutputFailed);
}

#[test]
fn test_io_variant_uses_source_kind() {
    let err = IobenchError::Io {
        path: "results.csv".to_string(),
        message: "failed to read".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(ExitCode::from(&err), ExitCode::PermissionDenied);
}

#[test]
fn test_library_error_through_anyhow() {
    let err = Err::<(), _>(IobenchError::InvalidInput("empty".to_string()))
        .context("failed to load results table: -")
        .unwrap_err();
    assert_eq!(ExitCode::from(&err), ExitCode::DataFormat);
}

#[test]
fn test_exit_code_values() {
    assert_eq!(ExitCode::Success as u8, 0);
    assert_eq!(ExitCode::Failure as u8, 1);
    assert_eq!(ExitCode::UsageError as u8, 64);
    assert_eq!(ExitCode::DataFormat as u8, 65);
    assert_eq!(ExitCode::InputNotFound as u8, 66);
    assert_eq!(ExitCode::OutputFailed as u8, 73);
    assert_eq!(ExitCode::IoError as u8, 74);
    assert_eq!(ExitCode::PermissionDenied as u8, 77);
}

