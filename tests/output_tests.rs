use std::fs;
use std::path::{Path, PathBuf};

use iobench_plot::output::buffer_bytes;
use iobench_plot::{
    Analysis, Comparison, Format, MeasurementRow, MeasurementTable, Options, Output, Threshold,
};
use tempfile::NamedTempFile;

fn analysis() -> Analysis {
    let table = MeasurementTable::from(vec![
        MeasurementRow::new(1.0, 900.0, 700.0),
        MeasurementRow::new(2.0, 1500.0, 1200.0),
        MeasurementRow::new(4.0, 1540.0, 1500.0),
        MeasurementRow::new(8.0, 1560.0, 1520.0),
    ]);
    Analysis::new(&table, Threshold::default()).expect("analysis")
}

fn written(path: &Path, write: impl FnOnce(&mut Output)) -> String {
    let mut output = Output::file(path).expect("create output");
    write(&mut output);
    drop(output);
    fs::read_to_string(path).expect("read output")
}

#[test]
fn test_output_new_with_none() {
    let output = Output::new(None).expect("stdout output");
    assert!(format!("{output:?}").contains("Output"));
}

#[test]
fn test_output_new_with_dash() {
    let path = PathBuf::from("-");
    assert!(Output::new(Some(path.as_path())).is_ok());
}

#[test]
fn test_output_new_with_missing_directory() {
    let path = PathBuf::from("/nonexistent/dir/report.txt");
    let err = Output::new(Some(path.as_path())).expect_err("missing directory");
    assert!(err.to_string().contains("failed to create output file"));
}

#[test]
fn test_write_line_to_file() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let contents = written(temp_file.path(), |output| {
        output.write_line("first\n").expect("write line");
        output.write_line("second\n").expect("write line");
        output.flush().expect("flush");
    });
    assert_eq!(contents, "first\nsecond\n");
}

#[test]
fn test_write_analysis_text() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let contents = written(temp_file.path(), |output| {
        output
            .write_analysis(&analysis(), &Options::default())
            .expect("write analysis");
    });

    assert_eq!(
        contents,
        "peak read: 8x page size, 1560 MB/s\n\
         peak write: 8x page size, 1520 MB/s\n\
         recommended multiplier (read): 2x\n\
         recommended multiplier (write): 4x\n\
         recommended multiplier: 4x (16384 bytes)\n"
    );
}

#[test]
fn test_write_analysis_text_with_page_size() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let options = Options::default().with_page_size(16_384);
    let contents = written(temp_file.path(), |output| {
        output
            .write_analysis(&analysis(), &options)
            .expect("write analysis");
    });

    assert!(contents.ends_with("recommended multiplier: 4x (65536 bytes)\n"));
}

#[test]
fn test_write_analysis_json() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let options = Options::default().with_format(Format::Json);
    let contents = written(temp_file.path(), |output| {
        output
            .write_analysis(&analysis(), &options)
            .expect("write analysis");
    });

    let json: serde_json::Value = serde_json::from_str(&contents).expect("parse JSON");
    assert_eq!(json["peakRead"]["multiplier"], 8.0);
    assert_eq!(json["peakRead"]["readMbs"], 1560.0);
    assert_eq!(json["peakWrite"]["writeMbs"], 1520.0);
    assert_eq!(json["recommendation"]["read"], 2.0);
    assert_eq!(json["recommendation"]["write"], 4.0);
    assert_eq!(json["recommendation"]["combined"], 4.0);
    assert_eq!(json["threshold"], 0.05);
    assert_eq!(json["pageSize"], 4096);
    assert_eq!(json["bufferBytes"], 16384);
}

#[test]
fn test_write_analysis_csv() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let options = Options::default().with_format(Format::Csv);
    let contents = written(temp_file.path(), |output| {
        output
            .write_analysis(&analysis(), &options)
            .expect("write analysis");
    });

    assert_eq!(
        contents,
        "peak_read_multiplier,peak_read_mbs,peak_write_multiplier,peak_write_mbs,\
         recommended_read,recommended_write,recommended,threshold,buffer_bytes\n\
         8,1560,8,1520,2,4,4,0.05,16384\n"
    );
}

#[test]
fn test_write_comparison_text() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let contents = written(temp_file.path(), |output| {
        output
            .write_comparison(&Comparison::sample(), &Options::default())
            .expect("write comparison");
    });

    assert_eq!(
        contents,
        "System cat: 456 ms\n\
         mycat1: 1500000 ms\n\
         mycat2: 779 ms\n\
         mycat3: 775 ms\n\
         mycat4: 848 ms\n\
         mycat5: 436 ms\n\
         mycat6: 436 ms\n\
         fastest: mycat5 (436 ms)\n"
    );
}

#[test]
fn test_write_comparison_json() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let options = Options::default().with_format(Format::Json);
    let comparison = Comparison::sample().without(&["mycat1"]);
    let contents = written(temp_file.path(), |output| {
        output
            .write_comparison(&comparison, &options)
            .expect("write comparison");
    });

    let json: serde_json::Value = serde_json::from_str(&contents).expect("parse JSON");
    assert_eq!(json["timings"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["timings"][0]["program"], "System cat");
    assert_eq!(json["fastest"]["program"], "mycat5");
}

#[test]
fn test_write_comparison_csv() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let options = Options::default().with_format(Format::Csv);
    let comparison = Comparison::sample().without(&["mycat1", "mycat2", "mycat3", "mycat4"]);
    let contents = written(temp_file.path(), |output| {
        output
            .write_comparison(&comparison, &options)
            .expect("write comparison");
    });

    assert_eq!(
        contents,
        "program,time_ms\nSystem cat,456\nmycat5,436\nmycat6,436\n"
    );
}

#[test]
fn test_write_chart_saved_only_for_text() {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let chart = Path::new("buffer_performance.svg");
    let contents = written(temp_file.path(), |output| {
        output
            .write_chart_saved(chart, Format::Text)
            .expect("write text");
        output
            .write_chart_saved(chart, Format::Json)
            .expect("write json");
        output
            .write_chart_saved(chart, Format::Csv)
            .expect("write csv");
        output.flush().expect("flush");
    });

    assert_eq!(contents, "chart saved: buffer_performance.svg\n");
}

#[test]
fn test_buffer_bytes() {
    assert_eq!(buffer_bytes(1.0, 4096), 4096);
    assert_eq!(buffer_bytes(4.0, 4096), 16_384);
    assert_eq!(buffer_bytes(0.5, 4096), 2048);
    assert_eq!(buffer_bytes(1.5, 3), 5);
    assert_eq!(buffer_bytes(16.0, 16_384), 262_144);
}
