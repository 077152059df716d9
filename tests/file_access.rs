//! End-to-end reads of synthetic SEG-Y files on disk.

mod common;

use common::{SegyBuilder, init_tracing};
use segy_rs::trace_header::{CDP, INLINE};
use segy_rs::{
    AsciiDecoder, ByteOrder, FieldSpec, Nav2DOptions, Nav3DOptions, Primitive, SampleFormat,
    Samples, SegY, SegyError, SegyOptions, TraceRange, Value,
};

fn open(builder: &SegyBuilder, options: SegyOptions) -> (tempfile::TempDir, SegY) {
    let (dir, path) = builder.write();
    let file = SegY::open(&path, options).expect("open synthetic file");
    (dir, file)
}

fn trace_numbers(file: &SegY, range: impl Into<TraceRange>) -> Vec<i64> {
    file.traces()
        .read_range(range)
        .unwrap()
        .iter()
        .map(|h| h.trace_no_line().as_i64())
        .collect()
}

#[test]
fn ibm_file_headers_and_samples() {
    init_tracing();
    let (_dir, file) = open(&SegyBuilder::default(), SegyOptions::default());

    assert_eq!(file.trace_count(), 12);
    assert_eq!(file.sample_format(), SampleFormat::IbmFloat);
    assert_eq!(file.binary_header().job_id(), 7);
    assert_eq!(file.binary_header().sample_interval(), 4000);

    let header = file.traces().read_header(5).unwrap();
    assert_eq!(header.trace_no_line(), Value::Int(6));
    assert_eq!(header.cdp(), Value::Int(105));
    assert_eq!(header.sample_count(), 4);

    let samples = file.traces().read_samples(-1).unwrap();
    assert_eq!(samples, Samples::Double(vec![1.0, -1.0, 16.0, -118.625]));
}

#[test]
fn little_endian_file_from_json_options() {
    init_tracing();
    let builder = SegyBuilder {
        byte_order: ByteOrder::Little,
        ..SegyBuilder::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let opts_path = dir.path().join("options.json");
    std::fs::write(&opts_path, r#"{"byte_order": "little", "text_encoding": "ascii"}"#).unwrap();
    let options = SegyOptions::from_json_file(&opts_path).unwrap();

    let (_data_dir, file) = open(&builder, options);
    assert_eq!(file.trace_count(), 12);
    assert_eq!(file.traces().read_header(3).unwrap().cdp(), Value::Int(103));
    assert_eq!(
        file.traces().read_samples(0).unwrap(),
        Samples::Double(vec![1.0, -1.0, 16.0, -118.625])
    );
}

#[test]
fn ieee_little_endian_samples() {
    let builder = SegyBuilder {
        byte_order: ByteOrder::Little,
        format_code: 5,
        ..SegyBuilder::default()
    };
    let (_dir, file) = open(&builder, SegyOptions::new().with_byte_order(ByteOrder::Little));
    assert_eq!(
        file.traces().read_samples(2).unwrap(),
        Samples::Float(vec![0.0, 0.5, 1.0, 1.5])
    );
}

#[test]
fn text_header_decodes_with_ascii_decoder() {
    let (_dir, file) = open(
        &SegyBuilder::default(),
        SegyOptions::new().with_text_encoding("ascii"),
    );
    let lines = file.text_header().decode_lines(&AsciiDecoder).unwrap();
    assert_eq!(lines.len(), 40);
    assert!(lines[0].starts_with("C 1 CLIENT: SYNTHETIC SURVEY"));
    assert_eq!(file.text_header().encoding(), "ascii");
}

#[test]
fn trace_edit_relocates_field() {
    let options = SegyOptions::new().with_trace_edit(FieldSpec::new(INLINE, 20, Primitive::Int32));
    let (_dir, file) = open(&SegyBuilder::default(), options);
    let header = file.traces().read_header(4).unwrap();
    assert_eq!(header.inline(), header[CDP]);
    assert_eq!(header.inline(), Value::Int(104));
}

#[test]
fn trace_edit_adds_custom_field() {
    let options = SegyOptions::from_json_str(
        r#"{"trace_edits": {"VENDOR_DEPTH": {"offset": 236, "primitive": "int32"}}}"#,
    )
    .unwrap();
    let (_dir, file) = open(&SegyBuilder::default(), options);
    let header = file.traces().read_header(0).unwrap();
    assert_eq!(header.get("VENDOR_DEPTH"), Some(Value::Int(0)));
    assert_eq!(header.len(), 91);
}

#[test]
fn binary_override_unknown_field_fails_open() {
    let options = SegyOptions::new().with_binary_override("NOT_A_FIELD", 1i64);
    let (_dir, path) = SegyBuilder::default().write();
    let err = SegY::open(&path, options).unwrap_err();
    assert!(matches!(err, SegyError::UnknownField(ref name) if name == "NOT_A_FIELD"));
}

#[test]
fn ranges_select_stepped_indices() {
    let (_dir, file) = open(&SegyBuilder::default(), SegyOptions::default());

    assert_eq!(trace_numbers(&file, ..).len(), 12);
    assert_eq!(trace_numbers(&file, 10i64..), vec![11, 12]);
    assert_eq!(trace_numbers(&file, ..3i64), vec![1, 2, 3]);
    assert_eq!(trace_numbers(&file, -3i64..-1), vec![10, 11]);
    assert_eq!(
        trace_numbers(&file, TraceRange::new().with_start(11).with_stop(-1).with_step(-4)),
        vec![12, 8, 4]
    );
    assert!(trace_numbers(&file, 5i64..5).is_empty());
}

#[test]
fn out_of_range_indices() {
    let (_dir, file) = open(&SegyBuilder::default(), SegyOptions::default());
    let traces = file.traces();
    assert_eq!(traces.offset_of(-1).unwrap(), traces.offset_of(11).unwrap());
    assert!(matches!(
        traces.read_header(12),
        Err(SegyError::IndexOutOfRange { index: 12, trace_count: 12 })
    ));
    assert!(matches!(
        traces.read_header(-13),
        Err(SegyError::IndexOutOfRange { index: -13, .. })
    ));
}

#[test]
fn sampled_3d_navigation() {
    init_tracing();
    let (_dir, file) = open(&SegyBuilder::default(), SegyOptions::default());
    // interval 3 gives traces 0, 3, 6, 9, then 11 is appended
    let nav = file.sampled_nav_3d(4, &Nav3DOptions::default()).unwrap();
    let lines: Vec<(i64, i64)> = nav
        .iter()
        .map(|n| (n.inline.as_i64(), n.crossline.as_i64()))
        .collect();
    assert_eq!(lines, vec![(10, 20), (11, 20), (12, 20), (13, 20), (13, 22)]);
    assert_eq!((nav[0].x, nav[0].y), (40_000.0, 600_000.0));
    assert_eq!((nav[4].x, nav[4].y), (40_027.5, 600_027.5));
}

#[test]
fn sampled_2d_navigation_without_scalar() {
    let (_dir, file) = open(&SegyBuilder::default(), SegyOptions::default());
    let opts = Nav2DOptions::new().with_nav_scalar(false);
    let nav = file.sampled_nav_2d(12, &opts).unwrap();
    assert_eq!(nav.len(), 12);
    assert_eq!(nav[11].cdp, Value::Int(111));
    assert_eq!(nav[11].sp, 0.0);
    assert_eq!((nav[11].x, nav[11].y), (400_275.0, 6_000_275.0));
}

#[test]
fn concurrent_reads_share_one_file() {
    let (_dir, file) = open(&SegyBuilder::default(), SegyOptions::default());
    let results: Vec<Vec<i64>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let file = &file;
                scope.spawn(move || {
                    (worker..12)
                        .step_by(4)
                        .map(|i| file.traces().read_header(i).unwrap().cdp().as_i64())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results[0], vec![100, 104, 108]);
    assert_eq!(results[3], vec![103, 107, 111]);
}

#[cfg(feature = "geometry")]
#[test]
fn hull_of_diagonal_survey_is_segment() {
    use segy_rs::{Geometry, Point};

    let (_dir, file) = open(&SegyBuilder::default(), SegyOptions::default());
    let hull = file.hull_geometry(12, "CDP", true).unwrap();
    assert_eq!(
        hull,
        Geometry::LineString(vec![
            Point { x: 40_000.0, y: 600_000.0 },
            Point { x: 40_027.5, y: 600_027.5 },
        ])
    );
}

#[cfg(not(feature = "geometry"))]
#[test]
fn geometry_requires_feature() {
    let (_dir, file) = open(&SegyBuilder::default(), SegyOptions::default());
    let err = file.line_geometry(10, "CDP", true).unwrap_err();
    assert!(matches!(err, SegyError::MissingOptionalDependency("geometry")));
}
