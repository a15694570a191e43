use nice_histogram::{
    Cell, HistogramError, Params, Policy, bin_column, compute_range,
    core::table::read_csv,
    histogram, render_step, sanitize,
};
use serde_json::json;

const CSV: &str = "\
name,score,note
a,0.0,x
b,1.8,
c,1.1,
d,2.0,
e,inf,
f,,
";

#[test]
fn csv_to_vega_lite() {
    let table = read_csv(CSV.as_bytes()).unwrap();
    let mut params = Params::for_column("score");
    params.n_buckets = 2;

    let (message, spec) = render_step(&table, &params);
    assert!(message.is_empty(), "{message}");
    assert_eq!(spec["title"]["text"], json!("Histogram of score"));
    assert_eq!(
        spec["data"]["values"],
        json!([
            {"min": 0.0, "max": 1.0, "n": 1},
            {"min": 1.0, "max": 2.0, "n": 3}
        ])
    );
}

#[test]
fn saved_v0_params_still_work() {
    let table = read_csv(CSV.as_bytes()).unwrap();
    let params = Params::from_saved(json!({"column": "score", "n_buckets": 2})).unwrap();
    let binned = bin_column(table.column("score"), &params).unwrap();
    assert_eq!(binned.histogram.counts, vec![1, 3]);
    assert_eq!(binned.sample_len, 4);
}

#[test]
fn errors_render_as_messages() {
    let table = read_csv(CSV.as_bytes()).unwrap();

    let (message, spec) = render_step(&table, &Params::default());
    assert_eq!(message, HistogramError::NoColumnSelected.to_string());
    assert_eq!(spec["mark"], json!("point"));

    let (message, _) = render_step(&table, &Params::for_column("note"));
    assert_eq!(message, HistogramError::InsufficientData.to_string());

    let mut strict = Params::for_column("name");
    strict.strict = true;
    let (message, _) = render_step(&table, &strict);
    assert_eq!(
        message,
        HistogramError::NonNumericColumn("name".into()).to_string()
    );
}

#[test]
fn counts_cover_the_whole_sample() {
    let raw: Vec<Cell> = (0..1_000)
        .map(|i| match i % 7 {
            0 => Cell::Missing,
            1 => Cell::from("n/a"),
            2 => Cell::Number(f64::NAN),
            _ => Cell::Number(f64::from(i).sqrt() * 3.3 - 40.0),
        })
        .collect();

    for policy in [Policy::Drop, Policy::Replace(0.0)] {
        let sample = sanitize(&raw, policy);
        assert!(sample.iter().all(|v| v.is_finite()));
        for bins in [2, 9, 31, 500] {
            let h = histogram(&sample, bins);
            assert_eq!(h.edges.len(), h.counts.len() + 1);
            assert_eq!(h.counts.iter().sum::<usize>(), sample.len());
        }
    }
}

#[test]
fn documented_ranges() {
    let r = compute_range(240.0, 12314.0, 13);
    assert_eq!((r.start, r.stop, r.bin_count), (0.0, 13000.0, 13));
    let r = compute_range(-8.0, 22.0, 4);
    assert_eq!((r.start, r.stop, r.bin_count), (-10.0, 30.0, 4));
    let r = compute_range(-0.04, 0.8, 10);
    assert_eq!((r.start, r.stop, r.bin_count), (-0.1, 0.8, 9));
}
