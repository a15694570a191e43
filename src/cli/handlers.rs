use std::{io::Read, time::Instant};

use crate::{
    core::{
        bounds::{graph_dims, terminal_geometry},
        color::Color,
        config::PlotConfig,
        error::{GraphError, ParamsError},
        params::{MissingPolicy, Params, clamp_bin_count, migrate_params},
        rng::Lcg,
        table::{Table, read_csv_from_path},
    },
    render::{ChartStyle, Histogram, Renderer, histogram, spec_for},
    step::bin_column,
};

use super::parse::{DemoArgs, MigrateArgs, PlotArgs, SpecArgs, StepArgs};

fn read_text(path: &str) -> Result<String, GraphError> {
    let mut text = String::new();
    if path == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        text = std::fs::read_to_string(path)?;
    }
    Ok(text)
}

/// Saved params (if any), then command-line overrides.
fn step_params(a: &StepArgs) -> Result<Params, GraphError> {
    let mut p = match &a.params {
        Some(path) => Params::from_json_str(&read_text(path)?)?,
        None => Params::default(),
    };
    if let Some(c) = &a.column {
        p.column.clone_from(c);
    }
    if let Some(b) = a.bins {
        p.n_buckets = b;
    }
    if let Some(t) = &a.title {
        p.title.clone_from(t);
    }
    if let Some(v) = a.replace_missing {
        p.missing_policy = MissingPolicy::Replace;
        p.replace_missing_with = v;
    }
    p.strict |= a.strict;
    Ok(p)
}

fn load(a: &StepArgs) -> Result<(Table, Params), GraphError> {
    let t_ingest = Instant::now();
    let table = read_csv_from_path(&a.file)?;
    log::debug!(
        "CSV ingest: {} µs   ({} rows)",
        t_ingest.elapsed().as_micros(),
        table.height()
    );
    Ok((table, step_params(a)?))
}

/// Draw `hist` sized to the current terminal.
fn draw(
    hist: &Histogram,
    title: &str,
    subtitle: String,
    x_label: Option<&str>,
    color: Color,
) -> Result<(), GraphError> {
    let label_width = hist.max_count().to_string().len();
    let (x_chars, y_chars) = graph_dims(terminal_geometry(), hist.bin_count(), label_width);

    let mut b = PlotConfig::builder(x_chars, y_chars)
        .title(title)
        .subtitle(subtitle)
        .color(color);
    if let Some(l) = x_label {
        b = b.x_label(l);
    }
    let cfg = b.build()?;

    let t_render = Instant::now();
    Renderer::new().render(&cfg, hist)?;
    log::debug!("render: {} µs", t_render.elapsed().as_micros());
    Ok(())
}

pub fn plot(a: &PlotArgs) -> Result<(), GraphError> {
    let color = Color::from_name(&a.color)?;
    let (table, params) = load(&a.step)?;

    let t_bin = Instant::now();
    let binned = bin_column(table.column(&params.column), &params)?;
    log::debug!("binning: {} µs", t_bin.elapsed().as_micros());

    let subtitle = a.subtitle.clone().unwrap_or_else(|| {
        format!(
            "{} bins · {} values",
            binned.histogram.bin_count(),
            binned.sample_len
        )
    });
    draw(
        &binned.histogram,
        &binned.title,
        subtitle,
        Some(binned.column.as_str()),
        color,
    )
}

pub fn spec(a: &SpecArgs) -> Result<(), GraphError> {
    let (table, params) = load(&a.step)?;
    let outcome = bin_column(table.column(&params.column), &params);
    let (message, chart) = spec_for(&outcome, &ChartStyle::default());
    if !message.is_empty() {
        eprintln!("{message}");
    }

    let json = if a.pretty {
        serde_json::to_string_pretty(&chart)?
    } else {
        serde_json::to_string(&chart)?
    };
    println!("{json}");
    Ok(())
}

pub fn migrate(a: &MigrateArgs) -> Result<(), GraphError> {
    let saved: serde_json::Value = serde_json::from_str(&read_text(&a.file)?)?;
    let serde_json::Value::Object(map) = saved else {
        return Err(ParamsError::NotAnObject.into());
    };
    let upgraded = serde_json::Value::Object(migrate_params(map));
    println!("{}", serde_json::to_string_pretty(&upgraded)?);
    Ok(())
}

pub fn demo(a: &DemoArgs) -> Result<(), GraphError> {
    let color = Color::from_name(&a.color)?;
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let sample = rng.normal_sample(a.samples, a.mu, a.sigma);

    let bins = clamp_bin_count(a.bins);
    let hist = histogram(&sample, bins);
    draw(
        &hist,
        "Normal Sample Demo",
        format!("μ = {},  σ = {},  n = {}", a.mu, a.sigma, a.samples),
        None,
        color,
    )
}
