#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use plotters::prelude::*;
use probing_table::{ProbingSet, TableConfig};
use rand::Rng;

// Fixed table size; the threshold below keeps the table from resizing during a run
const TABLE_SIZE: usize = 100_000;
const NO_RESIZE_THRESHOLD: f64 = 0.99;
// Load factors from 0.1 to 0.95
const NUM_LOAD_FACTORS: usize = 10;
// Lookups of absent keys per measurement
const MISS_SAMPLES: usize = 10_000;

const SERIES: [&str; 3] = ["Hits", "Misses", "Misses after churn"];

#[derive(Debug, Default, Clone, Copy)]
struct ProbeStats {
    average: f64,
    worst: usize,
}

fn probe_stats(set: &ProbingSet, keys: &[i64]) -> ProbeStats {
    if keys.is_empty() {
        return ProbeStats::default();
    }
    let lengths: Vec<usize> = keys.iter().map(|&key| set.probe_length(key)).collect();
    ProbeStats {
        average: lengths.iter().sum::<usize>() as f64 / lengths.len() as f64,
        worst: *lengths.iter().max().unwrap_or(&0),
    }
}

// Keys that are not in the set
fn absent_keys(set: &ProbingSet, rng: &mut impl Rng, count: usize) -> Vec<i64> {
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key: i64 = rng.random();
        if !set.contains(key) {
            keys.push(key);
        }
    }
    keys
}

// Removes half of the live keys and inserts as many fresh ones, so the load factor stays
// the same while tombstones pile up
fn churn(set: &mut ProbingSet, live: &mut Vec<i64>, rng: &mut impl Rng) {
    let half = live.len() / 2;
    for key in live.drain(..half) {
        set.delete(key);
    }
    while live.len() < half * 2 {
        let key: i64 = rng.random();
        if set.add(key).unwrap_or(false) {
            live.push(key);
        }
    }
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    x_labels: &[String],
    series: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
    ];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..(x_labels.len() - 1), 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_labels(x_labels.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Load Factor")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (series_idx, values) in series.iter().enumerate() {
        let color = &colors[series_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(values.iter().copied().enumerate(), line_style))?
            .label(SERIES[series_idx])
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            values.iter().copied().enumerate().map(|point| Circle::new(point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();
    let config = TableConfig::default().with_load_factor_threshold(NO_RESIZE_THRESHOLD);
    let mut rng = rand::rng();

    let mut average_probes: Vec<Vec<f64>> = vec![Vec::new(); SERIES.len()];
    let mut worst_probes: Vec<Vec<f64>> = vec![Vec::new(); SERIES.len()];

    for &load in &load_factors {
        let n_keys = (TABLE_SIZE as f64 * load) as usize;
        let mut set = ProbingSet::with_config(TABLE_SIZE, config)?;
        let mut live = Vec::with_capacity(n_keys);
        while live.len() < n_keys {
            let key: i64 = rng.random();
            if set.add(key)? {
                live.push(key);
            }
        }

        let hits = probe_stats(&set, &live);
        let misses = probe_stats(&set, &absent_keys(&set, &mut rng, MISS_SAMPLES));

        churn(&mut set, &mut live, &mut rng);
        let churned = probe_stats(&set, &absent_keys(&set, &mut rng, MISS_SAMPLES));

        for (idx, stats) in [hits, misses, churned].into_iter().enumerate() {
            average_probes[idx].push(stats.average);
            worst_probes[idx].push(stats.worst as f64);
        }

        println!(
            "load {:.2}: hits avg {:.2} (worst {}), misses avg {:.2} (worst {}), after churn avg {:.2} (worst {}, {} tombstones)",
            load,
            hits.average,
            hits.worst,
            misses.average,
            misses.worst,
            churned.average,
            churned.worst,
            set.tombstones()
        );
    }

    let x_labels: Vec<String> = load_factors.iter().map(|lf| format!("{lf:.2}")).collect();
    draw_chart(
        "average_probe_length.png",
        "Average Probe Length by Load Factor",
        "Slots inspected per lookup",
        &x_labels,
        &average_probes,
    )?;
    draw_chart(
        "worst_case_probes.png",
        "Worst-Case Probe Length by Load Factor",
        "Slots inspected per lookup",
        &x_labels,
        &worst_probes,
    )?;

    println!("Generated plot images: average_probe_length.png, worst_case_probes.png");

    Ok(())
}
