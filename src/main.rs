//! colsieve: Dataset Cleaning CLI Tool
//!
//! Runs the missing value, variance and entropy filters over a CSV or
//! Parquet file and writes the reduced dataset plus a per-column report.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use colsieve::cli::{confirm_drop_columns, Cli};
use colsieve::pipeline::{
    filter_entropy_with_base, filter_nulls, filter_numerical_variance, load_dataset,
    save_dataset, TabularData,
};
use colsieve::report::{CleaningSummary, ColumnReport, ReportMetadata};
use colsieve::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.filter_config()?;
    let output_path = cli.output_path();
    let report_path = cli.report_path();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &output_path, &config);

    let lf = load_dataset(&cli.input, cli.infer_schema_length)?;
    let initial_columns = lf.column_kinds()?.len();
    let mut summary = CleaningSummary::new(initial_columns);

    // Step 1: Missing values
    print_step_header(1, "Missing Value Analysis");

    let step_start = Instant::now();
    let spinner = create_spinner("Counting missing values...");
    let (lf, nulls_summary) = filter_nulls(&lf, config.nulls_threshold)?;
    finish_with_success(&spinner, "Missing value analysis complete");

    let dropped = nulls_summary.dropped_columns();
    if dropped.is_empty() {
        print_info("No columns exceed the missing value threshold");
    } else {
        print_count(
            "column(s) with high missing values",
            dropped.len(),
            Some(&format!("(>{:.1}%)", config.nulls_threshold * 100.0)),
        );
    }
    summary.add_nulls_drops(dropped);
    summary.timing.nulls = step_start.elapsed();
    print_step_time(summary.timing.nulls);

    // Step 2: Numerical variance
    print_step_header(2, "Numerical Variance Analysis");

    let step_start = Instant::now();
    let spinner = create_spinner("Describing numeric columns...");
    let (lf, variance_summary) =
        filter_numerical_variance(&lf, config.std_thresholds, config.variance_inclusive)?;
    finish_with_success(
        &spinner,
        &format!("Described {} numeric column(s)", variance_summary.len()),
    );

    let dropped = variance_summary.dropped_columns();
    if dropped.is_empty() {
        print_info("No numeric columns outside the std band");
    } else {
        print_count(
            "numeric column(s) outside the std band",
            dropped.len(),
            Some(&config.std_thresholds.to_string()),
        );
    }
    summary.add_variance_drops(dropped);
    summary.timing.variance = step_start.elapsed();
    print_step_time(summary.timing.variance);

    // Step 3: Entropy
    print_step_header(3, "Categorical Entropy Analysis");

    let step_start = Instant::now();
    let spinner = create_spinner("Computing entropies...");
    let (lf, entropy_summary) = filter_entropy_with_base(
        &lf,
        config.entropy_thresholds,
        config.entropy_inclusive,
        config.entropy_base,
    )?;
    finish_with_success(
        &spinner,
        &format!("Scored {} categorical column(s)", entropy_summary.len()),
    );

    let dropped = entropy_summary.dropped_columns();
    if dropped.is_empty() {
        print_info("No categorical columns outside the entropy band");
    } else {
        print_count(
            "categorical column(s) outside the entropy band",
            dropped.len(),
            Some(&config.entropy_thresholds.to_string()),
        );
    }
    summary.add_entropy_drops(dropped);
    summary.timing.entropy = step_start.elapsed();
    print_step_time(summary.timing.entropy);

    let report = ColumnReport::merge(&nulls_summary, &variance_summary, &entropy_summary);
    summary.display();

    if !cli.no_confirm
        && summary.total_dropped() > 0
        && !confirm_drop_columns(summary.total_dropped(), summary.final_columns)?
    {
        println!("Cancelled by user.");
        return Ok(());
    }

    // Step 4: Save output
    print_step_header(4, "Save Results");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    let (rows, cols) = save_dataset(lf, &output_path)?;
    finish_with_success(
        &spinner,
        &format!(
            "Saved {} rows x {} columns to {}",
            rows,
            cols,
            output_path.display()
        ),
    );

    report.export_json(
        &report_path,
        ReportMetadata::new(&cli.input, &output_path, config),
    )?;
    print_success(&format!("Column report written to {}", report_path.display()));

    summary.timing.save = step_start.elapsed();
    print_step_time(summary.timing.save);

    println!();
    println!("    {}", style("COLUMN DETAILS").white().bold());
    for line in report.to_table().to_string().lines() {
        println!("    {}", line);
    }

    print_completion(summary.timing.total());

    Ok(())
}
