//! Terminal styling for the command-line driver

use std::path::Path;
use std::time::Duration;

use console::style;

use crate::pipeline::FilterConfig;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("colsieve").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Drop columns by missing values, variance and entropy").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
}

/// Print configuration card
pub fn print_config(input: &Path, output: &Path, config: &FilterConfig) {
    let inclusive = |flag: bool| if flag { "inclusive" } else { "exclusive" };

    println!();
    println!("    {}", style("Configuration").cyan().bold());
    println!("      Input:              {}", truncate_path(input, 40));
    println!("      Output:             {}", truncate_path(output, 40));
    println!(
        "      Nulls threshold:    {}",
        style(format!("{:.1}%", config.nulls_threshold * 100.0)).yellow()
    );
    println!(
        "      Std band:           {} {}",
        style(config.std_thresholds).yellow(),
        style(inclusive(config.variance_inclusive)).dim()
    );
    println!(
        "      Entropy band:       {} {}",
        style(config.entropy_thresholds).yellow(),
        style(inclusive(config.entropy_inclusive)).dim()
    );
    if let Some(base) = config.entropy_base {
        println!("      Entropy log base:   {}", style(base).yellow());
    }
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("i").blue().bold(), message);
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    match detail {
        Some(info) => println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        ),
        None => println!("      Found {} {}", style(count).yellow().bold(), description),
    }
}

/// Print elapsed time for a step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("completed in {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion(total: Duration) {
    println!();
    println!(
        "    {} {}",
        style("Cleaning complete!").green().bold(),
        style(format!("({:.2}s)", total.as_secs_f64())).dim()
    );
    println!();
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    let chars: Vec<char> = path_str.chars().collect();
    if chars.len() <= max_len {
        path_str
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
