//! Cleaning summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of the column cleaning process
#[derive(Debug, Default)]
pub struct CleaningSummary {
    pub initial_columns: usize,
    pub final_columns: usize,
    pub dropped_nulls: Vec<String>,
    pub dropped_variance: Vec<String>,
    pub dropped_entropy: Vec<String>,
    pub timing: StageTimings,
}

/// Wall-clock time spent per step
#[derive(Debug, Default, Clone)]
pub struct StageTimings {
    pub nulls: Duration,
    pub variance: Duration,
    pub entropy: Duration,
    pub save: Duration,
}

impl StageTimings {
    pub fn total(&self) -> Duration {
        self.nulls + self.variance + self.entropy + self.save
    }
}

impl CleaningSummary {
    pub fn new(initial_columns: usize) -> Self {
        Self {
            initial_columns,
            final_columns: initial_columns,
            ..Default::default()
        }
    }

    pub fn add_nulls_drops(&mut self, columns: Vec<String>) {
        self.final_columns -= columns.len();
        self.dropped_nulls = columns;
    }

    pub fn add_variance_drops(&mut self, columns: Vec<String>) {
        self.final_columns -= columns.len();
        self.dropped_variance = columns;
    }

    pub fn add_entropy_drops(&mut self, columns: Vec<String>) {
        self.final_columns -= columns.len();
        self.dropped_entropy = columns;
    }

    pub fn total_dropped(&self) -> usize {
        self.initial_columns - self.final_columns
    }

    /// Percentage of columns removed
    pub fn reduction_pct(&self) -> f64 {
        if self.initial_columns > 0 {
            (self.total_dropped() as f64 / self.initial_columns as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Render the summary as a table (without indentation).
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Initial Columns"),
            Cell::new(self.initial_columns),
        ]);

        for (label, dropped) in [
            ("Dropped (Missing)", &self.dropped_nulls),
            ("Dropped (Variance)", &self.dropped_variance),
            ("Dropped (Entropy)", &self.dropped_entropy),
        ] {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(dropped.len()).fg(if dropped.is_empty() {
                    Color::White
                } else {
                    Color::Red
                }),
            ]);
        }

        table.add_row(vec![
            Cell::new("Final Columns"),
            Cell::new(self.final_columns)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let reduction_pct = self.reduction_pct();
        let color = if reduction_pct > 30.0 {
            Color::Green
        } else if reduction_pct > 10.0 {
            Color::Yellow
        } else {
            Color::Cyan
        };

        table.add_row(vec![
            Cell::new("Reduction"),
            Cell::new(format!("{:.1}%", reduction_pct))
                .fg(color)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!("    {}", style("CLEANING SUMMARY").white().bold());
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }

        let groups = [
            ("High Missing Values", &self.dropped_nulls),
            ("Variance Out of Band", &self.dropped_variance),
            ("Entropy Out of Band", &self.dropped_entropy),
        ];

        if groups.iter().all(|(_, dropped)| dropped.is_empty()) {
            return;
        }

        println!();
        println!("    {}", style("DROPPED COLUMNS").white().bold());
        println!("    {}", style("─".repeat(50)).dim());

        for (title, dropped) in groups {
            if dropped.is_empty() {
                continue;
            }
            println!();
            println!(
                "      {} {}:",
                style(title).yellow(),
                style(format!("({})", dropped.len())).dim()
            );
            for column in dropped {
                println!("        {} {}", style("•").dim(), column);
            }
        }
    }
}
