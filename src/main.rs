use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use price_compare::{cli, config, error, export, input, logging, progress};
use price_compare_common::{compare_workbooks, detect_workbook, CompareOptions, DetectionResult, PriceList};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::PathBuf;
use std::time::Duration;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // errors are shown verbatim
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Compare { marlin, website, output, tolerance, json } => {
            let tolerance = config.effective_tolerance(tolerance)?;
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let path = export::report_output_path(&output_dir, &config.report_file_name);

            if json {
                let marlin_bytes = input::read_workbook_file(&marlin)?;
                let website_bytes = input::read_workbook_file(&website)?;
                let outcome = compare_workbooks(&marlin_bytes, &website_bytes, &CompareOptions { tolerance })?;
                export::write_report(&outcome.report_bytes, &path)?;
                println!("{}", export::comparison_json(&outcome)?);
                return Ok(());
            }

            println!("📊 price-compare - price comparison\n");

            println!("{}", progress::step(1, "Reading workbooks..."));
            let marlin_bytes = input::read_workbook_file(&marlin)?;
            let website_bytes = input::read_workbook_file(&website)?;
            println!("✔ Marlin: {}", marlin.display());
            println!("✔ Website: {}\n", website.display());

            println!(
                "{}",
                progress::step(2, &format!("Auto-detecting columns and comparing (tolerance {})...", tolerance))
            );
            let spinner = spinner("Auto-detecting columns and comparing…");
            let outcome = compare_workbooks(&marlin_bytes, &website_bytes, &CompareOptions { tolerance });
            spinner.finish_and_clear();
            let outcome = outcome?;

            for (label, side) in [("Marlin", &outcome.marlin), ("Website", &outcome.website)] {
                print_detection(label, &side.result);
                print_preview(&side.prices, config.preview_rows);
            }
            println!();

            println!("{}", progress::step(3, "Writing report..."));
            export::write_report(&outcome.report_bytes, &path)?;
            println!("✔ Report: {}\n", path.display());

            println!("{}", progress::step(4, "Summary"));
            for (metric, value) in &outcome.report.summary.entries {
                println!("  {}: {}", metric, value);
            }

            println!("\n✅ Report ready");
        }

        Commands::Detect { file, json } => {
            let bytes = input::read_workbook_file(&file)?;
            let side = detect_workbook(&bytes)?;

            if json {
                println!("{}", export::detection_json(&side, config.preview_rows)?);
                return Ok(());
            }

            println!("🔎 price-compare - auto-detection\n");
            print_detection(&file.display().to_string(), &side.result);
            println!("  Confidence: {}", side.result.confidence);
            println!("  Rows: {}\n", side.prices.len());
            print_preview(&side.prices, config.preview_rows);
        }

        Commands::Template { output } => {
            println!("📥 price-compare - templates\n");

            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            for path in export::write_templates(&dir)? {
                println!("✔ {}", path.display());
            }
        }

        Commands::Config { set_tolerance, set_report_name, show } => {
            let mut config = config;

            if let Some(tolerance) = set_tolerance {
                config.set_tolerance(tolerance)?;
                println!("✔ Tolerance set to {}", tolerance);
            }

            if let Some(name) = set_report_name {
                config.set_report_file_name(name)?;
                println!("✔ Report file name set");
            }

            if show {
                println!("Settings:");
                println!("  Tolerance: {}", config.tolerance);
                println!("  Report file name: {}", config.report_file_name);
                println!("  Preview rows: {}", config.preview_rows);
                println!("  Path: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_detection(label: &str, result: &DetectionResult) {
    println!(
        "✔ {}: sheet '{}', code column '{}', price column '{}'",
        label, result.sheet, result.code_column, result.price_column
    );
}

fn print_preview(prices: &PriceList, rows: usize) {
    for line in progress::preview_lines(prices, rows) {
        println!("{}", line);
    }
}
