use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "price-compare")]
#[command(about = "Compare a Marlin price list with a Website price list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Auto-detect both price lists and write the comparison report
    Compare {
        /// Marlin price workbook
        #[arg(required = true)]
        marlin: PathBuf,

        /// Website price workbook
        #[arg(required = true)]
        website: PathBuf,

        /// Output file or directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Largest price difference still counted as a match
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Print detections and report as JSON instead of progress text
        #[arg(long)]
        json: bool,
    },

    /// Show which sheet and columns would be used for a workbook
    Detect {
        /// Price workbook
        #[arg(required = true)]
        file: PathBuf,

        /// Print the detection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write blank Marlin/Website templates
    Template {
        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit settings
    Config {
        /// Set the default tolerance
        #[arg(long)]
        set_tolerance: Option<f64>,

        /// Set the default report file name
        #[arg(long)]
        set_report_name: Option<String>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compare() {
        let cli = Cli::parse_from([
            "price-compare", "compare", "m.xlsx", "w.xlsx", "-o", "out", "--tolerance", "0.05",
        ]);
        match cli.command {
            Commands::Compare { marlin, website, output, tolerance, json } => {
                assert_eq!(marlin, PathBuf::from("m.xlsx"));
                assert_eq!(website, PathBuf::from("w.xlsx"));
                assert_eq!(output, Some(PathBuf::from("out")));
                assert_eq!(tolerance, Some(0.05));
                assert!(!json);
            }
            _ => panic!("expected compare"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::parse_from(["price-compare", "detect", "m.xlsx", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Detect { .. }));
    }

    #[test]
    fn test_parse_detect_json() {
        let cli = Cli::parse_from(["price-compare", "detect", "m.xlsx", "--json"]);
        assert!(matches!(cli.command, Commands::Detect { json: true, .. }));
    }

    #[test]
    fn test_compare_requires_both_files() {
        assert!(Cli::try_parse_from(["price-compare", "compare", "m.xlsx"]).is_err());
    }
}
