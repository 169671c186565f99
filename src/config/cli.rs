use crate::config::OutputFormat;
use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "ticket-pricer")]
#[command(about = "Movie ticket pricing by patron age and screening day")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// TOML file overriding the standard tariff
    #[arg(long, global = true)]
    pub tariff: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Price a single ticket
    #[command(group(ArgGroup::new("when").required(true).args(["day", "date"])))]
    Price {
        /// Patron age in years
        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        /// Screening day, e.g. `saturday` or `sat`
        #[arg(long, conflicts_with = "date")]
        day: Option<String>,

        /// Screening date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Show how the price was reached
        #[arg(long)]
        explain: bool,
    },

    /// Price every request in a CSV file
    Batch {
        /// CSV with an `age` column and a `day` or `date` column
        #[arg(short, long)]
        input: String,

        #[arg(short, long)]
        output: String,

        /// Defaults to the tariff file's output format, then csv
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_command() {
        let config =
            CliConfig::try_parse_from(["ticket-pricer", "price", "--age", "8", "--day", "sat"])
                .unwrap();
        match config.command {
            Command::Price { age, day, date, .. } => {
                assert_eq!(age, 8);
                assert_eq!(day.as_deref(), Some("sat"));
                assert!(date.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_price_requires_day_or_date() {
        assert!(CliConfig::try_parse_from(["ticket-pricer", "price", "--age", "8"]).is_err());
    }

    #[test]
    fn test_price_rejects_day_and_date_together() {
        let result = CliConfig::try_parse_from([
            "ticket-pricer",
            "price",
            "--age",
            "30",
            "--day",
            "fri",
            "--date",
            "2024-06-18",
        ]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn test_parse_price_by_date() {
        let config = CliConfig::try_parse_from([
            "ticket-pricer",
            "price",
            "--age",
            "30",
            "--date",
            "2024-06-18",
        ])
        .unwrap();
        match config.command {
            Command::Price { day, date, .. } => {
                assert!(day.is_none());
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 18));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_batch_command() {
        let config = CliConfig::try_parse_from([
            "ticket-pricer",
            "batch",
            "-i",
            "requests.csv",
            "-o",
            "prices.json",
            "--format",
            "json",
            "--verbose",
        ])
        .unwrap();
        assert!(config.verbose);
        match config.command {
            Command::Batch { format, .. } => assert_eq!(format, Some(OutputFormat::Json)),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
