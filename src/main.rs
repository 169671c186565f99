use anyhow::Context;
use clap::Parser;
use ticket_pricer::config::Command;
use ticket_pricer::utils::error::ErrorSeverity;
use ticket_pricer::utils::logger;
use ticket_pricer::utils::validation::{validate_non_negative_age, Validate};
use ticket_pricer::{
    BatchPricer, CliConfig, CsvBatchPipeline, DayOfWeek, LocalStorage, PriceCalculator,
    PriceQuote, PricingError, TariffConfig, TicketPriceCalculator, TicketRequest,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.json_logs);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        match e.downcast_ref::<PricingError>() {
            Some(pricing_error) => {
                tracing::error!(
                    "{:#} (Category: {:?}, Severity: {:?})",
                    e,
                    pricing_error.category(),
                    pricing_error.severity()
                );
                eprintln!("❌ {}", pricing_error.user_friendly_message());
                eprintln!("💡 {}", pricing_error.recovery_suggestion());
                std::process::exit(exit_code(pricing_error.severity()));
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    let tariff_config = match &config.tariff {
        Some(path) => {
            tracing::info!("📁 Loading tariff from: {}", path);
            let tariff_config = TariffConfig::from_file(path)?;
            tariff_config.validate()?;
            tariff_config
        }
        None => TariffConfig::default(),
    };
    let calculator = TicketPriceCalculator::new(tariff_config.tariff());

    match config.command {
        Command::Price {
            age,
            day,
            date,
            explain,
        } => {
            let age = validate_non_negative_age("age", age)?;
            let request = match (day, date) {
                (None, Some(date)) => TicketRequest::for_date(age, date),
                (Some(day), None) => TicketRequest::new(age, day.parse::<DayOfWeek>()?),
                _ => {
                    return Err(PricingError::invalid_argument(
                        "day",
                        "exactly one of --day or --date is required",
                    )
                    .into())
                }
            };

            let quote = calculator.quote(&request);
            if explain {
                print_explanation(&quote);
            }
            println!("{}", quote.price);
        }
        Command::Batch {
            input,
            output,
            format,
        } => {
            let format = format
                .or_else(|| tariff_config.output_format())
                .unwrap_or_default();
            let pipeline =
                CsvBatchPipeline::new(LocalStorage::default(), calculator, &input, &output, format);

            let summary = BatchPricer::new(pipeline)
                .run()
                .with_context(|| format!("batch pricing of {} failed", input))?;

            println!("✅ Priced {} tickets", summary.tickets);
            println!("💰 Total revenue: {}", summary.total_revenue);
            println!("📁 Output saved to: {}", summary.output_path);
        }
    }

    Ok(())
}

fn print_explanation(quote: &PriceQuote) {
    println!("age:            {}", quote.request.age);
    println!("day:            {}", quote.request.day_of_week);
    println!("base price:     {:.2}", quote.base_price);
    println!(
        "child discount: {}",
        if quote.child_discount_applied { "yes" } else { "no" }
    );
    println!("day discount:   {:.0}%", quote.day_discount_rate * 100.0);
}
