use clap::{Parser, Subcommand};
use loancalc::application::calculator::LoanCalculatorService;
use loancalc::application::catalog::LoanCatalogService;
use loancalc::config::{GlobalArgs, MAX_TERM_YEARS, OutputFormat, Settings};
use loancalc::domain::calculation::CalculationRequest;
use loancalc::domain::ports::LoanProductRepositoryRef;
use loancalc::domain::product::{LoanProduct, LoanProductPatch, NewLoanProduct};
use loancalc::infrastructure::in_memory::InMemoryLoanProductRepository;
use loancalc::interfaces::csv::product_reader::ProductReader;
use loancalc::interfaces::csv::product_writer::ProductWriter;
use loancalc::interfaces::csv::schedule_writer::ScheduleWriter;
use loancalc::interfaces::json;
use log::{debug, info};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use simple_logger::SimpleLogger;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Loan product catalog and amortization calculator", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List loan products, optionally filtered by name
    List {
        #[arg(long)]
        name: Option<String>,
    },
    /// Show one loan product
    Show { id: u32 },
    /// Case-insensitive search on product names
    Search { term: String },
    /// Add a loan product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        min: Decimal,
        #[arg(long)]
        max: Decimal,
        /// Default annual rate as a fraction, e.g. 0.165
        #[arg(long)]
        rate: Decimal,
    },
    /// Change some fields of a loan product
    Update {
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        min: Option<Decimal>,
        #[arg(long)]
        max: Option<Decimal>,
        #[arg(long)]
        rate: Option<Decimal>,
    },
    /// Remove a loan product
    Delete { id: u32 },
    /// Compute the payment summary and amortization schedule for a loan
    Calculate {
        /// Exact product name
        #[arg(long)]
        loan: String,
        #[arg(long)]
        amount: Decimal,
        /// Term in whole years, at most 30
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_TERM_YEARS)))]
        years: u32,
        /// Annual rate override as a fraction
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<Decimal>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from(cli.global);

    SimpleLogger::new()
        .with_level(settings.log_level)
        .with_utc_timestamps()
        .init()
        .into_diagnostic()?;
    debug!("settings: {:?}", settings);

    let repository = open_repository(&settings)?;
    let catalog = LoanCatalogService::new(repository.clone());
    let calculator = LoanCalculatorService::new(repository);
    let stdout = io::stdout();

    match cli.command {
        Command::List { name } => {
            let products = catalog.list(name.as_deref()).await.into_diagnostic()?;
            print_products(&settings, &products)?;
        }
        Command::Show { id } => {
            let product = catalog.get(id).await.into_diagnostic()?;
            print_product(&settings, &product)?;
        }
        Command::Search { term } => {
            let products = catalog.search(&term).await.into_diagnostic()?;
            print_products(&settings, &products)?;
        }
        Command::Create {
            name,
            min,
            max,
            rate,
        } => {
            let product = NewLoanProduct {
                name,
                minimum_amount: min,
                maximum_amount: max,
                annual_interest_rate: rate,
            };
            let products = catalog.create(product).await.into_diagnostic()?;
            save_catalog(&settings, &products)?;
            print_products(&settings, &products)?;
        }
        Command::Update {
            id,
            name,
            min,
            max,
            rate,
        } => {
            let patch = LoanProductPatch {
                name,
                minimum_amount: min,
                maximum_amount: max,
                annual_interest_rate: rate,
            };
            let updated = catalog.update(id, patch).await.into_diagnostic()?;
            save_catalog(&settings, &catalog.list(None).await.into_diagnostic()?)?;
            print_product(&settings, &updated)?;
        }
        Command::Delete { id } => {
            catalog.delete(id).await.into_diagnostic()?;
            save_catalog(&settings, &catalog.list(None).await.into_diagnostic()?)?;
            let message = format!("Loan with id {id} deleted successfully");
            match settings.format {
                OutputFormat::Json => json::write_message(stdout.lock(), &message).into_diagnostic()?,
                OutputFormat::Csv => println!("{message}"),
            }
        }
        Command::Calculate {
            loan,
            amount,
            years,
            rate,
        } => {
            let mut request = CalculationRequest::new(amount, years);
            if let Some(rate) = rate {
                request = request.with_rate(rate);
            }
            let result = calculator
                .calculate(&loan, &request)
                .await
                .into_diagnostic()?;
            match settings.format {
                OutputFormat::Json => json::write_calculation(stdout.lock(), &result).into_diagnostic()?,
                OutputFormat::Csv => ScheduleWriter::new(stdout.lock())
                    .write_calculation(&result)
                    .into_diagnostic()?,
            }
        }
    }

    Ok(())
}

fn open_repository(settings: &Settings) -> Result<LoanProductRepositoryRef> {
    let store = match &settings.catalog {
        Some(path) => {
            let products = read_catalog(path)?;
            info!("loaded {} loan products from {}", products.len(), path.display());
            InMemoryLoanProductRepository::from_products(products).into_diagnostic()?
        }
        None => InMemoryLoanProductRepository::seeded(),
    };
    Ok(Arc::new(store.with_latency(settings.latency)))
}

fn read_catalog(path: &Path) -> Result<Vec<LoanProduct>> {
    let file = File::open(path).into_diagnostic()?;
    ProductReader::new(file)
        .products()
        .collect::<loancalc::error::Result<Vec<_>>>()
        .into_diagnostic()
}

/// Persists the catalog back to `--catalog`, if one was given.
fn save_catalog(settings: &Settings, products: &[LoanProduct]) -> Result<()> {
    if let Some(path) = &settings.catalog {
        let file = File::create(path).into_diagnostic()?;
        ProductWriter::new(file)
            .write_products(products)
            .into_diagnostic()?;
        info!("wrote {} loan products to {}", products.len(), path.display());
    }
    Ok(())
}

fn print_products(settings: &Settings, products: &[LoanProduct]) -> Result<()> {
    let stdout = io::stdout();
    match settings.format {
        OutputFormat::Json => json::write_products(stdout.lock(), products).into_diagnostic(),
        OutputFormat::Csv => ProductWriter::new(stdout.lock())
            .write_products(products)
            .into_diagnostic(),
    }
}

fn print_product(settings: &Settings, product: &LoanProduct) -> Result<()> {
    match settings.format {
        OutputFormat::Json => json::write_product(io::stdout().lock(), product).into_diagnostic(),
        OutputFormat::Csv => print_products(settings, std::slice::from_ref(product)),
    }
}
