use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use shopsync_core::{DataSource, Error as CoreError, Snapshot};
use shopsync_ingest::{IngestOptions, run_integration};
use shopsync_report::{
    Query, render_full_report, render_query_table, render_validation_report, run_query,
};
use shopsync_store::{AnyStore, FixtureStore, LiveStore};
use shopsync_validate::validate_snapshot;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("validation failed with {0} issue(s)")]
    ValidationFailed(usize),
}

#[derive(Parser, Debug)]
#[command(name = "shopsync", version, about = "Shopsync CLI")]
struct Cli {
    /// Path to the SQLite integration database.
    #[arg(long, global = true, default_value = "integration.db")]
    db: PathBuf,
    /// Use the built-in sample dataset instead of the database.
    #[arg(long, global = true, default_value_t = false)]
    fixture: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full integration: schema, imports, order seeding.
    Ingest(IngestArgs),
    /// Validate the current snapshot and print the report.
    Validate(ValidateArgs),
    /// Print an aggregate business report.
    Report(ReportArgs),
    /// Run a predefined ad-hoc query.
    Query(QueryArgs),
}

#[derive(Args, Debug)]
struct IngestArgs {
    /// SQL dump from the Customer Data System.
    #[arg(long, default_value = "customer_data.sql")]
    customers: PathBuf,
    /// CSV feed from the Product Data System.
    #[arg(long, default_value = "product_data.csv")]
    products: PathBuf,
    /// Skip seeding the sample order set.
    #[arg(long, default_value_t = false)]
    no_orders: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Exit non-zero when the snapshot fails hard validation.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Emit the report as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Optional path to also write the rendered report to.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[command(subcommand)]
    kind: ReportKind,
}

#[derive(Subcommand, Debug)]
enum ReportKind {
    /// Orders and revenue per product.
    ProductSales,
    /// Revenue per product category.
    CategorySummary,
    /// Top customers by revenue.
    TopCustomers {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Combined report with executive summary.
    Full,
}

#[derive(Args, Debug)]
struct QueryArgs {
    #[command(subcommand)]
    kind: QueryKind,
}

#[derive(Subcommand, Debug)]
enum QueryKind {
    /// Customer details joined with the products they ordered.
    CustomerOrderDetails,
    /// Order count and total value per customer.
    OrderValueByCustomer,
    /// Products priced within an inclusive range.
    PriceRange {
        #[arg(long, default_value_t = 50.0)]
        min: f64,
        #[arg(long, default_value_t = 200.0)]
        max: f64,
    },
    /// Customers whose total spend exceeds a threshold.
    BigSpenders {
        #[arg(long, default_value_t = 1000.0)]
        threshold: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let run_id = Uuid::new_v4().to_string();

    match cli.command {
        Command::Ingest(args) => run_ingest(&cli.db, cli.fixture, args, &run_id).await,
        Command::Validate(args) => run_validate(&cli.db, cli.fixture, args, &run_id).await,
        Command::Report(args) => {
            let snapshot = load_snapshot(&cli.db, cli.fixture).await?;
            print_report(&snapshot, args.kind);
            Ok(())
        }
        Command::Query(args) => {
            let snapshot = load_snapshot(&cli.db, cli.fixture).await?;
            let query = match args.kind {
                QueryKind::CustomerOrderDetails => Query::CustomerOrderDetails,
                QueryKind::OrderValueByCustomer => Query::OrderValueByCustomer,
                QueryKind::PriceRange { min, max } => Query::ProductsInPriceRange { min, max },
                QueryKind::BigSpenders { threshold } => Query::BigSpenders { threshold },
            };
            let table = run_query(&snapshot, &query);
            println!("{}", render_query_table(&table));
            Ok(())
        }
    }
}

/// The source is chosen once here; every subcommand works against the
/// same contract afterwards.
async fn resolve_source(db: &Path, fixture: bool) -> Result<AnyStore, CliError> {
    if fixture {
        return Ok(AnyStore::Fixture(FixtureStore));
    }
    Ok(AnyStore::Live(LiveStore::connect(db).await?))
}

async fn load_snapshot(db: &Path, fixture: bool) -> Result<Snapshot, CliError> {
    let source = resolve_source(db, fixture).await?;
    tracing::info!(event = "source_selected", kind = source.kind());
    Ok(source.snapshot().await?)
}

async fn run_ingest(
    db: &Path,
    fixture: bool,
    args: IngestArgs,
    run_id: &str,
) -> Result<(), CliError> {
    if fixture {
        return Err(CliError::InvalidConfig(
            "ingest requires a live database; drop --fixture".to_string(),
        ));
    }

    tracing::info!(event = "ingest_started", run_id, db = %db.display());
    let store = LiveStore::connect(db).await?;
    let options = IngestOptions {
        customer_sql: args.customers,
        product_csv: args.products,
        seed_orders: !args.no_orders,
    };
    let report = run_integration(&store, &options).await?;
    tracing::info!(
        event = "ingest_finished",
        run_id,
        customers = report.customers_loaded,
        products = report.products_loaded,
        products_skipped = report.products_skipped,
        orders = report.orders_created,
        orders_skipped = report.orders_skipped
    );

    let snapshot = store.snapshot().await?;
    let validation = validate_snapshot(&snapshot);
    println!("{}", render_validation_report(&validation));
    Ok(())
}

async fn run_validate(
    db: &Path,
    fixture: bool,
    args: ValidateArgs,
    run_id: &str,
) -> Result<(), CliError> {
    tracing::info!(event = "validation_started", run_id);
    let snapshot = load_snapshot(db, fixture).await?;
    let report = validate_snapshot(&snapshot);
    tracing::info!(
        event = "validation_finished",
        run_id,
        overall_valid = report.overall_valid,
        hard_issues = report.hard_issue_count(),
        advisory_issues = report.consistency.issues.len()
    );

    let rendered = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        render_validation_report(&report)
    };
    if let Some(path) = &args.out {
        std::fs::write(path, rendered.as_bytes())?;
    }
    println!("{rendered}");

    if args.strict && !report.overall_valid {
        return Err(CliError::ValidationFailed(report.hard_issue_count()));
    }
    Ok(())
}

fn print_report(snapshot: &Snapshot, kind: ReportKind) {
    match kind {
        ReportKind::ProductSales => {
            for row in shopsync_report::product_sales_report(snapshot) {
                println!(
                    "{:<6} {:<30} {:<14} orders={:<4} qty={:<5} revenue={:>10.2}",
                    row.product_id,
                    row.product_name,
                    row.category,
                    row.total_orders,
                    row.total_quantity_sold,
                    row.total_revenue
                );
            }
        }
        ReportKind::CategorySummary => {
            for row in shopsync_report::category_summary(snapshot) {
                println!(
                    "{:<16} products={:<4} orders={:<4} revenue={:>10.2}",
                    row.category, row.product_count, row.total_orders, row.category_revenue
                );
            }
        }
        ReportKind::TopCustomers { limit } => {
            for row in shopsync_report::top_customers_report(snapshot, limit) {
                println!(
                    "{:<6} {:<26} orders={:<4} revenue={:>10.2}",
                    row.customer_id, row.customer_name, row.total_orders, row.total_revenue
                );
            }
        }
        ReportKind::Full => println!("{}", render_full_report(snapshot)),
    }
}
