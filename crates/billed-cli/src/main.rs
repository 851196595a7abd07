//! Billed CLI — command-line client for the Billed expense-report store.
//!
//! Configuration comes from the environment (BILLED_API_URL,
//! BILLED_UPLOAD_BASE_URL, BILLED_SESSION_PATH); every value has a local
//! default. Log in once, then submit bills or list what you sent.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use billed_app::{
    format_date, format_status, BillForm, BillsService, FileSessionStore, Navigator, Route,
    SelectionOutcome, StderrNotifier, SubmissionOutcome, SubmissionService,
};
use billed_cli::{init_tracing, media_type_for_path};
use billed_core::models::{SelectedReceipt, SessionUser};
use billed_core::Config;
use billed_store::HttpBillStore;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "billed", about = "Billed expense-report CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the employee session used by submit and list
    Login {
        /// Employee email
        email: String,
        /// Account type recorded in the session
        #[arg(long, default_value = "Employee")]
        r#type: String,
    },
    /// Remove the stored session
    Logout,
    /// Submit a new bill with an attached receipt image
    Submit {
        /// Path to the receipt image (JPG, JPEG or PNG)
        receipt: PathBuf,
        /// Expense category (e.g. "Transports")
        #[arg(long)]
        r#type: String,
        /// Expense name
        #[arg(long)]
        name: String,
        /// Amount, in whole currency units
        #[arg(long)]
        amount: String,
        /// Expense date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// VAT amount
        #[arg(long, default_value = "")]
        vat: String,
        /// VAT percentage (defaults to 20 when empty)
        #[arg(long, default_value = "")]
        pct: String,
        /// Free-form commentary
        #[arg(long, default_value = "")]
        commentary: String,
    },
    /// List the bills submitted by the logged-in employee
    List {
        /// Print raw JSON instead of the table
        #[arg(long)]
        json: bool,
    },
}

/// CLI rendition of the view switch: there is no view to swap, so the
/// route change lands in the logs.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = route.as_str(), "view changed");
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to read configuration")?;
    let session = Arc::new(FileSessionStore::new(config.session_path.clone()));

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, r#type } => {
            let user = SessionUser {
                email,
                user_type: r#type,
            };
            session.login(&user).context("Failed to store session")?;
            print_json(&user)?;
        }
        Commands::Logout => {
            session.logout().context("Failed to remove session")?;
            print_json(&serde_json::json!({ "success": true }))?;
        }
        Commands::Submit {
            receipt,
            r#type,
            name,
            amount,
            date,
            vat,
            pct,
            commentary,
        } => {
            let store = Arc::new(
                HttpBillStore::new(
                    &config.api_base_url,
                    Duration::from_secs(config.http_timeout_secs),
                )
                .context("Failed to create store client")?,
            );
            let service = SubmissionService::new(
                store,
                session.clone(),
                Arc::new(LogNavigator),
                Arc::new(StderrNotifier),
                config.upload_base_url.clone(),
            );

            let content = std::fs::read(&receipt)
                .with_context(|| format!("Failed to read receipt: {}", receipt.display()))?;
            let file_name = receipt
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("receipt.jpg")
                .to_string();
            let selected = SelectedReceipt {
                content,
                media_type: media_type_for_path(&receipt).to_string(),
                name: file_name,
            };

            // The service has already alerted on rejection.
            if service.select_receipt(Some(selected)).await != SelectionOutcome::Accepted {
                bail!("receipt was not accepted");
            }

            let form = BillForm {
                expense_type: r#type,
                name,
                amount,
                date,
                vat,
                pct,
                commentary,
            };
            match service.submit(form).await? {
                SubmissionOutcome::Submitted(draft) => print_json(&draft)?,
                _ => bail!("bill was not submitted"),
            }
        }
        Commands::List { json } => {
            let store = Arc::new(
                HttpBillStore::new(
                    &config.api_base_url,
                    Duration::from_secs(config.http_timeout_secs),
                )
                .context("Failed to create store client")?,
            );
            let service = BillsService::new(store, session.clone());
            let bills = service.bills().await?;

            if json {
                print_json(&bills)?;
            } else {
                for bill in &bills {
                    let amount = bill
                        .amount
                        .map(|a| format!("{} €", a))
                        .unwrap_or_else(|| "—".to_string());
                    println!(
                        "{:<12} {:<25} {:>10}  {}",
                        format_date(&bill.date),
                        bill.name,
                        amount,
                        format_status(bill.status.as_deref().unwrap_or("")),
                    );
                }
            }
        }
    }

    Ok(())
}
