use std::{sync::Arc, time::Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::load_settings, submit, CustomerListController, DeleteOutcome, DirectoryClient,
    HttpDirectoryClient, RegistrationForm, SessionTimer, SubmitOutcome,
};
use shared::domain::{CustomerId, CustomerRecord};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "playtime", about = "PlayTime machine control")]
struct Args {
    /// Directory API base url. Overrides playtime.toml and PLAYTIME_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered customer.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Register a customer on a computer.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        computer: String,
    },
    /// Remove a customer by id.
    Delete { id: String },
    /// Run a one-hour session countdown in the terminal.
    Timer {
        #[arg(long)]
        customer: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_base_url = api_url;
    }
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let directory: Arc<dyn DirectoryClient> = Arc::new(
        HttpDirectoryClient::new(&settings.api_base_url)
            .with_context(|| format!("invalid api url '{}'", settings.api_base_url))?,
    );
    let mut controller = CustomerListController::new(directory);

    match args.command {
        Command::List { json } => {
            controller.load().await.context("failed to load customers")?;
            let customers = controller.customers();
            if json {
                println!("{}", serde_json::to_string_pretty(customers.as_slice())?);
            } else if customers.is_empty() {
                println!("No customers registered.");
            } else {
                for customer in customers.iter() {
                    println!("{}", summary_line(customer));
                }
            }
        }
        Command::Add {
            name,
            email,
            computer,
        } => {
            let mut form = RegistrationForm {
                name,
                email,
                computer_label: computer,
            };
            match submit(&mut form, &mut controller)
                .await
                .context("failed to register customer")?
            {
                SubmitOutcome::Created(customer) => println!("{}", summary_line(&customer)),
                SubmitOutcome::Dropped(field) => bail!("{field} must not be empty"),
            }
        }
        Command::Delete { id } => {
            let id = CustomerId::new(id);
            match controller.delete(&id).await {
                DeleteOutcome::Removed => println!("Removed {id}"),
                DeleteOutcome::Failed { error, resynced } => {
                    if resynced && !controller.customers().contains(&id) {
                        println!("Removed {id} (confirmed by reload)");
                    } else {
                        bail!("failed to delete {id}: {error}");
                    }
                }
            }
        }
        Command::Timer { customer } => {
            let label = match customer {
                Some(id) => {
                    controller.load().await.context("failed to load customers")?;
                    let id = CustomerId::new(id);
                    let Some(customer) = controller.customers().get(&id) else {
                        bail!("no customer with id {id}");
                    };
                    format!("{} @ {}", customer.name, customer.computer_label)
                }
                None => "session".to_string(),
            };
            run_countdown(&label).await?;
        }
    }

    Ok(())
}

fn summary_line(customer: &CustomerRecord) -> String {
    format!(
        "{}  {:<24} {:<28} {:<10} {}",
        customer.id,
        customer.name,
        customer.email,
        customer.computer_label,
        customer.status_label()
    )
}

async fn run_countdown(label: &str) -> Result<()> {
    let mut timer = SessionTimer::new();
    timer.start(Instant::now());
    info!(label, "session timer started");
    println!("{label}: {}", timer.display());

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while let Some(next_tick_at) = timer.next_tick_at() {
        tokio::select! {
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(next_tick_at)) => {
                timer.advance(Instant::now());
                println!("{label}: {}", timer.display());
            }
            result = &mut ctrl_c => {
                result.context("failed to listen for ctrl-c")?;
                timer.reset();
                info!(label, "session timer stopped");
                println!("{label}: stopped");
                return Ok(());
            }
        }
    }

    println!("{label}: time is up");
    Ok(())
}
