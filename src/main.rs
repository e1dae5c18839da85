use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::service::PaymentService;
use payment_gateway::domain::ports::{BankClientBox, PaymentStoreBox};
use payment_gateway::infrastructure::bank_client::HttpBankClient;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::http::payments;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the API server to
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// URL of the acquiring bank's authorization endpoint
    #[arg(long, default_value = "http://localhost:8080/payments")]
    bank_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let bank: BankClientBox = Box::new(HttpBankClient::new(cli.bank_url));
    let service = Arc::new(PaymentService::new(store, bank));

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .into_diagnostic()?;
    info!(addr = %cli.bind, "payment gateway listening");

    axum::serve(listener, payments::router(service))
        .await
        .into_diagnostic()?;

    Ok(())
}
