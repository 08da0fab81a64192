mod cli_arguments;

use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use search_header_plugin::{
    header_supplier::{
        initialization_error::InitializationError, uuid_header_supplier::UuidHeaderSupplier,
    },
    search_client::{
        reqwest_search_client::ReqwestSearchClient, request::SearchRequest,
        search_client::SearchClient,
    },
};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::CliArguments;

fn build_supplier(args: &CliArguments) -> Result<UuidHeaderSupplier, InitializationError> {
    match &args.marker_file {
        Some(path) => UuidHeaderSupplier::with_marker_file(path),
        None => Ok(UuidHeaderSupplier::new()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let supplier = match build_supplier(&args) {
        Ok(supplier) => supplier,
        Err(err) => {
            let cause = std::error::Error::source(&err)
                .map(ToString::to_string)
                .unwrap_or_default();
            error!("Header supplier failed to start: {err}: {cause}");
            return ExitCode::FAILURE;
        }
    };

    let client = ReqwestSearchClient::new(Arc::new(supplier));
    let url = args.target_url();

    for _ in 0..args.requests {
        match client.execute(SearchRequest::get(url.as_str())).await {
            Ok(response) => info!("{} answered with status {}", url, response.status),
            Err(err) => {
                error!("Request to {} failed: {err}", url);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
