//! Gravitino command-line interface

mod catalog;
mod fileset;
mod metalake;
mod schema;

use std::error::Error;

use catalog::Catalog;
use clap::{Args, Parser, Subcommand};
use fileset::Fileset;
use gravitino_sdk::{Client, Result};
use metalake::Metalake;
use schema::Schema;
use serde::Serialize;
use tracing::debug;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, env = "GRAVITINO_URI", default_value = "http://127.0.0.1:8090")]
    uri: String,

    #[arg(long, env = "GRAVITINO_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "show the server version")]
    Version,
    #[command(about = "manage metalakes")]
    Metalake(Metalake),
    #[command(about = "manage catalogs in a metalake")]
    Catalog(Catalog),
    #[command(about = "manage schemas in a catalog")]
    Schema(Schema),
    #[command(about = "manage filesets in a fileset catalog")]
    Fileset(Fileset),
}

/// Metalake the command operates in.
#[derive(Args, Debug)]
pub(crate) struct MetalakeArg {
    #[arg(long, env = "GRAVITINO_METALAKE")]
    metalake: String,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    debug!(uri = %cli.uri, "using server");

    let sdk = Client::new(&cli.uri);
    sdk.set_token(cli.token).await;

    match cli.command {
        Commands::Version => handle_resp(sdk.version.server_version().await),
        Commands::Metalake(metalake) => report(metalake.handle(&sdk).await),
        Commands::Catalog(catalog) => report(catalog.handle(&sdk).await),
        Commands::Schema(schema) => report(schema.handle(&sdk).await),
        Commands::Fileset(fileset) => report(fileset.handle(&sdk).await),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hyper=off,reqwest=off,info"));

    let subscriber = tracing_subscriber::Registry::default()
        .with(ErrorLayer::default())
        .with(env_filter)
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr));

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to setup tracing subscriber: {err}");
    }
}

/// Parse a single key-value pair
pub(crate) fn parse_key_val<T, U>(
    s: &str,
) -> std::result::Result<(T, U), Box<dyn Error + Send + Sync + 'static>>
where
    T: std::str::FromStr,
    T::Err: Error + Send + Sync + 'static,
    U: std::str::FromStr,
    U::Err: Error + Send + Sync + 'static,
{
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].parse()?, s[pos + 1..].parse()?))
}

pub(crate) fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("Error: {e}"),
    }
}

pub(crate) fn handle_resp<T: Serialize>(resp: Result<T>) {
    match resp {
        Ok(resp) => print_json(&resp),
        Err(e) => println!("Error: {e}"),
    }
}

pub(crate) fn report(resp: Result<()>) {
    if let Err(e) = resp {
        println!("Error: {e}");
    }
}
