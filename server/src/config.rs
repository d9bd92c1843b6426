use clap::Parser;
use std::net::SocketAddr;

/// Command line and environment configuration for the server binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "recipe-server")]
#[command(about = "JSON CRUD API for recipes", long_about = None)]
pub struct Config {
    /// SQLite database location (a file path, or :memory:)
    #[arg(long, env = "DATABASE_URL", default_value = "recipe.db")]
    pub database_url: String,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Print the OpenAPI spec as JSON and exit
    #[arg(long)]
    pub openapi: bool,
}
