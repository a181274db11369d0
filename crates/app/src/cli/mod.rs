use clap::{Parser, Subcommand};
use kasir_app::database::{self, Db};

mod category;
mod db;
mod product;

#[derive(Debug, Parser)]
#[command(name = "kasir-app", about = "Kasir CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Category(category::CategoryCommand),
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Category(command) => category::run(command).await,
            Commands::Product(command) => product::run(command).await,
        }
    }
}

async fn connect(database_url: &str) -> Result<Db, String> {
    database::connect(database_url, 1)
        .await
        .map(Db::new)
        .map_err(|error| format!("failed to connect to database: {error}"))
}
