use clap::{Args, Subcommand};
use kasir_app::{
    categories::records::CategoryUuid,
    products::{PgProductsService, ProductsService, data::NewProduct, records::ProductUuid},
};

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    Create(CreateProductArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Unit price in minor currency units
    #[arg(long)]
    price: u64,

    #[arg(long, default_value_t = 0)]
    stock: u32,

    /// Optional category UUID
    #[arg(long)]
    category: Option<CategoryUuid>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create(args).await,
    }
}

async fn create(args: CreateProductArgs) -> Result<(), String> {
    let db = super::connect(&args.database_url).await?;

    let product = PgProductsService::new(db.clone())
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: args.name,
            price: args.price,
            stock: args.stock,
            category: args.category,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    db.close().await;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);
    println!("price: {}", product.price);
    println!("stock: {}", product.stock);

    Ok(())
}
