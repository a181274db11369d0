use clap::{Args, Subcommand};
use kasir_app::categories::{
    CategoriesService, PgCategoriesService, data::NewCategory, records::CategoryUuid,
};

#[derive(Debug, Args)]
pub(crate) struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    Create(CreateCategoryArgs),
}

#[derive(Debug, Args)]
struct CreateCategoryArgs {
    /// Category name
    #[arg(long)]
    name: String,

    #[arg(long)]
    description: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(command: CategoryCommand) -> Result<(), String> {
    match command.command {
        CategorySubcommand::Create(args) => create(args).await,
    }
}

async fn create(args: CreateCategoryArgs) -> Result<(), String> {
    let db = super::connect(&args.database_url).await?;

    let category = PgCategoriesService::new(db.clone())
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: args.name,
            description: args.description,
        })
        .await
        .map_err(|error| format!("failed to create category: {error}"))?;

    db.close().await;

    println!("category_uuid: {}", category.uuid);
    println!("category_name: {}", category.name);

    Ok(())
}
