use showroom_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, 1).await?;
    let orm = create_orm_conn(&pool);

    let applied = run_migrations(&orm).await?;
    if applied.is_empty() {
        println!("No migration files found");
    }
    for file in &applied {
        println!("Applied {file}");
    }
    Ok(())
}
