use migration::{seed::seed_users, Migrator, MigratorTrait};
use sea_orm::Database;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL")
        .map_err(|_| eyre::eyre!("DATABASE_URL must be set to seed the database"))?;

    let db = Database::connect(&url).await?;
    Migrator::up(&db, None).await?;

    let count = seed_users(&db).await?;
    println!("✅ Base de datos poblada con {} usuarios de prueba", count);

    db.close().await?;
    Ok(())
}
