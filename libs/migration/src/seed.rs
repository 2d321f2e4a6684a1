//! Demo data for local development.

use sea_orm::{ConnectionTrait, DbErr};

/// Rows written by [`seed_users`], as `(name, email)`.
pub const SEED_USERS: [(&str, &str); 5] = [
    ("Juan Perez", "juan@mail.com"),
    ("Maria Lopez", "maria@mail.com"),
    ("Carlos Gomez", "carlos@mail.com"),
    ("Ana Torres", "ana@mail.com"),
    ("Luis Ramirez", "luis@mail.com"),
];

/// Replace every row of `users` with [`SEED_USERS`].
///
/// Ids keep counting from the table's sequence; they are not reset.
pub async fn seed_users<C: ConnectionTrait>(db: &C) -> Result<usize, DbErr> {
    db.execute_unprepared("DELETE FROM users").await?;

    let values = SEED_USERS
        .iter()
        .map(|(name, email)| format!("('{}', '{}')", name, email))
        .collect::<Vec<_>>()
        .join(", ");

    db.execute_unprepared(&format!("INSERT INTO users (name, email) VALUES {}", values))
        .await?;

    tracing::info!(count = SEED_USERS.len(), "Seeded users table");
    Ok(SEED_USERS.len())
}
