//! One-shot admin account creation:
//! `cargo run --bin create_admin -- <username> <password>`

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use uuid::Uuid;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let username = args
        .next()
        .expect("usage: create_admin <username> <password>");
    let password = args
        .next()
        .expect("usage: create_admin <username> <password>");

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("Failed to hash password")
        .to_string();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::connect(database_url)
        .await
        .expect("Failed to connect to postgres");

    db.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        r#"
        INSERT INTO users (id, username, password_hash, role, failed_login_count, created_at, updated_at)
        VALUES ($1, $2, $3, 'admin', 0, now(), now())
        "#,
        [
            Uuid::new_v4().into(),
            username.clone().into(),
            password_hash.into(),
        ],
    ))
    .await
    .expect("Failed to insert admin user");

    println!("Created admin user {username}");
}
