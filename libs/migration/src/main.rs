//! Standalone migration runner for the `tasks` schema.
//!
//! Reads `DATABASE_URL`; run `migration up`, `migration down` or `migration status`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
