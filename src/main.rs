use std::env;

use dotenvy::dotenv;
use financas::{backend, cli, store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "server" {
        let pool = store::connection::get_db_pool(&store::connection::database_url()).await?;
        store::migrate::run_migrations(&pool).await?;
        backend::run_server(pool).await?;
    } else {
        cli::run().await?;
    }
    Ok(())
}
