use anyhow::Result;
use config::Config;

pub mod cli;
pub mod context;
pub mod display;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod queries;
pub mod schema;
pub mod search;
pub mod store;

use crate::context::SchoolContext;
use crate::store::SchoolStore;

/// Builds an uninitialized [`SchoolContext`] from the ambient configuration:
/// `DATABASE_URL` (possibly via `.env`) wins, then `school.database_path`
/// from `config.toml`, then the `school.db` default.
pub fn create_default_context() -> Result<SchoolContext> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .set_default("school.database_path", "school.db")?
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => settings.get_string("school.database_path")?,
    };

    let store = SchoolStore::open(&database_url)?;
    Ok(SchoolContext::new(store))
}
