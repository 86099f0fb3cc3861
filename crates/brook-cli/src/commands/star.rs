use std::path::Path;

use brook_core::StarStatus;

use crate::commands::common::{normalize_url, open_database};
use crate::error::CliError;

pub async fn run_star(url: &str, status: StarStatus, db_path: &Path) -> Result<(), CliError> {
    let url = normalize_url(url)?;
    let db = open_database(db_path)?;

    match db.star_article(&url, status).await {
        Ok(()) => {}
        Err(brook_core::Error::NotFound(_)) => return Err(CliError::ArticleNotFound(url)),
        Err(e) => return Err(e.into()),
    }

    println!("{url}");
    Ok(())
}
