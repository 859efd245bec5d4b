use stdmodel_core::{driver::Driver, Error, Result};

use url::Url;

/// Builds the driver named by the scheme of `url`.
pub(crate) async fn connect(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|e| Error::invalid_connection_url(format!("{e}; url={url}")))?;

    match parsed.scheme() {
        "mysql" => connect_mysql(url),
        "postgresql" | "postgres" => connect_postgresql(url).await,
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "mysql")]
fn connect_mysql(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(stdmodel_driver_mysql::MySQL::new(url)?))
}

#[cfg(not(feature = "mysql"))]
fn connect_mysql(url: &str) -> Result<Box<dyn Driver>> {
    Err(feature_disabled("mysql", url))
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(
        stdmodel_driver_postgresql::PostgreSQL::connect(url).await?,
    ))
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(url: &str) -> Result<Box<dyn Driver>> {
    Err(feature_disabled("postgresql", url))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(stdmodel_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Err(feature_disabled("sqlite", url))
}

#[allow(dead_code)]
fn feature_disabled(feature: &str, url: &str) -> Error {
    Error::invalid_connection_url(format!("`{feature}` feature not enabled; url={url}"))
}
