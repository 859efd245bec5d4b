use stdmodel::{driver::Upsert, Models};

#[tokio::test]
async fn connect_sqlite_in_memory() {
    let models = Models::connect("sqlite::memory:").await.unwrap();
    assert_eq!(models.capability().upsert, Upsert::OnConflict);
    assert!(models.capability().returning);
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = Models::connect("redis://localhost:6379").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
    assert_eq!(
        err.to_string(),
        "invalid connection URL: unsupported database; scheme=redis; url=redis://localhost:6379"
    );
}

#[tokio::test]
async fn malformed_url() {
    let err = Models::connect("not a url").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[cfg(not(feature = "mysql"))]
#[tokio::test]
async fn driver_feature_disabled() {
    let err = Models::connect("mysql://localhost/app").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
    assert_eq!(
        err.to_string(),
        "invalid connection URL: `mysql` feature not enabled; url=mysql://localhost/app"
    );
}
