use pretty_assertions::assert_eq;
use serde_json::json;
use stdmodel::{stmt::Value, Filter, Model};
use tests::Test;

#[derive(Debug, Clone, Default, PartialEq, Model)]
struct User {
    #[key]
    #[auto]
    id: i64,

    name: String,

    email: String,

    #[model(update)]
    updated_at: String,
}

#[derive(Debug, Default, Filter)]
struct UserFilter {
    #[field]
    name: Option<String>,

    #[field("email")]
    email_address: Option<String>,

    #[allow(dead_code)]
    note: String,
}

async fn seed(test: &mut Test) -> Vec<User> {
    let mut users = vec![];

    for name in ["Alice", "Bob", "Carol"] {
        let mut user = User {
            id: 0,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            updated_at: "2024-01-01".to_string(),
        };
        test.models.create(&mut user).await.unwrap();
        users.push(user);
    }

    test.log().clear();
    users
}

#[tokio::test]
async fn find_by_derived_filter() {
    let mut test = Test::new();
    let users = seed(&mut test).await;

    let filter = UserFilter {
        email_address: Some("bob@example.com".to_string()),
        note: "ignored".to_string(),
        ..UserFilter::default()
    };

    let mut found = User::default();
    test.models.find(&mut found, &filter).await.unwrap();
    assert_eq!(found, users[1]);

    let (sql, params) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "name", "email", "updated_at" FROM "users" WHERE "email" = ?1 LIMIT 1;"#
    );
    assert_eq!(params, vec![Value::from("bob@example.com")]);
}

#[tokio::test]
async fn find_binds_every_present_field() {
    let mut test = Test::new();
    seed(&mut test).await;

    let filter = UserFilter {
        name: Some("Alice".to_string()),
        email_address: Some("bob@example.com".to_string()),
        ..UserFilter::default()
    };

    let mut found = User::default();
    let err = test.models.find(&mut found, filter).await.unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(
        err.to_string(),
        "failed to find record in `users`: record not found: table=users"
    );

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "name", "email", "updated_at" FROM "users" WHERE "name" = ?1 AND "email" = ?2 LIMIT 1;"#
    );
}

#[tokio::test]
async fn find_without_constraints() {
    let mut test = Test::new();
    let users = seed(&mut test).await;

    let mut found = User::default();
    test.models.find(&mut found, ()).await.unwrap();
    assert_eq!(found, users[0]);

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "name", "email", "updated_at" FROM "users" LIMIT 1;"#
    );
}

#[tokio::test]
async fn list_replaces_contents() {
    let mut test = Test::new();
    let users = seed(&mut test).await;

    let mut listed = vec![User::default(), User::default()];
    let filter = UserFilter {
        name: Some("Carol".to_string()),
        ..UserFilter::default()
    };
    test.models.list(&mut listed, &filter).await.unwrap();
    assert_eq!(listed, vec![users[2].clone()]);

    test.models.list(&mut listed, ()).await.unwrap();
    assert_eq!(listed, users);

    test.models
        .list(&mut listed, Option::<UserFilter>::None)
        .await
        .unwrap();
    assert_eq!(listed.len(), 3);

    let filter = UserFilter {
        name: Some("Nobody".to_string()),
        ..UserFilter::default()
    };
    test.models.list(&mut listed, &filter).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn list_with_json_filter() {
    let mut test = Test::new();
    let users = seed(&mut test).await;

    let mut listed: Vec<User> = vec![];
    test.models
        .list(&mut listed, json!({ "name": "Bob", "email": null }))
        .await
        .unwrap();
    assert_eq!(listed, vec![users[1].clone()]);

    let (sql, params) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "name", "email", "updated_at" FROM "users" WHERE "name" = ?1;"#
    );
    assert_eq!(params, vec![Value::from("Bob")]);

    test.models
        .list(&mut listed, serde_json::Value::Null)
        .await
        .unwrap();
    assert_eq!(listed.len(), 3);

    test.models
        .list(&mut listed, json!({ "id": users[2].id }))
        .await
        .unwrap();
    assert_eq!(listed, vec![users[2].clone()]);
}

#[tokio::test]
async fn invalid_json_filter() {
    let mut test = Test::new();
    seed(&mut test).await;

    let mut listed = vec![];

    let err = test
        .models
        .list::<User, _>(&mut listed, json!("Alice"))
        .await
        .unwrap_err();
    assert!(err.is_invalid_filter_type());
    assert_eq!(
        err.to_string(),
        "failed to list records from `users`: invalid filter type: string"
    );

    let err = test
        .models
        .list::<User, _>(&mut listed, json!({ "name": ["Alice", "Bob"] }))
        .await
        .unwrap_err();
    assert!(err.is_invalid_filter_type());
    assert_eq!(
        err.to_string(),
        "failed to list records from `users`: invalid filter type: array (column `name`)"
    );

    let mut found = User::default();
    let err = test.models.find(&mut found, json!(7)).await.unwrap_err();
    assert!(err.is_invalid_filter_type());

    // Nothing reached the database
    assert!(test.log().is_empty());
}
