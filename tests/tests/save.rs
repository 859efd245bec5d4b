use pretty_assertions::assert_eq;
use stdmodel::{
    stmt::{ConflictAction, Statement},
    update_columns, Model,
};
use tests::{Test, NO_RETURNING, PLAIN_SQL};

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

#[derive(Debug, Clone, Default, PartialEq, Model)]
struct Post {
    #[key]
    #[auto]
    id: i64,

    title: String,

    active: bool,

    deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Model)]
struct Tag {
    #[key]
    name: String,
}

fn alice() -> User {
    User {
        id: 1,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        updated_at: "2024-01-01".to_string(),
    }
}

async fn reload(test: &Test, id: i64) -> User {
    let mut user = User {
        id,
        ..User::default()
    };
    test.models.get(&mut user).await.unwrap();
    user
}

#[test]
fn resolves_update_columns() {
    assert_eq!(update_columns::<User>(&[]), ["updated_at"]);
    assert_eq!(update_columns::<User>(&["name"]), ["updated_at", "name"]);
    assert_eq!(
        update_columns::<User>(&["name", "updated_at", "name"]),
        ["updated_at", "name"]
    );
    assert!(update_columns::<Post>(&[]).is_empty());
}

#[tokio::test]
async fn save_inserts_missing_row() {
    let mut test = Test::new();

    test.models.save(&alice(), &[]).await.unwrap();
    assert_eq!(reload(&test, 1).await, alice());

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"INSERT INTO "users" ("id", "name", "email", "updated_at") VALUES (?1, ?2, ?3, ?4) ON CONFLICT ("id") DO UPDATE SET "updated_at" = EXCLUDED."updated_at";"#
    );
}

#[tokio::test]
async fn save_updates_tagged_columns_only() {
    let test = Test::new();
    test.models.save(&alice(), &[]).await.unwrap();

    let changed = User {
        name: "Alicia".to_string(),
        updated_at: "2024-02-01".to_string(),
        ..alice()
    };
    test.models.save(&changed, &[]).await.unwrap();

    let stored = reload(&test, 1).await;
    assert_eq!(stored.name, "Alice");
    assert_eq!(stored.updated_at, "2024-02-01");
}

#[tokio::test]
async fn save_with_additional_columns() {
    let mut test = Test::new();
    test.models.save(&alice(), &[]).await.unwrap();
    test.log().clear();

    let changed = User {
        name: "Alicia".to_string(),
        updated_at: "2024-02-01".to_string(),
        ..alice()
    };
    test.models
        .save(&changed, &["name", "updated_at"])
        .await
        .unwrap();

    let (sql, _) = test.log().pop_sql();
    assert!(
        sql.ends_with(r#"ON CONFLICT ("id") DO UPDATE SET "updated_at" = EXCLUDED."updated_at", "name" = EXCLUDED."name";"#),
        "{sql}"
    );
    assert_eq!(sql.matches(r#""updated_at" = EXCLUDED"#).count(), 1);

    assert_eq!(reload(&test, 1).await, changed);
}

#[tokio::test]
async fn untagged_model_updates_every_column() {
    let mut test = Test::new();

    let mut post = Post {
        id: 0,
        title: "draft".to_string(),
        active: false,
        deleted: false,
    };
    test.models.create(&mut post).await.unwrap();
    test.log().clear();

    post.title = "published".to_string();
    post.active = true;
    test.models.save(&post, &[]).await.unwrap();

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"INSERT INTO "posts" ("id", "title", "active", "deleted") VALUES (?1, ?2, ?3, ?4) ON CONFLICT ("id") DO UPDATE SET "title" = EXCLUDED."title", "active" = EXCLUDED."active", "deleted" = EXCLUDED."deleted";"#
    );

    let mut stored = Post {
        id: post.id,
        ..Post::default()
    };
    test.models.get(&mut stored).await.unwrap();
    assert_eq!(stored, post);
}

#[tokio::test]
async fn key_only_model_does_nothing_on_conflict() {
    let mut test = Test::new();

    let tag = Tag {
        name: "rust".to_string(),
    };
    test.models.save(&tag, &[]).await.unwrap();
    test.models.save(&tag, &[]).await.unwrap();

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"INSERT INTO "tags" ("name") VALUES (?1) ON CONFLICT ("name") DO NOTHING;"#
    );

    let mut tags = vec![];
    test.models.list::<Tag, _>(&mut tags, ()).await.unwrap();
    assert_eq!(tags, vec![tag]);
}

#[tokio::test]
async fn on_duplicate_key_backend() {
    let mut test = Test::with_capability(Some(&NO_RETURNING));

    test.models.save(&alice(), &["name"]).await.unwrap();

    let Statement::Insert(insert) = test.log().pop_stmt() else {
        panic!("expected an insert");
    };
    let on_conflict = insert.on_conflict.expect("upsert clause");
    assert_eq!(on_conflict.target, ["id"]);
    assert_eq!(
        on_conflict.action,
        ConflictAction::DoUpdate(vec!["updated_at".to_string(), "name".to_string()])
    );
}

#[tokio::test]
async fn backend_without_upsert() {
    let mut test = Test::with_capability(Some(&PLAIN_SQL));

    // Generated keys come from the driver's last insert id
    let mut user = User {
        id: 0,
        ..alice()
    };
    test.models.create(&mut user).await.unwrap();
    assert_eq!(user.id, 1);
    test.log().clear();

    let err = test.models.save(&user, &[]).await.unwrap_err();
    assert!(err.is_driver());
    assert!(
        err.to_string()
            .starts_with("failed to save record to `users`: "),
        "{err}"
    );

    // Failed operations are not logged
    assert!(test.log().is_empty());

    test.models
        .save(
            &User {
                id: 2,
                email: "other@example.com".to_string(),
                ..alice()
            },
            &[],
        )
        .await
        .unwrap();

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"INSERT INTO "users" ("id", "name", "email", "updated_at") VALUES (?1, ?2, ?3, ?4);"#
    );
}
