use pretty_assertions::assert_eq;
use stdmodel::{
    stmt::{Expr, Value},
    Filter, Model, QueryDefault, Select,
};
use tests::{Test, NO_RETURNING};

/// Reads skip soft-deleted posts. Implementing `QueryDefault` is all it takes.
#[derive(Debug, Clone, Default, PartialEq, Model)]
#[table = "posts"]
struct Post {
    #[key]
    #[auto]
    id: i64,

    title: String,

    active: bool,

    deleted: bool,
}

impl QueryDefault for Post {
    fn query_default(query: Select<Self>) -> Select<Self> {
        query.filter_eq("deleted", false)
    }
}

/// The same table, without a default scope
#[derive(Debug, Clone, Default, PartialEq, Model)]
#[table = "posts"]
struct RawPost {
    #[key]
    #[auto]
    id: i64,

    title: String,

    active: bool,

    deleted: bool,
}

#[derive(Debug, Default, Filter)]
struct PostFilter {
    #[field]
    active: Option<bool>,
}

async fn seed(test: &mut Test) -> Vec<Post> {
    let mut posts = vec![];

    for (title, active, deleted) in [("one", true, false), ("two", false, false), ("three", true, true)] {
        let mut post = Post {
            id: 0,
            title: title.to_string(),
            active,
            deleted,
        };
        test.models.create(&mut post).await.unwrap();
        posts.push(post);
    }

    test.log().clear();
    posts
}

#[tokio::test]
async fn list_applies_default_scope() {
    let mut test = Test::new();
    let posts = seed(&mut test).await;

    let mut listed: Vec<Post> = vec![];
    test.models.list(&mut listed, ()).await.unwrap();
    assert_eq!(listed, posts[..2].to_vec());

    let (sql, params) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "title", "active", "deleted" FROM "posts" WHERE "deleted" = ?1;"#
    );
    assert_eq!(params, vec![Value::Bool(false)]);

    let mut raw = vec![];
    test.models.list::<RawPost, _>(&mut raw, ()).await.unwrap();
    assert_eq!(raw.len(), 3);

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "title", "active", "deleted" FROM "posts";"#
    );
}

#[tokio::test]
async fn default_scope_precedes_filter() {
    let mut test = Test::new();
    let posts = seed(&mut test).await;

    let mut found = Post::default();
    let filter = PostFilter { active: Some(true) };
    test.models.find(&mut found, &filter).await.unwrap();
    assert_eq!(found, posts[0]);

    let (sql, params) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "title", "active", "deleted" FROM "posts" WHERE "deleted" = ?1 AND "active" = ?2 LIMIT 1;"#
    );
    assert_eq!(params, vec![Value::Bool(false), Value::Bool(true)]);
}

#[tokio::test]
async fn get_respects_default_scope() {
    let mut test = Test::new();
    let posts = seed(&mut test).await;

    let mut deleted = Post {
        id: posts[2].id,
        ..Post::default()
    };
    let err = test.models.get(&mut deleted).await.unwrap_err();
    assert!(err.is_record_not_found());

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "title", "active", "deleted" FROM "posts" WHERE "deleted" = ?1 AND "id" = ?2 LIMIT 1;"#
    );

    let mut raw = RawPost {
        id: posts[2].id,
        ..RawPost::default()
    };
    test.models.get(&mut raw).await.unwrap();
    assert_eq!(raw.title, "three");
    assert!(raw.deleted);
}

#[tokio::test]
async fn select_starts_scoped() {
    let mut test = Test::new();
    let posts = seed(&mut test).await;

    let query = test.models.select::<Post>();
    assert_eq!(
        query.stmt().filter,
        Some(Expr::eq(Expr::column("deleted"), false))
    );

    let selected = query.all(&test.models).await.unwrap();
    assert_eq!(selected, posts[..2].to_vec());
    assert!(selected.iter().all(|post| !post.deleted));

    let (sql, params) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "title", "active", "deleted" FROM "posts" WHERE "deleted" = ?1;"#
    );
    assert_eq!(params, vec![Value::Bool(false)]);

    // Even a lookup by the deleted row's key stays hidden
    let hidden = test
        .models
        .select::<Post>()
        .filter_eq("id", posts[2].id)
        .first(&test.models)
        .await
        .unwrap();
    assert_eq!(hidden, None);

    let query = test.models.select::<RawPost>();
    assert_eq!(query.stmt().filter, None);

    let raw = query.all(&test.models).await.unwrap();
    assert_eq!(raw.len(), 3);
}

#[tokio::test]
async fn writes_are_not_scoped() {
    let mut test = Test::with_capability(Some(&NO_RETURNING));

    // Created rows are read back even when the default scope hides them
    let mut post = Post {
        id: 0,
        title: "hidden".to_string(),
        active: false,
        deleted: true,
    };
    test.models.create(&mut post).await.unwrap();
    assert_eq!(post.id, 1);
    assert!(post.deleted);
    test.log().clear();

    test.models.save(&post, &[]).await.unwrap();
    test.models.delete(&post).await.unwrap();

    let _ = test.log().pop_stmt();
    let (sql, _) = test.log().pop_sql();
    assert_eq!(sql, r#"DELETE FROM "posts" WHERE "id" = ?1;"#);

    let mut raw = vec![];
    test.models.list::<RawPost, _>(&mut raw, ()).await.unwrap();
    assert!(raw.is_empty());
}
