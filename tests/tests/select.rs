use pretty_assertions::assert_eq;
use stdmodel::{
    stmt::{Direction, Expr},
    Model,
};
use tests::Test;

#[derive(Debug, Clone, Default, PartialEq, Model)]
struct User {
    #[key]
    #[auto]
    id: i64,

    name: String,

    #[column("email")]
    email_address: String,

    updated_at: String,
}

async fn seed(test: &mut Test) {
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        let mut user = User {
            id: 0,
            name: name.to_string(),
            email_address: format!("{}@example.com", name.to_lowercase()),
            updated_at: "2024-01-01".to_string(),
        };
        test.models.create(&mut user).await.unwrap();
    }

    test.log().clear();
}

fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|user| &user.name[..]).collect()
}

#[tokio::test]
async fn order_limit_offset() {
    let mut test = Test::new();
    seed(&mut test).await;

    let users = test
        .models
        .select::<User>()
        .order_by("id", Direction::Desc)
        .limit(2)
        .offset(1)
        .all(&test.models)
        .await
        .unwrap();
    assert_eq!(names(&users), ["Carol", "Bob"]);

    let (sql, params) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "name", "email", "updated_at" FROM "users" ORDER BY "id" DESC LIMIT 2 OFFSET 1;"#
    );
    assert!(params.is_empty());
}

#[tokio::test]
async fn filter_expressions() {
    let mut test = Test::new();
    seed(&mut test).await;

    let users = test
        .models
        .select::<User>()
        .filter(Expr::in_list(Expr::column("name"), ["Alice", "Dave"]))
        .filter_eq("email", "dave@example.com")
        .all(&test.models)
        .await
        .unwrap();
    assert_eq!(names(&users), ["Dave"]);
    assert_eq!(users[0].email_address, "dave@example.com");

    let (sql, _) = test.log().pop_sql();
    assert_eq!(
        sql,
        r#"SELECT "id", "name", "email", "updated_at" FROM "users" WHERE "name" IN (?1, ?2) AND "email" = ?3;"#
    );

    let users = test
        .models
        .select::<User>()
        .filter(Expr::gt(Expr::column("id"), 2i64))
        .order_by("name", Direction::Asc)
        .all(&test.models)
        .await
        .unwrap();
    assert_eq!(names(&users), ["Carol", "Dave"]);
}

#[tokio::test]
async fn first_row() {
    let mut test = Test::new();
    seed(&mut test).await;

    let first = test
        .models
        .select::<User>()
        .order_by("name", Direction::Desc)
        .first(&test.models)
        .await
        .unwrap();
    assert_eq!(first.map(|user| user.name), Some("Dave".to_string()));

    let (sql, _) = test.log().pop_sql();
    assert!(sql.ends_with(r#"ORDER BY "name" DESC LIMIT 1;"#), "{sql}");

    let none = test
        .models
        .select::<User>()
        .filter_eq("name", "Nobody")
        .first(&test.models)
        .await
        .unwrap();
    assert_eq!(none, None);
}

#[tokio::test]
async fn select_is_lazy() {
    let mut test = Test::new();

    let query = test.models.select::<User>().filter_eq("name", "Alice").limit(5);
    assert_eq!(query.stmt().table, "users");
    assert_eq!(query.stmt().columns, ["id", "name", "email", "updated_at"]);
    assert_eq!(query.stmt().predicate_count(), 1);
    assert_eq!(query.stmt().limit, Some(5));

    assert!(test.log().is_empty());
}

#[tokio::test]
async fn load_failure_names_the_field() {
    #[derive(Debug, Model)]
    #[table = "users"]
    struct Mistyped {
        #[key]
        id: i64,

        #[column("name")]
        name: Option<i64>,
    }

    let mut test = Test::new();
    seed(&mut test).await;

    let err = test
        .models
        .select::<Mistyped>()
        .all(&test.models)
        .await
        .unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert String to I64");
}
