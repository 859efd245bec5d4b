use stdmodel::{Model, Models};
use stdmodel_core::{
    async_trait,
    driver::{Capability, Driver, Operation, Response},
    Result,
};
use tests::Test;

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

#[derive(Debug, Clone, Default, PartialEq, Model)]
struct User {
    #[key]
    #[auto]
    id: i64,

    name: String,

    email: String,

    updated_at: String,
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn models_are_shared_between_tasks() {
    let test = Test::new();

    let handles = (0..8)
        .map(|i| {
            let models = test.models.clone();
            tokio::spawn(async move {
                let mut user = User {
                    id: 0,
                    name: format!("user{i}"),
                    email: format!("user{i}@example.com"),
                    updated_at: "2024-01-01".to_string(),
                };
                models.create(&mut user).await.unwrap();
                user
            })
        })
        .collect::<Vec<_>>();

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().id);
    }
    ids.sort();
    assert_eq!(ids, (1..=8).collect::<Vec<i64>>());

    let mut users = vec![];
    test.models.list::<User, _>(&mut users, ()).await.unwrap();
    assert_eq!(users.len(), 8);
}

/// Accepts an operation and never completes it.
#[derive(Debug, Default)]
struct StalledDriver {
    started: Arc<AtomicBool>,
    dropped: Arc<AtomicBool>,
}

struct SetOnDrop(Arc<AtomicBool>);

impl Drop for SetOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Driver for StalledDriver {
    fn capability(&self) -> &Capability {
        &Capability::SQLITE
    }

    async fn exec(&self, _op: Operation) -> Result<Response> {
        let _guard = SetOnDrop(self.dropped.clone());
        self.started.store(true, Ordering::SeqCst);
        std::future::pending().await
    }
}

#[tokio::test]
async fn timeout_drops_pending_operation() {
    let driver = StalledDriver::default();
    let started = driver.started.clone();
    let dropped = driver.dropped.clone();
    let models = Models::new(driver);

    let mut user = User {
        id: 0,
        name: "Alice".to_string(),
        ..User::default()
    };

    let res = tokio::time::timeout(Duration::from_millis(50), models.create(&mut user)).await;
    assert!(res.is_err());

    // The driver saw the insert, and its future was dropped with the timeout
    assert!(started.load(Ordering::SeqCst));
    assert!(dropped.load(Ordering::SeqCst));
    assert_eq!(user.id, 0);
}

#[tokio::test]
async fn completes_within_timeout() {
    let test = Test::new();

    let mut user = User {
        id: 0,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        updated_at: "2024-01-01".to_string(),
    };

    tokio::time::timeout(
        Duration::from_secs(5),
        test.models.create(&mut user),
    )
    .await
    .expect("create timed out")
    .unwrap();

    assert_eq!(user.id, 1);
}
