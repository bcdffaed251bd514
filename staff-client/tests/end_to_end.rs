use std::sync::Arc;
use std::time::Duration;

use staff_client::{
    ClientConfig, ClientError, EmployeeApi, EmployeePayload, EmployeeQuery, EmployeeStore,
    HttpClient, SearchDebouncer,
};
use staff_server::{Config, DbService, Server, ServerState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let config = Config::in_memory();
        let db = DbService::new(&config.database_path).await.unwrap();
        let state = ServerState::new(config.clone(), db);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let server = Server::with_state(config, state);
            server
                .serve(listener, async {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(tx),
        }
    }

    fn client(&self) -> HttpClient {
        HttpClient::new(&ClientConfig::new(&self.base_url).with_timeout(5)).unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

#[tokio::test]
async fn test_crud_over_http() {
    let server = TestServer::start().await;
    let client = server.client();

    let alice = client
        .create(&EmployeePayload::new("Alice Johnson", "alice@example.com", "Engineer"))
        .await
        .unwrap();
    assert_eq!(alice.created_at, alice.updated_at);
    assert_eq!(client.get(alice.id).await.unwrap(), alice);

    let err = client
        .create(&EmployeePayload::new("Alice Two", "alice@example.com", "Engineer"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Conflict(ref m) if m == "Email already exists"));

    let updated = client
        .update(
            alice.id,
            &EmployeePayload::default().with_position("Staff Engineer"),
        )
        .await
        .unwrap();
    assert_eq!(updated.position, "Staff Engineer");
    assert!(updated.updated_at > alice.updated_at);

    client.delete(alice.id).await.unwrap();
    assert!(matches!(
        client.get(alice.id).await.unwrap_err(),
        ClientError::NotFound(_)
    ));
    assert!(matches!(
        client.delete(alice.id).await.unwrap_err(),
        ClientError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_validation_errors_reach_client() {
    let server = TestServer::start().await;
    let client = server.client();

    let err = client
        .create(&EmployeePayload::default())
        .await
        .unwrap_err();
    let fields: Vec<_> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "position"]);
}

#[tokio::test]
async fn test_list_query_over_http() {
    let server = TestServer::start().await;
    let client = server.client();
    for (name, email) in [
        ("Alice Johnson", "alice@example.com"),
        ("Bob Smith", "bob@example.com"),
        ("Alina Chen", "alina@example.com"),
    ] {
        client
            .create(&EmployeePayload::new(name, email, "Engineer"))
            .await
            .unwrap();
    }

    let page = client.list(&EmployeeQuery::by_name("ali")).await.unwrap();
    assert_eq!(page.total, 2);

    let page = client
        .list(&EmployeeQuery::default().paginate(1, 2))
        .await
        .unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 2);
}

#[tokio::test]
async fn test_store_with_debounced_search() {
    let server = TestServer::start().await;
    let store = Arc::new(EmployeeStore::new(server.client()));

    store
        .add(&EmployeePayload::new("Alice Johnson", "alice@example.com", "Engineer"))
        .await
        .unwrap();
    store
        .add(&EmployeePayload::new("Bob Smith", "bob@example.com", "Manager"))
        .await
        .unwrap();
    assert_eq!(store.employees()[0].name, "Bob Smith");

    let search = SearchDebouncer::with_delay(store.clone(), Duration::from_millis(20));
    let _ = search.input("b");
    search.input("bo").await.unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.search_term, "bo");
    assert_eq!(snapshot.employees.len(), 1);
    assert_eq!(snapshot.employees[0].name, "Bob Smith");
    assert!(!snapshot.loading);
    assert_eq!(snapshot.error, None);
}
