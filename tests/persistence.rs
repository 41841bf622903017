//! The store lives in a file and survives process restarts.

use tempfile::TempDir;
use todo_list_lib::{Database, TodoError};

#[tokio::test]
async fn test_schema_created_on_first_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("todos.db");
    assert!(!path.exists());

    let db = Database::new(&path).await.unwrap();
    assert!(path.exists());
    assert_eq!(db.path(), path.as_path());
    assert!(db.list_todos().await.unwrap().is_empty());

    db.close().await;
}

#[tokio::test]
async fn test_todos_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.db");

    let db = Database::new(&path).await.unwrap();
    let milk = db.create_todo("Buy milk").await.unwrap();
    let dog = db.create_todo("Walk dog").await.unwrap();
    db.update_todo(dog.id, true).await.unwrap();
    db.close().await;

    let db = Database::new(&path).await.unwrap();
    let todos = db.list_todos().await.unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0], milk);
    assert_eq!(todos[1].title, "Walk dog");
    assert!(todos[1].completed);

    db.delete_todo(milk.id).await.unwrap();
    db.close().await;

    let db = Database::new(&path).await.unwrap();
    assert!(db.get_todo(milk.id).await.unwrap().is_none());
    match db.delete_todo(milk.id).await {
        Err(TodoError::NotFound(id)) => assert_eq!(id, milk.id),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    db.close().await;
}

#[tokio::test]
async fn test_pool_size_from_options() {
    let dir = TempDir::new().unwrap();
    let db = Database::with_options(dir.path().join("todos.db"), 2)
        .await
        .unwrap();

    db.create_todo("one").await.unwrap();
    let stats = db.stats().await.unwrap();
    assert_eq!(stats.total_todos, 1);
    assert!(stats.pool_size <= 2);

    db.close().await;
}
