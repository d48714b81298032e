//! API integration tests
//!
//! These run against a live server backed by a migrated database:
//! `library-server migrate && library-server serve`, then
//! `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

async fn create_author(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No author ID")
}

async fn create_book(client: &Client, title: &str, author_id: i64) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": title, "authorId": author_id }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No book ID")
}

async fn create_borrower(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/borrowers", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No borrower ID")
}

async fn count_books_by(client: &Client, author_id: i64) -> usize {
    let body: Value = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    body.as_array()
        .expect("Books is not an array")
        .iter()
        .filter(|b| b["authorId"].as_i64() == Some(author_id))
        .count()
}

async fn post_book_ref(client: &Client, borrower_id: i64, action: &str, book_id: i64) -> reqwest::Response {
    client
        .post(format!("{}/borrowers/{}/{}", BASE_URL, borrower_id, action))
        .json(&json!({ "bookId": book_id }))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_book_assigns_fresh_ids() {
    let client = Client::new();
    let author_id = create_author(&client, "Ursula K. Le Guin").await;

    let first = create_book(&client, "The Dispossessed", author_id).await;
    let second = create_book(&client, "The Lathe of Heaven", author_id).await;

    assert_ne!(first, second);
}

#[tokio::test]
#[ignore]
async fn test_create_book_without_title_is_rejected() {
    let client = Client::new();
    let author_id = create_author(&client, "Anonymous").await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "authorId": author_id }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "NotNullViolation");
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_unknown_author_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "Orphan", "authorId": i32::MAX }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "ForeignKeyViolation");
}

#[tokio::test]
#[ignore]
async fn test_list_grows_by_created_books() {
    let client = Client::new();
    let author_id = create_author(&client, "Iain M. Banks").await;

    let before = count_books_by(&client, author_id).await;
    for title in ["Consider Phlebas", "The Player of Games", "Use of Weapons"] {
        create_book(&client, title, author_id).await;
    }
    let after = count_books_by(&client, author_id).await;

    assert_eq!(before, 0);
    assert_eq!(after, 3);
}

#[tokio::test]
#[ignore]
async fn test_update_and_delete_unknown_book_still_succeed() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/{}", BASE_URL, i32::MAX))
        .json(&json!({ "title": "Nobody" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book updated");

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted");
}

#[tokio::test]
#[ignore]
async fn test_update_book_title() {
    let client = Client::new();
    let author_id = create_author(&client, "Octavia E. Butler").await;
    let book_id = create_book(&client, "Kindred (draft)", author_id).await;

    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({ "title": "Kindred" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let books: Value = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let updated = books
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"].as_i64() == Some(book_id))
        .expect("Book missing from list");
    assert_eq!(updated["title"], "Kindred");
    assert_eq!(updated["authorId"].as_i64(), Some(author_id));
}

#[tokio::test]
#[ignore]
async fn test_checkout_is_not_exclusive() {
    let client = Client::new();
    let author_id = create_author(&client, "Stanislaw Lem").await;
    let book_id = create_book(&client, "Solaris", author_id).await;
    let first = create_borrower(&client, "Kelvin").await;
    let second = create_borrower(&client, "Snaut").await;

    let response = post_book_ref(&client, first, "checkout", book_id).await;
    assert_eq!(response.status(), 200);

    let response = post_book_ref(&client, second, "checkout", book_id).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book checked out");

    // same pair again is a no-op
    let response = post_book_ref(&client, first, "checkout", book_id).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_return_twice() {
    let client = Client::new();
    let author_id = create_author(&client, "Italo Calvino").await;
    let book_id = create_book(&client, "Invisible Cities", author_id).await;
    let borrower_id = create_borrower(&client, "Marco Polo").await;

    let response = post_book_ref(&client, borrower_id, "checkout", book_id).await;
    assert_eq!(response.status(), 200);

    for _ in 0..2 {
        let response = post_book_ref(&client, borrower_id, "return", book_id).await;
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], "Book returned");
    }
}

#[tokio::test]
#[ignore]
async fn test_checkout_with_missing_records_fails() {
    let client = Client::new();
    let borrower_id = create_borrower(&client, "Nobody's reader").await;

    let response = post_book_ref(&client, borrower_id, "checkout", i64::from(i32::MAX)).await;
    assert_eq!(response.status(), 500);

    let author_id = create_author(&client, "Jorge Luis Borges").await;
    let book_id = create_book(&client, "Ficciones", author_id).await;
    let response = post_book_ref(&client, i64::from(i32::MAX), "checkout", book_id).await;
    assert_eq!(response.status(), 500);
}

#[tokio::test]
#[ignore]
async fn test_delete_author_with_books_is_restricted() {
    let client = Client::new();
    let author_id = create_author(&client, "Mary Shelley").await;
    create_book(&client, "Frankenstein", author_id).await;

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 500);

    let authors: Value = client
        .get(format!("{}/authors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(authors
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["id"].as_i64() == Some(author_id)));
}

#[tokio::test]
#[ignore]
async fn test_delete_author_without_books() {
    let client = Client::new();
    let author_id = create_author(&client, "Short-lived").await;

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Author deleted");
}
