//! API integration tests
//!
//! These tests run against a live server with a reachable MongoDB instance:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

/// A well-formed identifier that no document will ever carry
const ABSENT_ID: &str = "ffffffffffffffffffffffff";

/// Helper to create a book and return its JSON body
async fn create_book(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

/// Helper to delete a book, ignoring the outcome (test cleanup)
async fn cleanup_book(client: &Client, id: &str) {
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
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
async fn test_full_book_lifecycle() {
    let client = Client::new();

    // Create
    let created = create_book(
        &client,
        json!({
            "titulo": "Dune",
            "autor": "Herbert",
            "genero": "Ciencia",
            "fecha_publicacion": "1965"
        }),
    )
    .await;

    let id = created["id"].as_str().expect("No id in response");
    assert_eq!(id.len(), 24);
    assert_eq!(created["titulo"], "Dune");
    assert_eq!(created["autor"], "Herbert");
    assert_eq!(created["genero"], "Ciencia");
    assert_eq!(created["fecha_publicacion"], "1965");

    // Read back: identical field values
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);

    // Delete: confirmation message names the title
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "El libro 'Dune' fue eliminado correctamente."
    );

    // Read after delete: gone
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let created = create_book(
        &client,
        json!({
            "titulo": "Fundación",
            "autor": "Asimov",
            "genero": "Ciencia",
            "fecha_publicacion": "1951"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Body should be an array");
    assert!(books.iter().any(|b| b["id"] == id));

    cleanup_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_malformed_id_rejected_on_every_operation() {
    let client = Client::new();

    for id in ["123", "not-an-id", "507f1f77bcf86cd79943901z"] {
        let url = format!("{}/books/{}", BASE_URL, id);

        let get = client.get(&url).send().await.unwrap();
        assert_eq!(get.status(), 400);
        let body: Value = get.json().await.unwrap();
        assert_eq!(body["message"], "ID de libro no es valido");

        let put = client.put(&url).json(&json!({})).send().await.unwrap();
        assert_eq!(put.status(), 400);

        let patch = client.patch(&url).json(&json!({})).send().await.unwrap();
        assert_eq!(patch.status(), 400);

        let delete = client.delete(&url).send().await.unwrap();
        assert_eq!(delete.status(), 400);
    }
}

#[tokio::test]
#[ignore]
async fn test_absent_id_returns_not_found() {
    let client = Client::new();
    let url = format!("{}/books/{}", BASE_URL, ABSENT_ID);

    let get = client.get(&url).send().await.unwrap();
    assert_eq!(get.status(), 404);
    let body: Value = get.json().await.unwrap();
    assert_eq!(body["message"], "Libro no encontrado");

    let put = client
        .put(&url)
        .json(&json!({"titulo": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(put.status(), 404);

    let delete = client.delete(&url).send().await.unwrap();
    assert_eq!(delete.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_requires_all_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "titulo": "Dune",
            "autor": "Herbert"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Los campos titulo, autor, genero y fecha de publicacion son obligatorios."
    );
}

#[tokio::test]
#[ignore]
async fn test_create_rejects_unknown_genre() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "titulo": "Dune",
            "autor": "Herbert",
            "genero": "Terror",
            "fecha_publicacion": "1965"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("'Terror' no es valido"));
}

#[tokio::test]
#[ignore]
async fn test_create_trims_and_rejects_blank_fields() {
    let client = Client::new();

    // Whitespace-only title fails validation
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "titulo": "   ",
            "autor": "Herbert",
            "genero": "Ciencia",
            "fecha_publicacion": "1965"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // Surrounding whitespace is trimmed on store
    let created = create_book(
        &client,
        json!({
            "titulo": "  Dune  ",
            "autor": " Herbert ",
            "genero": "Ciencia",
            "fecha_publicacion": "1965"
        }),
    )
    .await;
    assert_eq!(created["titulo"], "Dune");
    assert_eq!(created["autor"], "Herbert");

    cleanup_book(&client, created["id"].as_str().unwrap()).await;
}

#[tokio::test]
#[ignore]
async fn test_replace_merges_missing_fields() {
    let client = Client::new();

    let created = create_book(
        &client,
        json!({
            "titulo": "Dune",
            "autor": "Herbert",
            "genero": "Ciencia",
            "fecha_publicacion": "1965"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    // Only the title is supplied; every other field keeps its stored value
    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({"titulo": "El Mesías de Dune"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["titulo"], "El Mesías de Dune");
    assert_eq!(updated["autor"], "Herbert");
    assert_eq!(updated["genero"], "Ciencia");
    assert_eq!(updated["fecha_publicacion"], "1965");

    cleanup_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_full_update_is_idempotent() {
    let client = Client::new();

    let created = create_book(
        &client,
        json!({
            "titulo": "Dune",
            "autor": "Herbert",
            "genero": "Ciencia",
            "fecha_publicacion": "1965"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let full_update = json!({
        "titulo": "Hyperion",
        "autor": "Simmons",
        "genero": "Fantasía",
        "fecha_publicacion": "1989"
    });

    let mut results = Vec::new();
    for _ in 0..2 {
        let response = client
            .put(format!("{}/books/{}", BASE_URL, id))
            .json(&full_update)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        results.push(response.json::<Value>().await.unwrap());
    }
    assert_eq!(results[0], results[1]);

    cleanup_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_patch_with_empty_body_is_rejected_and_changes_nothing() {
    let client = Client::new();

    let created = create_book(
        &client,
        json!({
            "titulo": "Dune",
            "autor": "Herbert",
            "genero": "Ciencia",
            "fecha_publicacion": "1965"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    // Single 400 response, no second write
    let response = client
        .patch(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Al menos uno de estos campos debe ser enviado: titulo, autor, genero, fecha de publicacion."
    );

    // Entity is untouched
    let fetched: Value = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    cleanup_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_patch_updates_single_field() {
    let client = Client::new();

    let created = create_book(
        &client,
        json!({
            "titulo": "Dune",
            "autor": "Herbert",
            "genero": "Ciencia",
            "fecha_publicacion": "1965"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .patch(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({"genero": "Historia"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["genero"], "Historia");
    assert_eq!(updated["titulo"], "Dune");

    cleanup_book(&client, id).await;
}
