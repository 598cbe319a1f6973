// ABOUTME: Integration tests for the saved-recipe store
// ABOUTME: Validates save validation, per-owner listing, and owner-scoped delete

// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use recipe_vault::database::SaveRecipeRequest;
use recipe_vault::errors::ErrorCode;
use recipe_vault::models::SearchType;
use serde_json::json;
use uuid::Uuid;

fn sample_request() -> SaveRecipeRequest {
    SaveRecipeRequest {
        title: "Garlic Pasta".into(),
        content: json!({
            "title": "Garlic Pasta",
            "ingredients": ["8 oz spaghetti", "4 cloves garlic"],
            "instructions": "Boil pasta. Fry garlic. Combine.",
        }),
        search_type: SearchType::Ingredient,
        rating: Some(4),
    }
}

#[tokio::test]
async fn test_save_and_list_roundtrip() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "cook@example.com")
        .await
        .unwrap();

    let saved = database.save_recipe(user.id, sample_request()).await.unwrap();
    assert_eq!(saved.owner_id, user.id);
    assert_eq!(saved.rating, Some(4));

    let listed = database.list_saved_recipes(user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, saved.id);
    assert_eq!(listed[0].title, "Garlic Pasta");
    assert_eq!(listed[0].search_type, SearchType::Ingredient);

    // Content survives storage byte-for-byte as JSON
    let content: serde_json::Value = serde_json::from_str(&listed[0].content).unwrap();
    assert_eq!(content["ingredients"][0], "8 oz spaghetti");
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "cook@example.com")
        .await
        .unwrap();

    for title in ["First", "Second", "Third"] {
        let mut request = sample_request();
        request.title = title.into();
        database.save_recipe(user.id, request).await.unwrap();
    }

    let titles: Vec<String> = database
        .list_saved_recipes(user.id)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_save_rejects_blank_title() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "cook@example.com")
        .await
        .unwrap();

    let mut request = sample_request();
    request.title = "   ".into();
    let err = database.save_recipe(user.id, request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_save_rejects_out_of_range_rating() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "cook@example.com")
        .await
        .unwrap();

    for rating in [0, 6, -1] {
        let mut request = sample_request();
        request.rating = Some(rating);
        let err = database.save_recipe(user.id, request).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}

#[tokio::test]
async fn test_save_accepts_missing_rating() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "cook@example.com")
        .await
        .unwrap();

    let mut request = sample_request();
    request.rating = None;
    let saved = database.save_recipe(user.id, request).await.unwrap();
    assert_eq!(saved.rating, None);
}

#[tokio::test]
async fn test_delete_returns_removed_record() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "cook@example.com")
        .await
        .unwrap();

    let saved = database.save_recipe(user.id, sample_request()).await.unwrap();
    let deleted = database.delete_saved_recipe(user.id, saved.id).await.unwrap();
    assert_eq!(deleted.id, saved.id);
    assert_eq!(deleted.title, "Garlic Pasta");

    assert!(database.list_saved_recipes(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_twice_reports_not_found() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "cook@example.com")
        .await
        .unwrap();

    let saved = database.save_recipe(user.id, sample_request()).await.unwrap();
    database.delete_saved_recipe(user.id, saved.id).await.unwrap();

    let err = database
        .delete_saved_recipe(user.id, saved.id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_delete_is_owner_scoped() {
    let database = common::create_test_database().await.unwrap();
    let owner = common::create_test_user(&database, "owner@example.com")
        .await
        .unwrap();
    let intruder = common::create_test_user(&database, "intruder@example.com")
        .await
        .unwrap();

    let saved = database.save_recipe(owner.id, sample_request()).await.unwrap();

    // Someone else's id gets the same NotFound as a nonexistent one
    let err = database
        .delete_saved_recipe(intruder.id, saved.id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let remaining = database.list_saved_recipes(owner.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn test_listing_is_owner_scoped() {
    let database = common::create_test_database().await.unwrap();
    let alice = common::create_test_user(&database, "alice@example.com")
        .await
        .unwrap();
    let bob = common::create_test_user(&database, "bob@example.com")
        .await
        .unwrap();

    database.save_recipe(alice.id, sample_request()).await.unwrap();

    assert_eq!(database.list_saved_recipes(alice.id).await.unwrap().len(), 1);
    assert!(database.list_saved_recipes(bob.id).await.unwrap().is_empty());
    assert!(database
        .list_saved_recipes(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());
}
