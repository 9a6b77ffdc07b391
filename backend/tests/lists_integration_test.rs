//! Integration tests for cart and favourites endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_cart_add_and_remove() {
    let app = common::TestApp::new().await;
    let admin = app.signup("cart_admin", Some("admin")).await;
    let user = app.signup("cart_user", None).await;
    let book_id = app.add_book(&admin, "Cart Book").await;

    let (status, response) = app
        .put(&format!("/api/v1/addtocart/{}", book_id), Some(&user), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book added to cart");
    assert_eq!(response["cart"], json!([book_id]));

    let (status, response) = app
        .put(
            &format!("/api/v1/removefromcart/{}", book_id),
            Some(&user),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book removed from cart");
    assert!(response["cart"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_double_add_to_cart_is_rejected() {
    let app = common::TestApp::new().await;
    let admin = app.signup("dbl_admin", Some("admin")).await;
    let user = app.signup("dbl_user", None).await;
    let book_id = app.add_book(&admin, "Twice Book").await;

    let (status, _) = app
        .put(&format!("/api/v1/addtocart/{}", book_id), Some(&user), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // Retrying the successful add surfaces the caller's stale state
    let (status, response) = app
        .put(&format!("/api/v1/addtocart/{}", book_id), Some(&user), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book is already in cart");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_remove_absent_from_cart_is_rejected() {
    let app = common::TestApp::new().await;
    let user = app.signup("absent_user", None).await;

    let (status, response) = app
        .put(
            &format!("/api/v1/removefromcart/{}", uuid::Uuid::new_v4()),
            Some(&user),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book is not in cart");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_favourites_add_and_remove() {
    let app = common::TestApp::new().await;
    let admin = app.signup("fav_admin", Some("admin")).await;
    let user = app.signup("fav_user", None).await;
    let book_id = app.add_book(&admin, "Favourite Book").await;

    let (status, response) = app
        .put(
            &format!("/api/v1/addtofavourites/{}", book_id),
            Some(&user),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book added to favourites");
    assert_eq!(response["favourites"], json!([book_id]));

    // Double add
    let (status, response) = app
        .put(
            &format!("/api/v1/addtofavourites/{}", book_id),
            Some(&user),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book already in favourites");

    let (status, response) = app
        .put(
            &format!("/api/v1/removefromfavourites/{}", book_id),
            Some(&user),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book removed from favourites");
    assert!(response["favourites"].as_array().unwrap().is_empty());

    // Removing again is the caller's error
    let (status, response) = app
        .put(
            &format!("/api/v1/removefromfavourites/{}", book_id),
            Some(&user),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book is not in favourites");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_favourites_checks_book_existence_but_cart_does_not() {
    let app = common::TestApp::new().await;
    let user = app.signup("ghost_user", None).await;
    let ghost_id = uuid::Uuid::new_v4();

    // Favourites verifies the book first
    let (status, response) = app
        .put(
            &format!("/api/v1/addtofavourites/{}", ghost_id),
            Some(&user),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Book not found");

    // Cart accepts the same id without looking
    let (status, response) = app
        .put(&format!("/api/v1/addtocart/{}", ghost_id), Some(&user), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["cart"], json!([ghost_id.to_string()]));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_deleting_book_leaves_cart_entry_dangling() {
    let app = common::TestApp::new().await;
    let admin = app.signup("dangle_admin", Some("admin")).await;
    let user = app.signup("dangle_user", None).await;
    let book_id = app.add_book(&admin, "Ephemeral Book").await;

    let (status, _) = app
        .put(&format!("/api/v1/addtocart/{}", book_id), Some(&user), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .delete(&format!("/api/v1/deletebook/{}", book_id), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::OK);

    // No cascade cleanup: the stale id is still in the cart
    let (status, profile) = app.get("/api/v1/userInfo", Some(&user)).await;
    assert_eq!(status, StatusCode::OK);
    let profile: serde_json::Value = serde_json::from_str(&profile).unwrap();
    assert_eq!(profile["cart"], json!([book_id]));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_lists_are_per_account() {
    let app = common::TestApp::new().await;
    let admin = app.signup("iso_admin", Some("admin")).await;
    let alice = app.signup("iso_alice", None).await;
    let bob = app.signup("iso_bob", None).await;
    let book_id = app.add_book(&admin, "Shared Book").await;

    let (status, _) = app
        .put(&format!("/api/v1/addtocart/{}", book_id), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // Bob's cart is unaffected by Alice's
    let (_, profile) = app.get("/api/v1/userInfo", Some(&bob)).await;
    let profile: serde_json::Value = serde_json::from_str(&profile).unwrap();
    assert!(profile["cart"].as_array().unwrap().is_empty());

    // And Bob can add the same book to his own cart
    let (status, _) = app
        .put(&format!("/api/v1/addtocart/{}", book_id), Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::OK);
}
