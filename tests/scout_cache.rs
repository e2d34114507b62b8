use mockito::Matcher;
use recipe_scout::{ApiConfig, AppConfig, FixedPicker, RecipeScout, SiteConfig};
use std::time::Duration;

fn test_config(recipe_url: &str) -> AppConfig {
    AppConfig {
        recipe_api: ApiConfig {
            base_url: recipe_url.to_string(),
            api_key: "test-key".to_string(),
        },
        venue_api: ApiConfig {
            base_url: "http://venues.invalid".to_string(),
            api_key: "test-key".to_string(),
        },
        site: SiteConfig {
            base_url: "http://site.invalid".to_string(),
        },
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn identical_searches_hit_the_backend_once() {
    let mut server = mockito::Server::new_async().await;

    let search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": 7}]}"#)
        .expect(1)
        .create_async()
        .await;

    let detail = server
        .mock("GET", "/recipes/7/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title": "Cached Curry"}"#)
        .expect(1)
        .create_async()
        .await;

    let scout = RecipeScout::builder()
        .config(test_config(&server.url()))
        .build()
        .unwrap();

    let first = scout.by_ingredient("curry", 30).await.unwrap();
    let second = scout.by_ingredient("curry", 30).await.unwrap();

    search.assert_async().await;
    detail.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn different_inputs_are_cached_separately() {
    let mut server = mockito::Server::new_async().await;

    let search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": 7}]}"#)
        .expect(2)
        .create_async()
        .await;

    let _detail = server
        .mock("GET", "/recipes/7/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title": "Cached Curry"}"#)
        .expect(2)
        .create_async()
        .await;

    let scout = RecipeScout::builder()
        .config(test_config(&server.url()))
        .build()
        .unwrap();

    scout.by_ingredient("curry", 30).await.unwrap();
    scout.by_ingredient("curry", 45).await.unwrap();

    search.assert_async().await;
}

#[tokio::test]
async fn not_found_is_not_cached_and_stays_retryable() {
    let mut server = mockito::Server::new_async().await;

    let search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .expect(2)
        .create_async()
        .await;

    let scout = RecipeScout::builder()
        .config(test_config(&server.url()))
        .build()
        .unwrap();

    assert!(scout.by_ingredient("nothing", 30).await.is_none());
    assert!(scout.by_ingredient("nothing", 30).await.is_none());

    search.assert_async().await;
}

#[test]
fn builder_accepts_explicit_config_timeout_and_picker() {
    let scout = RecipeScout::builder()
        .config(test_config("http://api.invalid"))
        .timeout(Duration::from_secs(2))
        .link_picker(FixedPicker(0))
        .build();
    assert!(scout.is_ok());
}
