use mockito::Matcher;
use recipe_scout::{ApiConfig, AppConfig, RecipeScout, SiteConfig};

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

fn scout_for(server: &mockito::ServerGuard) -> RecipeScout {
    RecipeScout::builder()
        .config(test_config(&server.url()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn extraversion_vegan_requests_bbq_with_diet_filter() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/recipes/random")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("number".into(), "1".into()),
            Matcher::UrlEncoded("tags".into(), "Vegan,BBQ".into()),
            Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"recipes": [{
                "title": "Vegan BBQ Tofu Skewers",
                "readyInMinutes": 35,
                "extendedIngredients": [{"original": "400g firm tofu"}],
                "instructions": "Grill the skewers."
            }]}"#,
        )
        .create_async()
        .await;

    let scout = scout_for(&server);
    let recipe = scout.by_personality("Extraversion", "Vegan").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipe.title, "Vegan BBQ Tofu Skewers");
    // No cuisines in the payload: the inferred cuisine carries through
    assert_eq!(recipe.cuisine, "BBQ");
    assert_eq!(recipe.ingredients, vec!["400g firm tofu"]);
}

#[tokio::test]
async fn unknown_personality_uses_default_cuisine() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/recipes/random")
        .match_query(Matcher::UrlEncoded("tags".into(), "Vegan,Italian".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes": [{"title": "Margherita"}]}"#)
        .create_async()
        .await;

    let scout = scout_for(&server);
    let recipe = scout.by_personality("Spontaneity", "Vegan").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipe.cuisine, "Italian");
}

#[tokio::test]
async fn empty_result_list_is_not_found_and_not_retried() {
    let mut server = mockito::Server::new_async().await;

    let filtered = server
        .mock("GET", "/recipes/random")
        .match_query(Matcher::UrlEncoded("tags".into(), "Vegan,BBQ".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes": []}"#)
        .expect(1)
        .create_async()
        .await;

    // The unfiltered call carries no tags parameter at all
    let unfiltered = server
        .mock("GET", "/recipes/random")
        .match_query(Matcher::Exact("apiKey=test-key&number=1".to_string()))
        .with_status(200)
        .with_body(r#"{"recipes": [{"title": "Should not be used"}]}"#)
        .expect(0)
        .create_async()
        .await;

    let scout = scout_for(&server);
    let recipe = scout.by_personality("Extraversion", "Vegan").await;

    filtered.assert_async().await;
    unfiltered.assert_async().await;
    assert!(recipe.is_none());
}

#[tokio::test]
async fn failed_filtered_call_falls_back_to_one_unfiltered_call() {
    let mut server = mockito::Server::new_async().await;

    let filtered = server
        .mock("GET", "/recipes/random")
        .match_query(Matcher::UrlEncoded("tags".into(), "Vegan,BBQ".into()))
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let unfiltered = server
        .mock("GET", "/recipes/random")
        .match_query(Matcher::Exact("apiKey=test-key&number=1".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes": [{"title": "Fallback Lasagna"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let scout = scout_for(&server);
    let recipe = scout.by_personality("Extraversion", "Vegan").await.unwrap();

    filtered.assert_async().await;
    unfiltered.assert_async().await;
    assert_eq!(recipe.title, "Fallback Lasagna");
}

#[tokio::test]
async fn fallback_failure_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    let any = server
        .mock("GET", "/recipes/random")
        .match_query(Matcher::Any)
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    let scout = scout_for(&server);
    let recipe = scout.by_personality("Extraversion", "Vegan").await;

    any.assert_async().await;
    assert!(recipe.is_none());
}
