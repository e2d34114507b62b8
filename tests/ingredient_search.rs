use mockito::Matcher;
use recipe_scout::{ApiConfig, AppConfig, ReadyTime, RecipeScout, SiteConfig};

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

const DETAIL_BODY: &str = r#"{
    "title": "Quick Chicken Stir-Fry",
    "image": "https://img.example.com/stirfry.jpg",
    "readyInMinutes": 25,
    "extendedIngredients": [
        {"original": "500g chicken breast, sliced"},
        {"original": "2 tbsp soy sauce"}
    ],
    "instructions": "Stir-fry the chicken, add the sauce.",
    "nutrition": {"nutrients": [{"name": "Protein", "amount": 42.0, "unit": "g"}]},
    "cuisines": ["Chinese"]
}"#;

#[tokio::test]
async fn search_then_detail_produces_normalized_recipe() {
    let mut server = mockito::Server::new_async().await;

    let search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "chicken".into()),
            Matcher::UrlEncoded("maxReadyTime".into(), "30".into()),
            Matcher::UrlEncoded("number".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": 716429, "title": "Quick Chicken Stir-Fry"}]}"#)
        .create_async()
        .await;

    let detail = server
        .mock("GET", "/recipes/716429/information")
        .match_query(Matcher::UrlEncoded("includeNutrition".into(), "true".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DETAIL_BODY)
        .create_async()
        .await;

    let scout = RecipeScout::builder()
        .config(test_config(&server.url()))
        .build()
        .unwrap();
    let recipe = scout.by_ingredient("chicken", 30).await.unwrap();

    search.assert_async().await;
    detail.assert_async().await;
    assert_eq!(recipe.title, "Quick Chicken Stir-Fry");
    assert_eq!(recipe.ready_minutes, ReadyTime::Minutes(25));
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.nutrients[0].name, "Protein");
    assert_eq!(recipe.cuisine, "Chinese");
}

#[tokio::test]
async fn empty_search_results_skip_the_detail_fetch() {
    let mut server = mockito::Server::new_async().await;

    let search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let detail = server
        .mock("GET", Matcher::Regex(r"^/recipes/\d+/information".to_string()))
        .with_status(200)
        .with_body(DETAIL_BODY)
        .expect(0)
        .create_async()
        .await;

    let scout = RecipeScout::builder()
        .config(test_config(&server.url()))
        .build()
        .unwrap();
    let recipe = scout.by_ingredient("unobtainium", 30).await;

    search.assert_async().await;
    detail.assert_async().await;
    assert!(recipe.is_none());
}

#[tokio::test]
async fn failed_detail_fetch_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": 99}]}"#)
        .create_async()
        .await;

    let _detail = server
        .mock("GET", "/recipes/99/information")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let scout = RecipeScout::builder()
        .config(test_config(&server.url()))
        .build()
        .unwrap();
    assert!(scout.by_ingredient("chicken", 30).await.is_none());
}

#[tokio::test]
async fn non_success_search_status_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(403)
        .create_async()
        .await;

    let scout = RecipeScout::builder()
        .config(test_config(&server.url()))
        .build()
        .unwrap();
    assert!(scout.by_ingredient("chicken", 30).await.is_none());
}
