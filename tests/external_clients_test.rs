// ABOUTME: Integration tests for the USDA, web search, and menu service clients
// ABOUTME: Runs each client against a wiremock server to pin request shapes and failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use food_lens_agent::config::environment::{MenuServiceConfig, UsdaConfig, WebSearchConfig};
use food_lens_agent::external::{MenuClient, UsdaClient, WebSearchClient};
use food_lens_agent::models::{DishLookup, SourceLabel};
use food_lens_agent::nutrition::{NutritionResolver, NutritionSource, ResolverBudgets, SourceOutcome};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn usda_client(server: &MockServer) -> UsdaClient {
    UsdaClient::new(UsdaConfig {
        api_key: Some("usda-test-key".to_owned()),
        base_url: server.uri(),
    })
}

fn web_client(server: &MockServer) -> WebSearchClient {
    WebSearchClient::new(WebSearchConfig {
        enabled: true,
        base_url: server.uri(),
    })
}

fn menu_client(server: &MockServer, api_key: Option<&str>) -> MenuClient {
    MenuClient::new(MenuServiceConfig {
        endpoint: Some(server.uri()),
        api_key: api_key.map(str::to_owned),
    })
}

// ============================================================================
// USDA FoodData Central
// ============================================================================

#[tokio::test]
async fn test_usda_search_request_shape_and_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .and(query_param("query", "kimchi"))
        .and(query_param("api_key", "usda-test-key"))
        .and(query_param("pageSize", "1"))
        .and(query_param("dataType", "Foundation,SR Legacy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "foods": [{
                "fdcId": 2_345_678,
                "description": "Kimchi",
                "dataType": "SR Legacy",
                "foodNutrients": [
                    {"nutrientName": "Energy", "value": 63.0, "unitName": "kJ"},
                    {"nutrientName": "Energy", "value": 15.0, "unitName": "KCAL"},
                    {"nutrientName": "Protein", "value": 1.1, "unitName": "G"},
                    {"nutrientName": "Total lipid (fat)", "value": 0.5, "unitName": "G"},
                    {"nutrientName": "Carbohydrate, by difference", "value": 2.4, "unitName": "G"},
                    {"nutrientName": "Sodium, Na", "value": 498.0, "unitName": "MG"}
                ]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = usda_client(&server).lookup("kimchi").await;

    let SourceOutcome::Found(result) = outcome else {
        panic!("expected a USDA answer, got {outcome:?}");
    };
    assert_eq!(result.source_label, SourceLabel::ExternalApi);
    assert_eq!(result.profile.calories, Some(15.0));
    assert_eq!(result.profile.protein_g, Some(1.1));
    assert_eq!(result.profile.sodium_mg, Some(498.0));
    assert!(result.profile.fiber_g.is_none());
    assert!(result.narrative.contains("USDA FoodData Central match: Kimchi"));
}

#[tokio::test]
async fn test_usda_empty_result_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foods": []})))
        .mount(&server)
        .await;

    let outcome = usda_client(&server).lookup("unobtainium").await;
    assert_eq!(outcome, SourceOutcome::Empty);
}

#[tokio::test]
async fn test_usda_server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let outcome = usda_client(&server).lookup("kimchi").await;
    assert!(matches!(outcome, SourceOutcome::Unavailable { .. }));

    let direct = usda_client(&server).search_foods("kimchi", 1).await;
    assert!(direct.is_err());
}

#[tokio::test]
async fn test_usda_without_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = UsdaClient::new(UsdaConfig {
        api_key: None,
        base_url: server.uri(),
    });
    let outcome = client.lookup("kimchi").await;
    assert!(matches!(outcome, SourceOutcome::Unavailable { .. }));
}

// ============================================================================
// Web search
// ============================================================================

#[tokio::test]
async fn test_web_search_extracts_numbers_from_abstract() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "kimchi nutrition facts calories"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": "Kimchi has about 15 calories and 1.1 g protein in a typical 100 gram serving.",
            "RelatedTopics": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = web_client(&server).lookup("kimchi").await;

    let SourceOutcome::Found(result) = outcome else {
        panic!("expected a web search answer, got {outcome:?}");
    };
    assert_eq!(result.source_label, SourceLabel::WebSearch);
    assert_eq!(result.profile.calories, Some(15.0));
    assert_eq!(result.profile.protein_g, Some(1.1));
    assert!(result.narrative.contains("Based on available information"));
}

#[tokio::test]
async fn test_web_search_short_answer_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Abstract": "Kimchi"})))
        .mount(&server)
        .await;

    let text = web_client(&server)
        .search_nutrition_text("kimchi")
        .await
        .unwrap();
    assert!(text.is_none());
    assert_eq!(web_client(&server).lookup("kimchi").await, SourceOutcome::Empty);
}

#[tokio::test]
async fn test_web_search_text_without_numbers_is_still_an_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": "Kimchi is a traditional Korean side dish of salted and fermented vegetables."
        })))
        .mount(&server)
        .await;

    let outcome = web_client(&server).lookup("kimchi").await;

    let SourceOutcome::Found(result) = outcome else {
        panic!("expected a web search answer, got {outcome:?}");
    };
    assert_eq!(result.source_label, SourceLabel::WebSearch);
    assert!(result.profile.is_empty());
    assert!(result.is_usable());
    assert!(result
        .narrative
        .contains("Based on available information: Kimchi is a traditional Korean side dish"));
    assert!(result.narrative.contains("• Calories: N/A"));
}

#[tokio::test]
async fn test_resolver_keeps_text_only_web_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": "Kimchi is a traditional Korean side dish of salted and fermented vegetables."
        })))
        .mount(&server)
        .await;

    let usda = UsdaClient::new(UsdaConfig {
        api_key: None,
        base_url: server.uri(),
    });
    let resolver = NutritionResolver::new(
        Arc::new(usda),
        Arc::new(web_client(&server)),
        ResolverBudgets::default(),
    );

    let result = resolver.resolve("kimchi").await;

    assert_eq!(result.source_label, SourceLabel::WebSearch);
    assert!(result.success);
    assert!(result.narrative.contains("fermented vegetables"));
}

#[tokio::test]
async fn test_disabled_web_search_is_unavailable() {
    let client = WebSearchClient::new(WebSearchConfig {
        enabled: false,
        base_url: "http://127.0.0.1:9".to_owned(),
    });
    assert!(!client.is_enabled());
    assert!(matches!(
        client.lookup("kimchi").await,
        SourceOutcome::Unavailable { .. }
    ));
}

// ============================================================================
// Menu service
// ============================================================================

#[tokio::test]
async fn test_menu_lookup_finds_dish_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .and(query_param("restaurantId", "r-42"))
        .and(query_param("public", "true"))
        .and(header("authorization", "Bearer menu-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "menuItems": [
                {"id": "d-1", "name": "Suya", "price": 9.5},
                {"id": "d-2", "name": "Jollof Rice", "ingredients": ["rice", "tomato", "pepper"]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let lookup = menu_client(&server, Some("menu-secret"))
        .get_dish_info("d-2", "r-42")
        .await;

    let DishLookup::Found(dish) = lookup else {
        panic!("expected the dish, got {lookup:?}");
    };
    assert_eq!(dish.id, "d-2");
    assert_eq!(dish.name, "Jollof Rice");
    assert_eq!(dish.ingredients, vec!["rice", "tomato", "pepper"]);
}

#[tokio::test]
async fn test_menu_lookup_dish_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "menuItems": [{"id": "d-1", "name": "Suya"}]
        })))
        .mount(&server)
        .await;

    let lookup = menu_client(&server, None).get_dish_info("d-9", "r-42").await;
    assert_eq!(lookup, DishLookup::NotFound);
}

#[tokio::test]
async fn test_menu_lookup_tolerates_null_columns() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "menuItems": [{
                "id": "d1",
                "name": "Jollof",
                "price": 12.5,
                "ingredients": null,
                "description": null
            }]
        })))
        .mount(&server)
        .await;

    let lookup = menu_client(&server, None).get_dish_info("d1", "r1").await;

    let DishLookup::Found(dish) = lookup else {
        panic!("expected the dish, got {lookup:?}");
    };
    assert_eq!(dish.name, "Jollof");
    assert_eq!(dish.price, Some(12.5));
    assert!(dish.ingredients.is_empty());
    assert!(dish.description.is_none());
}

#[tokio::test]
async fn test_menu_lookup_undecodable_dish_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "menuItems": [{"id": "d1", "name": "Jollof", "ingredients": "rice, tomato"}]
        })))
        .mount(&server)
        .await;

    let lookup = menu_client(&server, None).get_dish_info("d1", "r1").await;

    let DishLookup::Unavailable { reason } = lookup else {
        panic!("expected a decode failure, got {lookup:?}");
    };
    assert!(reason.starts_with("Failed to read dish information"));
}

#[tokio::test]
async fn test_menu_service_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let lookup = menu_client(&server, None).get_dish_info("d-1", "r-42").await;
    assert_eq!(
        lookup,
        DishLookup::Unavailable {
            reason: "API request failed: 500".to_owned()
        }
    );
}

#[tokio::test]
async fn test_menu_endpoint_override_keeps_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .and(header("authorization", "Bearer menu-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "menuItems": [{"id": 5, "name": "Pounded Yam"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = MenuClient::new(MenuServiceConfig {
        endpoint: None,
        api_key: Some("menu-secret".to_owned()),
    });
    let client = base.with_endpoint(server.uri());
    assert_eq!(client.endpoint(), Some(server.uri().as_str()));

    let lookup = client.get_dish_info("5", "r-1").await;
    assert!(matches!(lookup, DishLookup::Found(dish) if dish.name == "Pounded Yam"));
}
