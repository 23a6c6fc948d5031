//! Cross-component integration tests.
//!
//! These tests verify interactions between the template store, the render
//! engine, and the startup factories without starting a server.

use std::sync::Arc;

use serde_json::json;

use letterpress_template_service::assets::{create_asset_relay, AssetRelayError};
use letterpress_template_service::config::{AssetRelayConfig, StorageConfig};
use letterpress_template_service::render::{render, LayoutFragments, VariableMap};
use letterpress_template_service::template::{
    create_template_store, MemoryTemplateStore, NewTemplate, TemplateCategory, TemplateFilter,
    TemplateStore,
};

fn draft(name: &str, markup: &str, category: TemplateCategory) -> NewTemplate {
    let mut variables = serde_json::Map::new();
    variables.insert("name".to_string(), json!("Ada"));

    NewTemplate {
        name: name.to_string(),
        markup_body: markup.to_string(),
        style_rules: "p{color:red}".to_string(),
        script_body: String::new(),
        variables,
        category,
    }
}

#[tokio::test]
async fn save_then_list_projects_name_and_markup() {
    let store = MemoryTemplateStore::new();

    store
        .save(draft(
            "Welcome",
            "<p>Hello {{name}}</p>",
            TemplateCategory::Custom,
        ))
        .await
        .unwrap();
    store
        .save(draft(
            "Base layout",
            "<div>{{content}}</div>",
            TemplateCategory::Constant,
        ))
        .await
        .unwrap();

    let all = store.summaries(TemplateFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let constants = store
        .summaries(TemplateFilter::by_category(TemplateCategory::Constant))
        .await
        .unwrap();
    assert_eq!(constants.len(), 1);
    assert_eq!(constants[0].name, "Base layout");
    assert_eq!(constants[0].markup_body, "<div>{{content}}</div>");
}

#[tokio::test]
async fn listing_with_no_matches_is_empty_not_an_error() {
    let store = MemoryTemplateStore::new();

    let summaries = store
        .summaries(TemplateFilter::by_category(TemplateCategory::Constant))
        .await
        .unwrap();
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn stored_fragments_render_end_to_end() {
    let store = MemoryTemplateStore::new();

    let saved = store
        .save(draft(
            "Welcome",
            "<p>Hello {{name}}</p>",
            TemplateCategory::Custom,
        ))
        .await
        .unwrap();

    // The caller hands the stored fragments plus the template's example
    // variables to the engine; rendering never touches the store.
    let fragments = LayoutFragments {
        markup_body: saved.markup_body.clone(),
        style_rules: saved.style_rules.clone(),
        script_body: saved.script_body.clone(),
    };
    let variables: VariableMap = saved
        .variables
        .iter()
        .map(|(k, v)| (k.clone(), v.as_str().unwrap_or_default().to_string()))
        .collect();

    let document = render(&fragments, &variables).unwrap();
    assert!(document.contains("<p>Hello Ada</p>"));
    assert!(document.contains("<style>p{color:red}</style>"));

    // The stored record is untouched by rendering.
    let listed = store.find(TemplateFilter::default()).await.unwrap();
    assert_eq!(listed[0].markup_body, "<p>Hello {{name}}</p>");
}

#[tokio::test]
async fn renders_run_concurrently_without_coordination() {
    let fragments = Arc::new(
        LayoutFragments::new("<p>{{greeting}}, {{name}}</p>").with_styles("p{margin:0}"),
    );
    let variables = Arc::new(VariableMap::from([("greeting", "Hi"), ("name", "Ada")]));

    let expected = render(&fragments, &variables).unwrap();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let fragments = fragments.clone();
        let variables = variables.clone();
        handles.push(tokio::spawn(async move {
            render(&fragments, &variables).unwrap()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[test]
fn store_factory_selects_backend() {
    let store = create_template_store(&StorageConfig::default(), None);
    assert_eq!(store.backend_name(), "memory");

    let postgres_requested = StorageConfig {
        backend: "postgres".to_string(),
        ..Default::default()
    };
    // Without a pool the factory falls back to memory rather than failing.
    let fallback = create_template_store(&postgres_requested, None);
    assert_eq!(fallback.backend_name(), "memory");
}

#[tokio::test]
async fn unconfigured_relay_rejects_uploads() {
    let relay = create_asset_relay(&AssetRelayConfig::default()).unwrap();
    assert!(!relay.is_enabled());

    let result = relay.upload("logo.png", "image/png", vec![0u8; 16]).await;
    assert!(matches!(result, Err(AssetRelayError::Disabled)));
}

#[tokio::test]
async fn save_validation_failures_do_not_persist() {
    let store = MemoryTemplateStore::new();

    let mut invalid = draft("Broken", "<p></p>", TemplateCategory::Custom);
    invalid.markup_body.clear();

    assert!(store.save(invalid).await.is_err());
    assert_eq!(store.count().await.unwrap(), 0);
}
