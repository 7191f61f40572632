use panekit::{BreadcrumbConfig, CollapserConfig};

#[test]
fn test_collapser_defaults() {
    let config = CollapserConfig::default();
    assert!(!config.is_collapsed);
    assert!(!config.is_animated);
    assert_eq!(config.collapsed_class, "collapsible-collapsed");
    assert_eq!(config.transition_class, "collapsible-transition");
    assert!(config.is_label_clickable);
    assert_eq!(config.content_height, 0);
    assert!(!config.bypass_animation);
}

#[test]
fn test_collapser_from_partial_json() {
    let config =
        CollapserConfig::from_json(r#"{ "isAnimated": true, "contentHeight": 240 }"#).unwrap();
    assert_eq!(
        config,
        CollapserConfig::new().animated(true).content_height(240)
    );
}

#[test]
fn test_collapser_from_bad_json() {
    let err = CollapserConfig::from_json(r#"{ "isAnimated": "yes" }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn test_breadcrumb_defaults_and_json() {
    let config = BreadcrumbConfig::default();
    assert_eq!(config.sentinel_id, "UserContent");
    assert_eq!(config.root_label, "Body");

    let config = BreadcrumbConfig::from_json(r#"{ "rootLabel": "Document" }"#).unwrap();
    assert_eq!(config.sentinel_id, "UserContent");
    assert_eq!(config.root_label, "Document");
}
