//! Render configuration loading (TOML).

use std::path::Path;

use compgraph_core::{Error, ErrorKind, RenderConfig, Result};

/// Parse a TOML render configuration. Missing fields keep their defaults.
pub fn parse_config(text: &str) -> Result<RenderConfig> {
    let config: RenderConfig = toml::from_str(text).map_err(|e| {
        Error::new(ErrorKind::ConfigInvalid, e.message().to_string())
            .with_operation("config::parse_config")
            .set_source(e)
    })?;
    config.validate()?;
    Ok(config)
}

/// Load the configuration at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::from(e)
            .with_operation("config::load_config")
            .with_context("path", path.display().to_string())
    })?;
    parse_config(&text).map_err(|e| {
        e.with_operation("config::load_config")
            .with_context("path", path.display().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), RenderConfig::default());
    }

    #[test]
    fn overrides_categories_and_exclusions() {
        let config = parse_config(
            r#"
            categories = ["image", "source", "runtime"]

            [exclusion]
            forbidden_labels = ["internal"]
            forbidden_substrings = []
            "#,
        )
        .unwrap();
        assert!(config.is_category("runtime"));
        assert!(!config.is_category("git"));
        assert!(config.exclusion.is_excluded("internal"));
        assert!(!config.exclusion.is_excluded("true"));
    }

    #[test]
    fn style_attributes_can_be_overridden() {
        let config = parse_config(
            r##"
            [style.node]
            shape = "ellipse"
            "##,
        )
        .unwrap();
        assert_eq!(config.style.node.get("shape").map(String::as_str), Some("ellipse"));
        assert_eq!(config.style.node.len(), 1);
        assert!(config.style.graph.contains_key("nodesep"));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = parse_config("categories = [").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn overlapping_depths_fail_validation() {
        let err = parse_config(
            r#"
            [depth_rule]
            group_depths = [0, 1]
            category_depths = [1, 4]
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context_value("depth"), Some("1"));
    }
}
