//! Query resolution and product filtering.

use anyhow::{Result, anyhow};

use crate::config::{CatalogConfig, Product};
use crate::tags::Query;

/// Pick the query to run: inline tokens win over a stored preset.
pub fn resolve_query(
    catalog: &CatalogConfig,
    preset: Option<&str>,
    inline: &[String],
) -> Result<Query> {
    if !inline.is_empty() {
        return Ok(Query::parse(inline));
    }

    let Some(name) = preset else {
        return Ok(Query::default());
    };

    catalog
        .queries
        .get(name)
        .map(|tokens| Query::parse(tokens))
        .ok_or_else(|| {
            anyhow!(
                "Catalog: Unknown query '{}' (known: {})",
                name,
                catalog.query_names().join(", ")
            )
        })
}

/// Products whose tags satisfy `query`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], query: &Query) -> Vec<&'a Product> {
    let matched: Vec<&Product> = products
        .iter()
        .filter(|product| query.matches(product.tags.as_slice()))
        .collect();

    tracing::debug!(
        "Query [{}] matched {} of {} products",
        query
            .tokens()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        matched.len(),
        products.len()
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::Tags;
    use std::collections::HashMap;

    fn product(name: &str, tags: &[&str]) -> Product {
        Product {
            name: name.into(),
            description: None,
            tags: tags.iter().copied().collect::<Tags>(),
        }
    }

    fn make_catalog() -> CatalogConfig {
        CatalogConfig {
            products: vec![
                product("the tee", &["ice", "black", "sugar"]),
                product("green tee", &["green", "hot"]),
                product("lemonade", &["ice", "sugar", "lemon"]),
                product("untagged", &[]),
            ],
            queries: HashMap::from([
                ("hot".to_string(), vec!["-ice".to_string()]),
                ("sweet".to_string(), vec!["+sugar".to_string()]),
            ]),
        }
    }

    fn names(products: Vec<&Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_or_query() {
        let catalog = make_catalog();
        let query = Query::parse(&["black", "green"]);
        assert_eq!(
            names(filter_products(&catalog.products, &query)),
            vec!["the tee", "green tee"]
        );
    }

    #[test]
    fn test_strict_query() {
        let catalog = make_catalog();
        let query = Query::parse(&["+green", "+sugar"]);
        assert!(filter_products(&catalog.products, &query).is_empty());

        let query = Query::parse(&["+ice", "+sugar", "-black"]);
        assert_eq!(
            names(filter_products(&catalog.products, &query)),
            vec!["lemonade"]
        );
    }

    #[test]
    fn test_mismatch_skips_untagged_products() {
        let catalog = make_catalog();
        let query = resolve_query(&catalog, Some("hot"), &[]).unwrap();
        assert_eq!(
            names(filter_products(&catalog.products, &query)),
            vec!["green tee"]
        );
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let catalog = make_catalog();
        let query = resolve_query(&catalog, None, &[]).unwrap();
        assert!(query.is_empty());
        assert_eq!(filter_products(&catalog.products, &query).len(), 4);
    }

    #[test]
    fn test_inline_tokens_override_preset() {
        let catalog = make_catalog();
        let query = resolve_query(&catalog, Some("hot"), &["lemon".to_string()]).unwrap();
        assert_eq!(
            names(filter_products(&catalog.products, &query)),
            vec!["lemonade"]
        );
    }

    #[test]
    fn test_unknown_preset() {
        let catalog = make_catalog();
        let err = resolve_query(&catalog, Some("cold"), &[]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown query 'cold'"));
        assert!(message.contains("hot, sweet"));
    }
}
