//! CanonicalFilter → store filter expression.
//!
//! Precedence: a non-empty `flat_locations` list replaces any top-level
//! state/county clauses with a `$or` disjunction; it does not combine with
//! them. Boolean tags merge on top either way. This supersede rule is
//! preserved for compatibility with the stored filter shapes.

use lexrag_core::models::{CanonicalFilter, CompiledFilter};
use serde_json::{json, Map, Value};

/// Compile a canonical filter into the store's native expression.
/// An empty canonical filter compiles to the empty object ("match all").
pub fn compile(canonical: &CanonicalFilter) -> CompiledFilter {
    let mut expr = Map::new();

    if let Some(state) = non_empty(&canonical.state) {
        expr.insert("state".to_string(), eq_clause(state));
    }
    if let Some(county) = non_empty(&canonical.county) {
        expr.insert("county".to_string(), eq_clause(county));
    }

    if !canonical.flat_locations.is_empty() {
        let ors: Vec<Value> = canonical
            .flat_locations
            .iter()
            .filter_map(|loc| {
                let mut clause = Map::new();
                if let Some(state) = non_empty(&loc.state) {
                    clause.insert("state".to_string(), eq_clause(state));
                }
                if let Some(county) = non_empty(&loc.county) {
                    clause.insert("county".to_string(), eq_clause(county));
                }
                (!clause.is_empty()).then_some(Value::Object(clause))
            })
            .collect();

        if !ors.is_empty() {
            // Replace, not combine: the disjunction supersedes any top-level
            // state/county clauses built above.
            expr = Map::new();
            expr.insert("$or".to_string(), Value::Array(ors));
        }
    }

    for tag in canonical.tags.active() {
        expr.insert(tag.to_string(), eq_clause("Y"));
    }

    CompiledFilter::new(Value::Object(expr))
}

fn eq_clause(value: &str) -> Value {
    json!({ "$eq": value })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexrag_core::models::{FlatLocation, TagSet};

    fn flat(state: Option<&str>, county: Option<&str>) -> FlatLocation {
        FlatLocation {
            state: state.map(str::to_owned),
            county: county.map(str::to_owned),
        }
    }

    #[test]
    fn empty_filter_compiles_to_match_all() {
        let compiled = compile(&CanonicalFilter::default());
        assert!(compiled.is_empty());
        assert_eq!(compiled.as_value(), &serde_json::json!({}));
    }

    #[test]
    fn top_level_state_and_county_become_eq_clauses() {
        let canonical = CanonicalFilter {
            state: Some("CA".to_string()),
            county: Some("Alameda".to_string()),
            ..Default::default()
        };
        assert_eq!(
            compile(&canonical).as_value(),
            &serde_json::json!({
                "state": {"$eq": "CA"},
                "county": {"$eq": "Alameda"}
            })
        );
    }

    #[test]
    fn flat_locations_supersede_top_level_state() {
        // Precedence law: the $or replaces the state clause entirely.
        let canonical = CanonicalFilter {
            state: Some("TX".to_string()),
            flat_locations: vec![flat(Some("CA"), Some("Alameda"))],
            ..Default::default()
        };
        assert_eq!(
            compile(&canonical).as_value(),
            &serde_json::json!({
                "$or": [{"state": {"$eq": "CA"}, "county": {"$eq": "Alameda"}}]
            })
        );
    }

    #[test]
    fn location_clause_keeps_only_non_empty_keys() {
        let canonical = CanonicalFilter {
            flat_locations: vec![
                flat(None, Some("Alameda")),
                flat(Some("NY"), Some("")),
                flat(None, None),
            ],
            ..Default::default()
        };
        assert_eq!(
            compile(&canonical).as_value(),
            &serde_json::json!({
                "$or": [
                    {"county": {"$eq": "Alameda"}},
                    {"state": {"$eq": "NY"}}
                ]
            })
        );
    }

    #[test]
    fn all_empty_locations_fall_back_to_top_level_clauses() {
        let canonical = CanonicalFilter {
            state: Some("TX".to_string()),
            flat_locations: vec![flat(None, None)],
            ..Default::default()
        };
        assert_eq!(
            compile(&canonical).as_value(),
            &serde_json::json!({"state": {"$eq": "TX"}})
        );
    }

    #[test]
    fn tags_merge_alongside_location_disjunction() {
        let canonical = CanonicalFilter {
            flat_locations: vec![flat(Some("CA"), Some("Alameda"))],
            tags: TagSet {
                obligation: true,
                penalty: true,
                permission: false,
            },
            ..Default::default()
        };
        assert_eq!(
            compile(&canonical).as_value(),
            &serde_json::json!({
                "$or": [{"state": {"$eq": "CA"}, "county": {"$eq": "Alameda"}}],
                "obligation": {"$eq": "Y"},
                "penalty": {"$eq": "Y"}
            })
        );
    }

    #[test]
    fn inactive_tags_compile_to_no_clause() {
        let canonical = CanonicalFilter {
            tags: TagSet::default(),
            ..Default::default()
        };
        assert!(compile(&canonical).is_empty());
    }
}
