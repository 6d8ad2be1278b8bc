//! FilterRequest → CanonicalFilter.
//!
//! Nested location entries expand into flat `(state, county)` pairs: each
//! entry contributes one pair per county, all sharing the entry's state.
//! Boolean tag fields accept a native boolean or a string; a string is true
//! only when it case-insensitively equals "Y". Falsy values are omitted,
//! never encoded as false.

use lexrag_core::models::{CanonicalFilter, FilterRequest, FlatLocation, TagSet, TagValue};

/// Normalize a raw filter request into its canonical form.
/// Malformed location entries expand to nothing; this never fails.
pub fn normalize(request: &FilterRequest) -> CanonicalFilter {
    let mut flat_locations = Vec::new();
    for entry in &request.locations {
        for county in &entry.counties {
            flat_locations.push(FlatLocation {
                state: entry.state.clone(),
                county: Some(county.clone()),
            });
        }
    }

    CanonicalFilter {
        state: request.state.clone(),
        county: request.county.clone(),
        flat_locations,
        tags: TagSet {
            obligation: tag_active(&request.obligation),
            penalty: tag_active(&request.penalty),
            permission: tag_active(&request.permission),
        },
    }
}

fn tag_active(value: &Option<TagValue>) -> bool {
    value.as_ref().is_some_and(TagValue::is_active)
}
