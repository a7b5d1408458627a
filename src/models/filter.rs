//! Search filters for the JobNimbus contacts endpoint.
//!
//! JobNimbus accepts an Elasticsearch-style bool filter in the `filter` query
//! parameter, e.g.
//!
//! ```json
//! {"should": [{"wildcard": {"first_name": "*smi*"}}], "minimum_should_match": 1}
//! ```

use crate::domain::SearchQuery;
use serde::Serialize;
use std::collections::BTreeMap;

/// Contact fields the customer search matches against.
pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const COMPANY: &str = "company";

/// A single match clause.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterClause {
    /// Exact term match on one field.
    Term(BTreeMap<String, String>),
    /// Pattern match on one field; `*` matches any substring.
    Wildcard(BTreeMap<String, String>),
}

impl FilterClause {
    pub fn term(field: &str, value: impl Into<String>) -> Self {
        FilterClause::Term(BTreeMap::from([(field.to_string(), value.into())]))
    }

    /// A wildcard clause matching `value` anywhere in the field.
    pub fn contains(field: &str, value: &str) -> Self {
        FilterClause::Wildcard(BTreeMap::from([(field.to_string(), format!("*{}*", value))]))
    }
}

/// A bool filter: every `must` clause has to match, and at least
/// `minimum_should_match` of the `should` clauses.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ContactFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<FilterClause>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<FilterClause>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<u32>,
}

impl ContactFilter {
    /// All clauses must match.
    pub fn all(clauses: Vec<FilterClause>) -> Self {
        Self {
            must: clauses,
            ..Default::default()
        }
    }

    /// At least one clause must match.
    pub fn any(clauses: Vec<FilterClause>) -> Self {
        Self {
            should: clauses,
            minimum_should_match: Some(1),
            ..Default::default()
        }
    }

    /// Serialize to the compact JSON JobNimbus expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The filter shapes tried for one customer search, in precedence order.
///
/// When the same contact is found by several strategies, the earliest
/// strategy's result wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// First token on first name AND remaining tokens on last name.
    Exact,
    /// Whole query as a term on first name, last name or company.
    Broad,
    /// Whole query as a substring of first name, last name or company.
    Wildcard,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::Exact,
        SearchStrategy::Broad,
        SearchStrategy::Wildcard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Exact => "exact",
            SearchStrategy::Broad => "broad",
            SearchStrategy::Wildcard => "wildcard",
        }
    }

    /// Build this strategy's filter, or `None` if it does not apply to the query.
    pub fn filter_for(&self, query: &SearchQuery) -> Option<ContactFilter> {
        let text = query.as_str();
        match self {
            SearchStrategy::Exact => query.name_parts().map(|(first, last)| {
                ContactFilter::all(vec![
                    FilterClause::term(FIRST_NAME, first),
                    FilterClause::term(LAST_NAME, last),
                ])
            }),
            SearchStrategy::Broad => Some(ContactFilter::any(vec![
                FilterClause::term(FIRST_NAME, text),
                FilterClause::term(LAST_NAME, text),
                FilterClause::term(COMPANY, text),
            ])),
            SearchStrategy::Wildcard => Some(ContactFilter::any(vec![
                FilterClause::contains(FIRST_NAME, text),
                FilterClause::contains(LAST_NAME, text),
                FilterClause::contains(COMPANY, text),
            ])),
        }
    }

    /// The applicable strategies for a query, paired with their filters.
    pub fn plan(query: &SearchQuery) -> Vec<(SearchStrategy, ContactFilter)> {
        Self::ALL
            .iter()
            .filter_map(|strategy| strategy.filter_for(query).map(|filter| (*strategy, filter)))
            .collect()
    }
}
