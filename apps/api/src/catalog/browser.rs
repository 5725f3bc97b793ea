//! Catalog browser: title search plus department and status selection.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::position::{Position, PositionStatus};

/// Raw query parameters. Lists are comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub departments: Option<String>,
    pub statuses: Option<String>,
}

/// A parsed filter. `None` (or an empty list) means the dimension is not restricted.
#[derive(Debug, Default, Clone)]
pub struct CatalogFilter {
    pub search: Option<String>,
    pub departments: Option<Vec<String>>,
    pub statuses: Option<Vec<PositionStatus>>,
}

impl CatalogFilter {
    pub fn from_query(query: &CatalogQuery) -> Result<Self, AppError> {
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let departments = query.departments.as_deref().map(split_list).and_then(|d| {
            let owned: Vec<String> = d.into_iter().map(str::to_string).collect();
            (!owned.is_empty()).then_some(owned)
        });

        let statuses = match query.statuses.as_deref().map(split_list) {
            Some(tokens) if !tokens.is_empty() => {
                let parsed = tokens
                    .into_iter()
                    .map(|t| {
                        PositionStatus::parse(t).ok_or_else(|| {
                            AppError::Validation(format!(
                                "unknown position status '{t}' (expected open or occupied)"
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Some(parsed)
            }
            _ => None,
        };

        Ok(CatalogFilter {
            search,
            departments,
            statuses,
        })
    }

    fn matches(&self, position: &Position) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .map(|needle| position.title.to_lowercase().contains(needle))
            .unwrap_or(true);
        let department_ok = self
            .departments
            .as_ref()
            .map(|set| set.iter().any(|d| *d == position.department))
            .unwrap_or(true);
        let status_ok = self
            .statuses
            .as_ref()
            .map(|set| set.contains(&position.status))
            .unwrap_or(true);

        search_ok && department_ok && status_ok
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Selects the catalog rows matching every active filter, in catalog order.
pub fn filter_catalog<'a>(catalog: &'a [Position], filter: &CatalogFilter) -> Vec<&'a Position> {
    catalog.iter().filter(|p| filter.matches(p)).collect()
}
