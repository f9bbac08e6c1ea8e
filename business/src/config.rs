use std::env::vars;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::sort::{SortDirection, SortField, SortState};

/// Environment variables as read, before defaults are applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    catalog_sorting: Option<bool>,
    catalog_fixtures_dir: Option<String>,
    catalog_sort_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    sorting: bool,
    fixtures_dir: Option<PathBuf>,
    initial_sort: Option<SortField>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sorting: true,
            fixtures_dir: None,
            initial_sort: None,
        }
    }
}

impl CatalogConfig {
    /// Reads `CATALOG_*` variables from the process environment.
    pub fn init() -> Result<Self> {
        info!("Loading catalog configuration from environment variables");
        Self::from_iter(vars())
    }

    pub fn from_iter<I, S>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(iter).map_err(|err| CatalogError::Config(err.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let RawConfig {
            catalog_sorting,
            catalog_fixtures_dir,
            catalog_sort_by,
        } = raw;

        let sorting = catalog_sorting.unwrap_or(true);
        let initial_sort = catalog_sort_by
            .as_deref()
            .map(str::parse::<SortField>)
            .transpose()?;

        if !sorting && initial_sort.is_some() {
            return Err(CatalogError::Config(
                "CATALOG_SORT_BY requires CATALOG_SORTING to be enabled".to_owned(),
            ));
        }

        let fixtures_dir = catalog_fixtures_dir
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if let Some(dir) = &fixtures_dir {
            info!("Using fixtures from {}", dir.display());
        }

        Ok(Self {
            sorting,
            fixtures_dir,
            initial_sort,
        })
    }

    #[must_use]
    pub fn with_sorting(mut self, sorting: bool) -> Self {
        self.sorting = sorting;
        self
    }

    /// Whether column headers are sortable.
    pub fn sorting(&self) -> bool {
        self.sorting
    }

    pub fn fixtures_dir(&self) -> Option<&Path> {
        self.fixtures_dir.as_deref()
    }

    /// Sort state the UI starts with.
    pub fn initial_sort(&self) -> SortState {
        self.initial_sort
            .map(|field| SortState::new(field, SortDirection::Ascending))
            .unwrap_or_default()
    }
}
