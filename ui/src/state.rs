use catalog_business::{
    Catalog, CatalogConfig, Comparators, EnrichedProduct, Fixtures, Result, Selection, SelectionAction,
};
use log::debug;

/// The main application state.
///
/// The catalog is read-only after load; only `selection` changes, and only
/// through [`State::apply`].
#[derive(Debug)]
pub struct State {
    /// Joined fixture data.
    pub catalog: Catalog,
    /// Current filters and sort.
    pub selection: Selection,
    /// Column comparators used when sorting is enabled.
    pub comparators: Comparators,
    pub config: CatalogConfig,
}

impl State {
    pub fn new(catalog: Catalog, config: CatalogConfig) -> Self {
        Self {
            catalog,
            selection: Selection::with_sort(config.initial_sort()),
            comparators: Comparators::default(),
            config,
        }
    }

    /// Loads the catalog described by `config`.
    pub fn load(config: CatalogConfig) -> Result<Self> {
        let catalog = Catalog::load(&config)?;
        Ok(Self::new(catalog, config))
    }

    /// State over the embedded fixtures with default configuration.
    pub fn test() -> Result<Self> {
        Self::test_with_config(CatalogConfig::default())
    }

    /// State over the embedded fixtures; `config.fixtures_dir()` is ignored.
    pub fn test_with_config(config: CatalogConfig) -> Result<Self> {
        let catalog = Catalog::join(Fixtures::embedded()?)?;
        Ok(Self::new(catalog, config))
    }

    /// Rows to render this frame.
    pub fn visible_products(&self) -> Vec<&EnrichedProduct> {
        let comparators = self.config.sorting().then_some(&self.comparators);
        self.catalog.visible(&self.selection, comparators)
    }

    /// Applies actions collected while rendering a frame.
    pub fn apply(&mut self, actions: impl IntoIterator<Item = SelectionAction>) {
        let before = self.selection.clone();
        for action in actions {
            self.selection.apply(action);
        }
        if before != self.selection {
            debug!(
                "Selection changed, {} products visible",
                self.visible_products().len()
            );
        }
    }
}
