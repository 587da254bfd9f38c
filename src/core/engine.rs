use crate::core::catalog::MenuCatalog;
use crate::core::report::QueryOutput;
use crate::core::request::MenuQuery;
use crate::domain::model::CaloricThresholds;
use crate::domain::ports::MenuSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct CatalogEngine<S: MenuSource> {
    source: S,
    thresholds: CaloricThresholds,
}

impl<S: MenuSource> CatalogEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            thresholds: CaloricThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: CaloricThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> &CaloricThresholds {
        &self.thresholds
    }

    pub async fn load(&self) -> Result<MenuCatalog> {
        tracing::debug!("Loading menu from {}", self.source.describe());
        let menu = self.source.load().await?;
        menu.validate()?;

        let catalog = MenuCatalog::from(menu);
        tracing::info!(
            "Loaded {} dishes from {}",
            catalog.len(),
            self.source.describe()
        );
        Ok(catalog)
    }

    /// Evaluates one query against an already loaded catalog.
    pub fn evaluate(&self, catalog: &MenuCatalog, query: &MenuQuery) -> Result<QueryOutput> {
        query.validate()?;
        let output = query.evaluate(catalog, &self.thresholds);
        tracing::debug!("Query '{}' produced {} entries", query.kind(), output.len());
        Ok(output)
    }

    pub async fn run(&self, query: &MenuQuery) -> Result<QueryOutput> {
        self.thresholds.validate()?;
        let catalog = self.load().await?;
        self.evaluate(&catalog, query)
    }

    /// Loads the catalog once and evaluates every query in order.
    pub async fn run_all<'q, I>(&self, queries: I) -> Result<Vec<(&'q str, QueryOutput)>>
    where
        I: IntoIterator<Item = (&'q str, &'q MenuQuery)>,
    {
        self.thresholds.validate()?;
        let catalog = self.load().await?;

        let mut outputs = Vec::new();
        for (name, query) in queries {
            tracing::info!("Running query '{}' ({})", name, query.kind());
            outputs.push((name, self.evaluate(&catalog, query)?));
        }
        Ok(outputs)
    }
}
