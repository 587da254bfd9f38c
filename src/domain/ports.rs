use crate::domain::model::Menu;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a catalog's dishes come from.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn load(&self) -> Result<Menu>;

    /// Short label used in logs.
    fn describe(&self) -> String;
}

#[async_trait]
impl MenuSource for Box<dyn MenuSource> {
    async fn load(&self) -> Result<Menu> {
        (**self).load().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
