use crate::domain::model::{GrowthStage, SoilProfile};
use crate::utils::error::Result;

/// Filesystem-shaped storage boundary so export targets can be swapped in
/// tests.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Read-only lookup of the soil and stage tables. Loaded once at startup,
/// never mutated afterwards.
pub trait CatalogProvider {
    fn soil(&self, name: &str) -> Result<&SoilProfile>;
    fn stage(&self, name: &str) -> Result<&GrowthStage>;
    fn soil_names(&self) -> Vec<&str>;
    fn stage_names(&self) -> Vec<&str>;
}
