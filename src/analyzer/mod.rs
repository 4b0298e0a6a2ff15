use std::path::Path;

use anyhow::Result;

use crate::models::Module;

pub mod go;
pub mod rust;

pub trait Analyzer {
    fn analyze(&self, path: &Path) -> Result<Vec<Module>>;
}
