use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CacheConnectorFile {
    pub(crate) directory: PathBuf,
    pub(crate) levels: usize,
}
