use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_path(&self) -> &str;
    fn bind_addr(&self) -> &str;
    fn max_suggestions(&self) -> usize;
    fn similarity_cutoff(&self) -> f64;
}
