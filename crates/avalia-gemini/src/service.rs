use std::future::Future;
use std::pin::Pin;

use crate::error::AnalysisError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Something that turns a prompt into a model reply.
///
/// Boxed futures keep the trait object-safe so hosts can hold an
/// `Arc<dyn AnalysisService>` and swap in a stub under test.
pub trait AnalysisService: Send + Sync {
    /// Model identifier, for logging.
    fn model(&self) -> &str;

    fn has_credential(&self) -> bool;

    fn analyze<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AnalysisError>>;
}
