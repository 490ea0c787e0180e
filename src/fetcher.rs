use std::future::Future;

/// Retrieves and parses one portal page.
///
/// `default` is handed back when the page carries no data; a fetch that
/// fails outright is an error instead.
pub trait Fetcher {
    type Output;

    fn get_data(
        &self,
        url: &str,
        default: Self::Output,
    ) -> impl Future<Output = anyhow::Result<Self::Output>> + Send;
}
