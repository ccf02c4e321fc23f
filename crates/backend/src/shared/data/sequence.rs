use contracts::domain::common::{format_reference, parse_reference};
use std::future::Future;
use tokio::sync::Mutex;

/// Allocator of sequential reference codes (`BK001`, `BK002`, ...).
///
/// The next number is loaded once from the existing codes (highest suffix
/// + 1) and then handed out under a lock, so concurrent requests in this
/// process never receive the same code.
pub struct ReferenceSequence {
    prefix: &'static str,
    next: Mutex<Option<u32>>,
}

impl ReferenceSequence {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: Mutex::new(None),
        }
    }

    pub async fn allocate<F, Fut>(&self, existing_codes: F) -> anyhow::Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Vec<String>>>,
    {
        let mut next = self.next.lock().await;
        let number = match *next {
            Some(n) => n,
            None => {
                let codes = existing_codes().await?;
                codes
                    .iter()
                    .filter_map(|code| parse_reference(self.prefix, code))
                    .max()
                    .map_or(1, |max| max + 1)
            }
        };
        *next = Some(number + 1);
        Ok(format_reference(self.prefix, number))
    }
}
