use std::future::Future;
use futures::future::{ AbortHandle, AbortRegistration, Abortable, Aborted };
use crate::error::FetchError;
use crate::models::Post;

pub type FetchResult = Result<Vec<Post>, FetchError>;

/// Lets the owner of the page give up on the in-flight request.
#[derive(Clone, Debug)]
pub struct FetchHandle {
    abort: AbortHandle,
}

impl FetchHandle {
    pub fn pair() -> (Self, AbortRegistration) {
        let (abort, registration) = AbortHandle::new_pair();
        (Self { abort }, registration)
    }

    pub fn abandon(&self) {
        self.abort.abort();
    }
}

/// Drive `fetch` to completion unless its handle was abandoned first.
///
/// `None` means abandoned: the caller must not touch the view state.
pub async fn run_fetch<F>(registration: AbortRegistration, fetch: F) -> Option<FetchResult>
    where F: Future<Output = FetchResult>
{
    match Abortable::new(fetch, registration).await {
        Ok(result) => Some(result),
        Err(Aborted) => {
            log::info!("Posts fetch abandoned before completion");
            None
        }
    }
}
