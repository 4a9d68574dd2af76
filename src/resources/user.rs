//! The authenticated user.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::User;
use crate::transport::{RequestData, Transport};

const URL_ME: &str = "/users/me";

/// The account the access token belongs to.
pub trait UserApi: Send + Sync {
    /// Fetch the authenticated user.
    fn get(&self) -> impl Future<Output = Result<User>> + Send;
}

/// [`UserApi`] over a shared [`Transport`].
pub struct UserClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> UserClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for UserClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> UserApi for UserClient<C> {
    async fn get(&self) -> Result<User> {
        self.transport.execute(RequestData::get(URL_ME)).await
    }
}
