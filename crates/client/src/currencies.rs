use api_types::currency::Currency;
use reqwest::Method;

use crate::{Client, dispatch::ApiRequest, error::Result};

impl Client {
    /// Lists the currencies known to the server. Public, no token needed.
    pub async fn currencies_read(&self) -> Result<Vec<Currency>> {
        self.dispatch(ApiRequest::new(Method::GET, "/currencies"))
            .await
    }
}
