//! Client of the groshi personal finance API.
//!
//! Every API operation is an async method of [`Client`]. Calls that need a
//! session use the token held by the client, set it with
//! [`Client::authenticate`] or [`Client::set_token`]:
//!
//! ```no_run
//! # async fn run() -> groshi_client::Result<()> {
//! let client = groshi_client::Client::new("http://localhost:8080", "")?;
//! client.authenticate("alice", "correct horse").await?;
//! let user = client.user_read().await?;
//! println!("authorized as {}", user.username);
//! # Ok(())
//! # }
//! ```

pub use client::{Client, ClientBuilder, DEFAULT_TIMEOUT};
pub use error::{ApiError, ClientError, Result};
pub use settings::ClientConfig;

mod auth;
mod client;
mod currencies;
mod dispatch;
mod error;
mod settings;
mod transactions;
mod user;

pub mod types {
    pub mod auth {
        pub use api_types::auth::{Authorization, Credentials};
    }

    pub mod user {
        pub use api_types::user::{User, UserUpdate};
    }

    pub mod transaction {
        pub use api_types::transaction::{
            SummaryGet, Transaction, TransactionGet, TransactionList, TransactionNew,
            TransactionUpdate, TransactionsSummary,
        };
    }

    pub mod currency {
        pub use api_types::currency::Currency;
    }

    pub use api_types::time;
}
