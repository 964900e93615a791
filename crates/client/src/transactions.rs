//! Transactions of the authenticated user.
//!
//! Amounts are signed integers in the smallest unit of their currency:
//! positive values are income, negative ones outcome.

use api_types::transaction::{
    SummaryGet, Transaction, TransactionGet, TransactionList, TransactionNew, TransactionUpdate,
    TransactionsSummary,
};
use reqwest::Method;

use crate::{Client, dispatch::ApiRequest, error::Result};

impl Client {
    pub async fn transactions_create(&self, transaction: TransactionNew) -> Result<Transaction> {
        self.dispatch(
            ApiRequest::new(Method::POST, "/transactions")
                .body(transaction)
                .authorized(),
        )
        .await
    }

    /// Reads one transaction. With `query.currency` set the server converts
    /// the amount into that currency.
    pub async fn transactions_read_one(
        &self,
        id: &str,
        query: TransactionGet,
    ) -> Result<Transaction> {
        self.dispatch(
            ApiRequest::new(Method::GET, "/transactions")
                .segment(id)
                .query(query)
                .authorized(),
        )
        .await
    }

    /// Lists the transactions of a time range, in the order the server
    /// returns them.
    pub async fn transactions_read_many(&self, query: TransactionList) -> Result<Vec<Transaction>> {
        self.dispatch(
            ApiRequest::new(Method::GET, "/transactions")
                .query(query)
                .authorized(),
        )
        .await
    }

    /// Partial update, only the `Some` fields of `update` are changed.
    pub async fn transactions_update(
        &self,
        id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        if update.is_empty() {
            tracing::debug!("transaction update carries no field, the server keeps every value");
        }
        self.dispatch(
            ApiRequest::new(Method::PUT, "/transactions")
                .segment(id)
                .body(update)
                .authorized(),
        )
        .await
    }

    /// Deletes a transaction and returns its last state.
    pub async fn transactions_delete(&self, id: &str) -> Result<Transaction> {
        self.dispatch(
            ApiRequest::new(Method::DELETE, "/transactions")
                .segment(id)
                .authorized(),
        )
        .await
    }

    pub async fn transactions_read_summary(&self, query: SummaryGet) -> Result<TransactionsSummary> {
        self.dispatch(
            ApiRequest::new(Method::GET, "/transactions/summary")
                .query(query)
                .authorized(),
        )
        .await
    }
}
