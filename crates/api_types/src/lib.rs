//! Wire types of the groshi API.
//!
//! Every request parameter and response body exchanged with the server lives
//! here. Optional request fields are plain `Option`s and are left out of the
//! serialized form when `None`, so the server never receives `null`
//! placeholders for fields the caller did not set.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// The one time format used on the wire: RFC3339 with seconds precision.
///
/// Query string parameters and JSON body fields both go through [`format`],
/// so a timestamp is encoded the same way wherever it is sent.
///
/// [`format`]: time::format
pub mod time {
    use chrono::{DateTime, FixedOffset, ParseError, SecondsFormat};

    pub fn format(timestamp: &DateTime<FixedOffset>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn parse(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
        DateTime::parse_from_rfc3339(text)
    }

    /// `#[serde(with = "...")]` helper for required timestamps.
    pub mod rfc3339 {
        use chrono::{DateTime, FixedOffset};
        use serde::{Deserialize, Deserializer, Serializer, de};

        pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&super::format(value))
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let text = String::deserialize(deserializer)?;
            super::parse(&text).map_err(de::Error::custom)
        }
    }

    /// `#[serde(with = "...")]` helper for optional timestamps.
    ///
    /// Pair it with `skip_serializing_if = "Option::is_none"` and
    /// `default` so absent values are neither sent nor required.
    pub mod rfc3339_option {
        use chrono::{DateTime, FixedOffset};
        use serde::{Deserialize, Deserializer, Serializer, de};

        pub fn serialize<S>(
            value: &Option<DateTime<FixedOffset>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(timestamp) => serializer.serialize_some(&super::format(timestamp)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|text| super::parse(&text).map_err(de::Error::custom))
                .transpose()
        }
    }
}

pub mod auth {
    use super::*;

    /// Username and password pair, used by login and by user creation.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Credentials {
        pub username: String,
        pub password: String,
    }

    /// Bearer token issued by login and refresh.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Authorization {
        pub token: String,
        #[serde(with = "crate::time::rfc3339")]
        pub expires_at: DateTime<FixedOffset>,
    }
}

pub mod user {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub username: String,
    }

    /// Partial update of the current user. Only the fields that are `Some`
    /// are changed.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct UserUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub new_username: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub new_password: Option<String>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Transaction {
        /// Opaque identifier assigned by the server.
        #[serde(rename = "uuid")]
        pub id: String,
        /// Signed amount in the smallest unit of `currency`.
        pub amount: i64,
        pub currency: String,
        /// The server sends an empty string for "no description".
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        pub description: Option<String>,
        #[serde(with = "crate::time::rfc3339")]
        pub timestamp: DateTime<FixedOffset>,
        #[serde(with = "crate::time::rfc3339")]
        pub created_at: DateTime<FixedOffset>,
        #[serde(with = "crate::time::rfc3339")]
        pub updated_at: DateTime<FixedOffset>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub amount: i64,
        pub currency: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// If absent, the server uses the time of creation.
        #[serde(
            default,
            with = "crate::time::rfc3339_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub timestamp: Option<DateTime<FixedOffset>>,
    }

    /// Query of the read-one endpoint.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct TransactionGet {
        /// Convert the amount into this currency.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub currency: Option<String>,
    }

    /// Query of the list endpoint.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionList {
        #[serde(with = "crate::time::rfc3339")]
        pub start_time: DateTime<FixedOffset>,
        #[serde(
            default,
            with = "crate::time::rfc3339_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub end_time: Option<DateTime<FixedOffset>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub currency: Option<String>,
    }

    /// Partial update of a transaction. Only the fields that are `Some` are
    /// sent, the others keep their stored value.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub new_amount: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub new_currency: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub new_description: Option<String>,
        #[serde(
            default,
            with = "crate::time::rfc3339_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub new_timestamp: Option<DateTime<FixedOffset>>,
    }

    impl TransactionUpdate {
        pub fn is_empty(&self) -> bool {
            self.new_amount.is_none()
                && self.new_currency.is_none()
                && self.new_description.is_none()
                && self.new_timestamp.is_none()
        }
    }

    /// Query of the summary endpoint.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SummaryGet {
        pub currency: String,
        #[serde(with = "crate::time::rfc3339")]
        pub start_time: DateTime<FixedOffset>,
        #[serde(
            default,
            with = "crate::time::rfc3339_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub end_time: Option<DateTime<FixedOffset>>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionsSummary {
        pub currency: String,
        pub income: i64,
        pub outcome: i64,
        pub total: i64,
        pub transactions_count: i64,
    }

    fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|text| !text.is_empty()))
    }
}

pub mod currency {
    use super::*;

    /// Entry of the public currency listing.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Currency {
        pub code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub symbol: Option<String>,
    }
}

pub mod error {
    use super::*;

    /// Body of every non-200 response.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ErrorBody {
        pub error_message: String,
        #[serde(default, deserialize_with = "null_as_empty")]
        pub error_details: Vec<String>,
    }

    fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::{
        error::ErrorBody,
        transaction::{Transaction, TransactionList, TransactionNew, TransactionUpdate},
        user::UserUpdate,
    };

    fn at(secs: i64) -> DateTime<FixedOffset> {
        Utc.timestamp_opt(secs, 0).unwrap().fixed_offset()
    }

    #[test]
    fn time_format_uses_z_for_utc() {
        assert_eq!(time::format(&at(0)), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn time_format_keeps_offset() {
        let ts = time::parse("2024-03-01T10:20:30+02:00").unwrap();
        assert_eq!(time::format(&ts), "2024-03-01T10:20:30+02:00");
    }

    #[test]
    fn time_round_trip_keeps_instant() {
        let original = time::parse("2024-03-01T10:20:30.987654+01:00").unwrap();
        let decoded = time::parse(&time::format(&original)).unwrap();
        assert_eq!(decoded.timestamp(), original.timestamp());
    }

    #[test]
    fn time_parse_rejects_garbage() {
        assert!(time::parse("yesterday").is_err());
    }

    #[test]
    fn transaction_new_omits_unset_fields() {
        let body = serde_json::to_value(TransactionNew {
            amount: -250,
            currency: "EUR".to_string(),
            description: None,
            timestamp: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "amount": -250, "currency": "EUR" }));
    }

    #[test]
    fn transaction_new_formats_timestamp() {
        let body = serde_json::to_value(TransactionNew {
            amount: 100,
            currency: "USD".to_string(),
            description: Some("coffee".to_string()),
            timestamp: Some(at(1_700_000_000)),
        })
        .unwrap();
        assert_eq!(body["timestamp"], "2023-11-14T22:13:20Z");
        assert_eq!(body["description"], "coffee");
    }

    #[test]
    fn empty_updates_serialize_to_empty_objects() {
        assert_eq!(serde_json::to_value(UserUpdate::default()).unwrap(), json!({}));
        let update = TransactionUpdate::default();
        assert!(update.is_empty());
        assert_eq!(serde_json::to_value(update).unwrap(), json!({}));
    }

    #[test]
    fn transaction_update_sends_only_supplied_fields() {
        let update = TransactionUpdate {
            new_amount: Some(42),
            new_timestamp: Some(at(0)),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({ "new_amount": 42, "new_timestamp": "1970-01-01T00:00:00Z" })
        );
    }

    #[test]
    fn transaction_list_query_omits_unset_filters() {
        let query = serde_json::to_value(TransactionList {
            start_time: at(0),
            end_time: None,
            currency: None,
        })
        .unwrap();
        assert_eq!(query, json!({ "start_time": "1970-01-01T00:00:00Z" }));
    }

    #[test]
    fn transaction_decodes_from_server_shape() {
        let transaction: Transaction = serde_json::from_value(json!({
            "uuid": "6b1c8a4e",
            "amount": -1500,
            "currency": "EUR",
            "description": "",
            "timestamp": "2024-01-02T03:04:05Z",
            "created_at": "2024-01-02T03:04:06.123Z",
            "updated_at": "2024-01-02T03:04:07+01:00"
        }))
        .unwrap();
        assert_eq!(transaction.id, "6b1c8a4e");
        assert_eq!(transaction.amount, -1500);
        assert_eq!(transaction.description, None);
        assert_eq!(transaction.timestamp, time::parse("2024-01-02T03:04:05Z").unwrap());
    }

    #[test]
    fn transaction_keeps_non_empty_description() {
        let transaction: Transaction = serde_json::from_value(json!({
            "uuid": "x",
            "amount": 1,
            "currency": "USD",
            "description": "rent",
            "timestamp": "2024-01-02T03:04:05Z",
            "created_at": "2024-01-02T03:04:05Z",
            "updated_at": "2024-01-02T03:04:05Z"
        }))
        .unwrap();
        assert_eq!(transaction.description.as_deref(), Some("rent"));
    }

    #[test]
    fn error_body_accepts_null_or_missing_details() {
        let body: ErrorBody =
            serde_json::from_value(json!({ "error_message": "oops", "error_details": null }))
                .unwrap();
        assert!(body.error_details.is_empty());

        let body: ErrorBody = serde_json::from_value(json!({ "error_message": "oops" })).unwrap();
        assert!(body.error_details.is_empty());
    }
}
