use chrono::{DateTime, Utc};
use finance_repo::transaction_repo::{NewTransaction, Transaction};
use finance_repo::user_repo::UserId;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /transactions`. Only the description may be left out.
#[derive(Deserialize, Validate, Clone, Debug)]
pub struct TransactionFields {
    #[serde(rename = "UserID", alias = "user_id")]
    pub user_id: UserId,
    #[serde(rename = "Amount", alias = "amount")]
    pub amount: Decimal,
    #[serde(rename = "Type", alias = "type")]
    #[validate(length(min = 1))]
    pub kind: String,
    #[serde(rename = "Category", alias = "category")]
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(rename = "Descriptions", alias = "description", default)]
    pub description: Option<String>,
    #[serde(rename = "Date", alias = "date")]
    pub date: DateTime<Utc>,
}

impl From<TransactionFields> for NewTransaction {
    fn from(fields: TransactionFields) -> Self {
        NewTransaction::new(
            fields.user_id,
            fields.amount,
            fields.kind,
            fields.category,
            fields.description,
            fields.date,
        )
    }
}

/// Body of `PUT /transactions/{id}`. A missing or null field keeps the stored
/// value.
#[derive(Deserialize, Validate, Clone, Debug, Default)]
pub struct TransactionPatch {
    #[serde(rename = "UserID", alias = "user_id")]
    pub user_id: Option<UserId>,
    #[serde(rename = "Amount", alias = "amount")]
    pub amount: Option<Decimal>,
    #[serde(rename = "Type", alias = "type")]
    #[validate(length(min = 1))]
    pub kind: Option<String>,
    #[serde(rename = "Category", alias = "category")]
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[serde(rename = "Descriptions", alias = "description")]
    pub description: Option<String>,
    #[serde(rename = "Date", alias = "date")]
    pub date: Option<DateTime<Utc>>,
}

impl TransactionPatch {
    pub fn apply(self, transaction: &mut Transaction) {
        if let Some(user_id) = self.user_id {
            transaction.user_id = user_id;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
        if let Some(category) = self.category {
            transaction.category = category;
        }
        if let Some(description) = self.description {
            transaction.description = Some(description);
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stored_transaction() -> Transaction {
        Transaction::new(
            3,
            1,
            Decimal::from(500000),
            "expense".to_string(),
            "Food".to_string(),
            Some("Lunch at a restaurant".to_string()),
            Utc.with_ymd_and_hms(2024, 11, 20, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn patch_overwrites_present_fields_only() {
        let mut transaction = stored_transaction();
        let patch: TransactionPatch = serde_json::from_str(
            r#"{"Amount": 450000, "Date": "2024-11-20T12:00:00Z", "Descriptions": null}"#,
        )
        .unwrap();
        patch.apply(&mut transaction);

        assert_eq!(transaction.id, 3);
        assert_eq!(transaction.user_id, 1);
        assert_eq!(transaction.amount, Decimal::from(450000));
        assert_eq!(transaction.kind, "expense");
        assert_eq!(transaction.category, "Food");
        assert_eq!(
            transaction.description.as_deref(),
            Some("Lunch at a restaurant")
        );
        assert_eq!(
            transaction.date,
            Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn fields_without_description() {
        let fields: TransactionFields = serde_json::from_str(
            r#"{"UserID": 1, "Amount": 500000, "Type": "expense", "Category": "Food", "Date": "2024-11-20T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(fields.validate().is_ok());

        let new_transaction = NewTransaction::from(fields);
        assert_eq!(new_transaction.description, None);
        assert_eq!(new_transaction.amount, Decimal::from(500000));
    }

    #[test]
    fn fields_require_date() {
        let result = serde_json::from_str::<TransactionFields>(
            r#"{"UserID": 1, "Amount": 1, "Type": "income", "Category": "Salary"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn fields_reject_empty_category() {
        let fields: TransactionFields = serde_json::from_str(
            r#"{"UserID": 1, "Amount": 1, "Type": "income", "Category": "", "Date": "2024-11-20T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(fields.validate().is_err());
    }
}
