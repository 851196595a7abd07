use serde::{Deserialize, Serialize};

/// Lifecycle status of a bill on the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

/// The record persisted at submit time, built from the form fields plus the
/// confirmed attachment. `file_url` is only ever set after the attachment
/// step succeeded; a new draft is always `pending`.
///
/// `amount` stays `None` when the raw field did not parse; the store
/// receives a JSON null for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillDraft {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Option<i64>,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub status: BillStatus,
}

/// A bill as listed by the store. The store is permissive about which
/// fields are populated, so everything beyond the identifier is optional
/// or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bill {
    pub id: String,
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub pct: Option<i64>,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Acknowledgement of a record update. The store echoes the record id back;
/// nothing else about the shape is inspected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAck {
    #[serde(default)]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BillDraft {
        BillDraft {
            email: "employee@test.com".to_string(),
            expense_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: Some(348),
            date: "2004-04-04".to_string(),
            vat: "70".to_string(),
            pct: 20,
            commentary: "séminaire billed".to_string(),
            file_url: "http://localhost:5678/test.jpg".to_string(),
            file_name: "test.jpg".to_string(),
            status: BillStatus::Pending,
        }
    }

    #[test]
    fn draft_serializes_with_wire_field_names() {
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&draft()).expect("serialize draft"))
                .expect("round-trip");
        assert_eq!(json["type"], "Transports");
        assert_eq!(json["fileUrl"], "http://localhost:5678/test.jpg");
        assert_eq!(json["fileName"], "test.jpg");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["amount"], 348);
    }

    #[test]
    fn unparsed_amount_serializes_as_null() {
        let mut draft = draft();
        draft.amount = None;
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&draft).expect("serialize draft"))
                .expect("round-trip");
        assert!(json["amount"].is_null());
    }

    #[test]
    fn bill_tolerates_sparse_listing_rows() {
        let bill: Bill = serde_json::from_str(
            r#"{"id":"corrupted","date":"invalid-date","status":"pending"}"#,
        )
        .expect("sparse row");
        assert_eq!(bill.id, "corrupted");
        assert_eq!(bill.date, "invalid-date");
        assert_eq!(bill.status.as_deref(), Some("pending"));
        assert_eq!(bill.amount, None);
        assert_eq!(bill.file_url, None);
    }

    #[test]
    fn update_ack_shape_is_not_inspected() {
        let ack: UpdateAck = serde_json::from_str(r#"{"id":"1234","extra":"ignored"}"#)
            .expect("permissive ack");
        assert_eq!(ack.id.as_deref(), Some("1234"));
        let empty: UpdateAck = serde_json::from_str("{}").expect("empty ack");
        assert_eq!(empty.id, None);
    }
}
