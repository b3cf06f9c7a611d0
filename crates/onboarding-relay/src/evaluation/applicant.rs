use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Applicant details as posted by the onboarding form.
///
/// Every field is optional and kept as whatever JSON value the form sent; the
/// upstream evaluation decides what is missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSubmission {
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub address_line1: Option<Value>,
    #[serde(default)]
    pub address_line2: Option<Value>,
    #[serde(default)]
    pub city: Option<Value>,
    #[serde(default)]
    pub state: Option<Value>,
    #[serde(default)]
    pub zip_code: Option<Value>,
    #[serde(default)]
    pub country: Option<Value>,
    #[serde(default)]
    pub dob: Option<Value>,
    #[serde(default)]
    pub ssn: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

/// Applicant record in the field schema of the Alloy evaluations endpoint.
///
/// Absent values serialize as `null` rather than being dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlloyApplicantPayload {
    pub name_first: Option<Value>,
    pub name_last: Option<Value>,
    pub address_line_1: Option<Value>,
    pub address_line_2: Option<Value>,
    pub address_city: Option<Value>,
    pub address_state: Option<Value>,
    pub address_postal_code: Option<Value>,
    pub address_country_code: Option<Value>,
    pub birth_date: Option<Value>,
    pub document_ssn: Option<Value>,
    pub email_address: Option<Value>,
}

impl From<ApplicantSubmission> for AlloyApplicantPayload {
    fn from(submission: ApplicantSubmission) -> Self {
        let ApplicantSubmission {
            first_name,
            last_name,
            address_line1,
            address_line2,
            city,
            state,
            zip_code,
            country,
            dob,
            ssn,
            email,
        } = submission;

        Self {
            name_first: first_name,
            name_last: last_name,
            address_line_1: address_line1,
            address_line_2: address_line2,
            address_city: city,
            address_state: state,
            address_postal_code: zip_code,
            address_country_code: country,
            birth_date: dob,
            document_ssn: ssn,
            email_address: email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn renames_every_form_field_to_alloy_key() {
        let submission: ApplicantSubmission = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "addressLine1": "12 St James's Square",
            "addressLine2": "Apt 3",
            "city": "Richmond",
            "state": "VA",
            "zipCode": "23220",
            "country": "US",
            "dob": "1985-12-10",
            "ssn": "123456789",
            "email": "ada@example.com"
        }))
        .expect("submission parses");

        let payload = serde_json::to_value(AlloyApplicantPayload::from(submission))
            .expect("payload serializes");

        assert_eq!(
            payload,
            json!({
                "name_first": "Ada",
                "name_last": "Lovelace",
                "address_line_1": "12 St James's Square",
                "address_line_2": "Apt 3",
                "address_city": "Richmond",
                "address_state": "VA",
                "address_postal_code": "23220",
                "address_country_code": "US",
                "birth_date": "1985-12-10",
                "document_ssn": "123456789",
                "email_address": "ada@example.com"
            })
        );
    }

    #[test]
    fn absent_fields_are_sent_as_null() {
        let submission: ApplicantSubmission =
            serde_json::from_value(json!({ "firstName": "Ada", "addressLine2": null }))
                .expect("partial submission parses");

        let payload = serde_json::to_value(AlloyApplicantPayload::from(submission))
            .expect("payload serializes");
        let object = payload.as_object().expect("payload is an object");

        assert_eq!(object.len(), 11);
        assert_eq!(object["name_first"], json!("Ada"));
        for key in [
            "name_last",
            "address_line_1",
            "address_line_2",
            "address_city",
            "address_state",
            "address_postal_code",
            "address_country_code",
            "birth_date",
            "document_ssn",
            "email_address",
        ] {
            assert_eq!(object.get(key), Some(&Value::Null), "{key} should be null");
        }
    }

    #[test]
    fn ignores_fields_outside_the_form() {
        let submission: ApplicantSubmission =
            serde_json::from_value(json!({ "email": "ada@example.com", "referrer": "ads" }))
                .expect("unknown fields are ignored");
        assert_eq!(submission.email, Some(json!("ada@example.com")));
    }

    #[test]
    fn non_string_values_are_forwarded_unchanged() {
        let submission: ApplicantSubmission = serde_json::from_value(json!({
            "zipCode": 23220,
            "addressLine2": false,
            "dob": { "year": 1985 }
        }))
        .expect("any JSON value is accepted");

        let payload = serde_json::to_value(AlloyApplicantPayload::from(submission))
            .expect("payload serializes");

        assert_eq!(payload["address_postal_code"], json!(23220));
        assert_eq!(payload["address_line_2"], json!(false));
        assert_eq!(payload["birth_date"], json!({ "year": 1985 }));
        assert_eq!(payload["name_first"], Value::Null);
    }
}
