use validator::Validate;

use crate::error::{ScreeningError, ScreeningResult};
use crate::models::{ScreenRequest, ScreeningQuery};

/// Check a screening request and turn it into a query.
///
/// All of `fullName`, `dob` and `country` must be present and non-blank.
/// Values are passed on untrimmed.
pub fn validate_request(req: ScreenRequest) -> ScreeningResult<ScreeningQuery> {
    if let Err(errors) = req.validate() {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| wire_name(field).to_string())
            .collect();
        fields.sort();
        return Err(ScreeningError::MissingField(fields));
    }

    match (req.full_name, req.dob, req.country) {
        (Some(full_name), Some(date_of_birth), Some(country)) => Ok(ScreeningQuery {
            full_name,
            date_of_birth,
            country,
        }),
        // validate() enforces presence
        _ => Err(ScreeningError::InternalError(
            "Validated screening request is missing fields".to_string(),
        )),
    }
}

fn wire_name(field: &str) -> &str {
    match field {
        "full_name" => "fullName",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(full_name: Option<&str>, dob: Option<&str>, country: Option<&str>) -> ScreenRequest {
        ScreenRequest {
            full_name: full_name.map(String::from),
            dob: dob.map(String::from),
            country: country.map(String::from),
        }
    }

    #[test]
    fn test_valid_request_passes_values_through() {
        let query = validate_request(request(Some(" Jane Doe "), Some("01/02/1980"), Some("Iran")))
            .unwrap();

        assert_eq!(query.full_name, " Jane Doe ");
        assert_eq!(query.date_of_birth, "01/02/1980");
        assert_eq!(query.country, "Iran");
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let err = validate_request(request(None, Some("1980-01-01"), Some(""))).unwrap_err();

        match err {
            ScreeningError::MissingField(fields) => {
                assert_eq!(fields, vec!["country".to_string(), "fullName".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
