use crate::error::{Error, Result};
use crate::models::JobRecord;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

/// Every listing must carry these keys (a JSON null value counts as
/// present). A listing missing one aborts the whole run.
const REQUIRED_FIELDS: [&str; 11] = [
    "id",
    "title",
    "postedDate",
    "detailsPageUrl",
    "jobLocation",
    "salary",
    "companyName",
    "employmentType",
    "workFromHomeAvailability",
    "isRemote",
    "modifiedDate",
];

/// Flattens the API response into output rows, one per listing, in
/// response order. `captured_at` is stamped onto every row at second
/// precision, so a run shares a single capture timestamp.
pub fn normalize(body: &Value, captured_at: DateTime<Utc>) -> Result<Vec<JobRecord>> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or(Error::MissingData)?;

    let captured_at = captured_at.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let mut records = Vec::with_capacity(data.len());

    for (index, listing) in data.iter().enumerate() {
        check_required_fields(listing, index)?;

        records.push(JobRecord {
            id: field_text(listing, "id"),
            title: field_text(listing, "title"),
            posted_date: field_text(listing, "postedDate"),
            details_page_url: field_text(listing, "detailsPageUrl"),
            location: display_name(listing.get("jobLocation")),
            pay_rate: field_text(listing, "salary"),
            company_name: field_text(listing, "companyName"),
            employment_type: field_text(listing, "employmentType"),
            work_from_home_availability: field_text(listing, "workFromHomeAvailability"),
            work_type: work_type(listing.get("isRemote")),
            modified_date: field_text(listing, "modifiedDate"),
            captured_at: captured_at.clone(),
        });
    }

    debug!(record_count = records.len(), "Normalized listings");
    Ok(records)
}

fn check_required_fields(listing: &Value, index: usize) -> Result<()> {
    for field in REQUIRED_FIELDS {
        if listing.get(field).is_none() {
            return Err(Error::SchemaMismatch { index, field });
        }
    }
    Ok(())
}

/// Reads a listing field as text. Null becomes `None`; non-string scalars
/// keep their JSON rendering.
fn field_text(listing: &Value, key: &str) -> Option<String> {
    match listing.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// The listing's `jobLocation` is either null or an object with a
/// `displayName`; anything else is treated as no location.
fn display_name(job_location: Option<&Value>) -> Option<String> {
    job_location
        .and_then(|loc| loc.get("displayName"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn work_type(is_remote: Option<&Value>) -> String {
    match is_remote.and_then(Value::as_bool) {
        Some(true) => "Remote".to_string(),
        _ => "Hybrid/Onsite".to_string(),
    }
}
