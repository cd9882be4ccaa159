use serde::Serialize;

/// One normalized job listing, shaped for the output file. Field order is
/// the column order; the serde renames are the column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    #[serde(rename = "Job_id")]
    pub id: Option<String>,
    #[serde(rename = "Job title")]
    pub title: Option<String>,
    #[serde(rename = "Job posting date")]
    pub posted_date: Option<String>,
    #[serde(rename = "Job posting url")]
    pub details_page_url: Option<String>,
    #[serde(rename = "Job location")]
    pub location: Option<String>,
    #[serde(rename = "Pay rate")]
    pub pay_rate: Option<String>,
    #[serde(rename = "Vendor company name")]
    pub company_name: Option<String>,
    #[serde(rename = "Job type")]
    pub employment_type: Option<String>,
    #[serde(rename = "Work from availability")]
    pub work_from_home_availability: Option<String>,
    #[serde(rename = "Work type(remote/on-site)")]
    pub work_type: String,
    #[serde(rename = "Modified Date")]
    pub modified_date: Option<String>,
    #[serde(rename = "Current date time")]
    pub captured_at: String,
}
