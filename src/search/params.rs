use crate::error::Result;
use crate::search::input::{parse_url, SearchInput};
use tracing::debug;

/// Ordered query parameters for the search request. The client serializes
/// these into the query string as-is.
pub type QueryParams = Vec<(&'static str, String)>;

const FACETS: &str =
    "employmentType|postedDate|workFromHomeAvailability|employerType|easyApply|isRemote";

const FIELDS: &str = "id|jobId|guid|summary|title|postedDate|modifiedDate|\
                      jobLocation.displayName|detailsPageUrl|salary|clientBrandId|\
                      companyPageUrl|companyLogoUrl|positionId|companyName|employmentType|\
                      isHighlighted|score|easyApply|employerType|workFromHomeAvailability|\
                      isRemote|debug";

const EMPLOYMENT_TYPE_FILTER: &str = "CONTRACTS|PARTTIME";

/// Builds the full outbound parameter set for the resolved search input.
///
/// URL mode extracts `q`/`latitude`/`longitude` from the pasted URL; any of
/// them may be missing, in which case the key is omitted entirely. The
/// `location` field is extracted as well but never sent, matching the
/// upstream search page's own traffic.
pub fn build_params(input: &SearchInput) -> Result<QueryParams> {
    let mut params: QueryParams = Vec::new();

    match input {
        SearchInput::Keyword(keyword) => {
            params.push(("q", keyword.clone()));
            params.push(("radius", "30".to_string()));
        }
        SearchInput::UrlQuery(raw) => {
            let fields = parse_url(raw)?;
            if let Some(q) = fields.q {
                params.push(("q", q));
            }
            if let Some(latitude) = fields.latitude {
                params.push(("latitude", latitude));
            }
            if let Some(longitude) = fields.longitude {
                params.push(("longitude", longitude));
            }
            params.push(("locationPrecision", "city".to_string()));
            params.push(("radius", "100".to_string()));
        }
    }

    params.push(("radiusUnit", "mi".to_string()));
    params.push(("countryCode2", "US".to_string()));
    params.push(("page", "1".to_string()));
    params.push(("pageSize", "100".to_string()));
    params.push(("facets", FACETS.to_string()));
    params.push(("fields", FIELDS.to_string()));
    params.push(("culture", "en".to_string()));
    params.push(("recommendations", "true".to_string()));
    params.push(("interactionId", "0".to_string()));
    params.push(("fj", "true".to_string()));
    params.push(("includeRemote", "true".to_string()));
    params.push(("filters.employmentType", EMPLOYMENT_TYPE_FILTER.to_string()));

    debug!(param_count = params.len(), "Built request parameters");
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn keyword_mode_sets_query_and_narrow_radius() {
        let input = SearchInput::Keyword("data engineer".to_string());
        let params = build_params(&input).unwrap();

        assert_eq!(get(&params, "q"), Some("data engineer"));
        assert_eq!(get(&params, "radius"), Some("30"));
        assert_eq!(get(&params, "radiusUnit"), Some("mi"));
        assert_eq!(get(&params, "latitude"), None);
        assert_eq!(get(&params, "longitude"), None);
        assert_eq!(get(&params, "locationPrecision"), None);
    }

    #[test]
    fn url_mode_extracts_coordinates_and_widens_radius() {
        let input = SearchInput::UrlQuery(
            "https://www.dice.com/jobs?q=A&location=B&latitude=1&longitude=2".to_string(),
        );
        let params = build_params(&input).unwrap();

        assert_eq!(get(&params, "q"), Some("A"));
        assert_eq!(get(&params, "latitude"), Some("1"));
        assert_eq!(get(&params, "longitude"), Some("2"));
        assert_eq!(get(&params, "locationPrecision"), Some("city"));
        assert_eq!(get(&params, "radius"), Some("100"));
        // The URL's location value is parsed but never sent.
        assert_eq!(get(&params, "location"), None);
    }

    #[test]
    fn url_mode_omits_missing_fields_instead_of_stringifying() {
        let input = SearchInput::UrlQuery("https://www.dice.com/jobs".to_string());
        let params = build_params(&input).unwrap();

        assert_eq!(get(&params, "q"), None);
        assert_eq!(get(&params, "latitude"), None);
        assert_eq!(get(&params, "longitude"), None);
        // Fixed parameters are still present.
        assert_eq!(get(&params, "countryCode2"), Some("US"));
        assert_eq!(get(&params, "pageSize"), Some("100"));
        assert_eq!(
            get(&params, "filters.employmentType"),
            Some("CONTRACTS|PARTTIME")
        );
    }

    #[test]
    fn both_modes_share_the_fixed_tail() {
        let keyword = build_params(&SearchInput::Keyword("x".to_string())).unwrap();
        let url =
            build_params(&SearchInput::UrlQuery("https://example.com/".to_string())).unwrap();

        for params in [&keyword, &url] {
            assert_eq!(get(params, "page"), Some("1"));
            assert_eq!(get(params, "culture"), Some("en"));
            assert_eq!(get(params, "fj"), Some("true"));
            assert_eq!(get(params, "includeRemote"), Some("true"));
            assert!(get(params, "fields").unwrap().contains("jobLocation.displayName"));
        }
    }
}
