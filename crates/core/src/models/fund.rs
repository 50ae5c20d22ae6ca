use serde::{Deserialize, Deserializer, Serialize};

/// A single search hit from the fund-data API.
///
/// The scheme code is the unique identifier of a fund product and the key
/// used to fetch its full detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundSummary {
    #[serde(rename = "schemeCode", deserialize_with = "scheme_code")]
    pub scheme_code: String,

    #[serde(rename = "schemeName")]
    pub scheme_name: String,
}

/// Descriptive metadata of a fund, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundMeta {
    #[serde(deserialize_with = "scheme_code")]
    pub scheme_code: String,
    pub scheme_name: String,
    pub scheme_category: String,
    pub scheme_type: String,
    pub fund_house: String,
}

/// One historical NAV observation.
///
/// Both fields stay as strings at this layer: the source emits `DD-MM-YYYY`
/// dates and decimal-as-string NAVs, and parsing is the chart transform's
/// job, not the wire model's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub date: String,
    pub nav: String,
}

/// Full fund detail: metadata plus the NAV history series.
///
/// The series is NOT guaranteed sorted by the source; consumers must order
/// it themselves (ascending for charts, descending for "current NAV").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundDetail {
    pub meta: FundMeta,

    #[serde(rename = "data")]
    pub series: Vec<NavEntry>,
}

/// The source emits scheme codes as JSON numbers in some payloads and as
/// strings in others; normalize both to `String`.
fn scheme_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Number(u64),
        Text(String),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Number(n) => n.to_string(),
        Code::Text(s) => s,
    })
}
