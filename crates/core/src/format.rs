//! Response extraction and text rendering
//!
//! Formatters never mutate the response. Extraction fails with
//! `DlpError::MalformedResponse` when an expected field is missing.

use dlpscope_domain::{
    DeidentifyContentResponse, DlpError, Finding, InspectContentResponse, InspectResult, Result,
    Table,
};

/// Line printed when an inspection matched nothing.
pub const NO_FINDINGS: &str = "No findings.";

/// The transformed table carried by a de-identify response.
///
/// # Errors
/// Returns `DlpError::MalformedResponse` if the response has no item or the
/// item is not a table.
pub fn deidentified_table(response: &DeidentifyContentResponse) -> Result<&Table> {
    response
        .item
        .as_ref()
        .ok_or_else(|| DlpError::MalformedResponse("de-identify response has no item".into()))?
        .as_table()
        .ok_or_else(|| DlpError::MalformedResponse("de-identify response item is not a table".into()))
}

/// The inspection result carried by an inspect response.
///
/// # Errors
/// Returns `DlpError::MalformedResponse` if the response has no result.
pub fn inspect_findings(response: &InspectContentResponse) -> Result<&InspectResult> {
    response
        .result
        .as_ref()
        .ok_or_else(|| DlpError::MalformedResponse("inspect response has no result".into()))
}

/// Render a de-identified table as a heading followed by 2-space indented
/// JSON.
///
/// # Errors
/// Returns `DlpError::Internal` if the table cannot be serialized.
pub fn format_deidentified_table(table: &Table) -> Result<String> {
    let json = serde_json::to_string_pretty(table)
        .map_err(|err| DlpError::Internal(format!("failed to render table: {err}")))?;

    Ok(format!("Table after de-identification:\n{json}\n"))
}

/// Render findings in service order.
///
/// An empty slice renders as the single line [`NO_FINDINGS`]. Otherwise a
/// count header is followed by one block per finding; the quote line is only
/// written for findings that carry a quote.
pub fn format_findings(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return format!("{NO_FINDINGS}\n");
    }

    let mut out = format!("Findings: {}\n\n", findings.len());
    for finding in findings {
        out.push_str(&format!("InfoType: {}\n", finding.info_type.name));
        if let Some(quote) = &finding.quote {
            out.push_str(&format!("\tQuote: {quote}\n"));
        }
        out.push_str(&format!("\tLikelihood: {}\n\n", finding.likelihood));
    }
    out
}
