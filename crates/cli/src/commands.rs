//! Command dispatch

use std::path::Path;
use std::sync::Arc;

use dlpscope_core::{
    format_deidentified_table, format_findings, parse_info_types, sample_table, DlpService,
};
use dlpscope_domain::{DlpError, Result, Table};
use dlpscope_infra::{config, DlpRestClient};
use tracing::{debug, info};

use crate::args::{Cli, Command};

/// Run a parsed command and return the text to print on stdout.
///
/// # Errors
/// Returns the first error from configuration, input loading, the service
/// call or formatting.
pub async fn run(cli: Cli) -> Result<String> {
    let config = config::load(cli.config)?;
    debug!(endpoint = %config.endpoint, "configuration loaded");

    let transport = DlpRestClient::from_config(&config)?;
    let service = DlpService::new(Arc::new(transport));

    match cli.command {
        Command::DeidentifyTable { project_id, transient_key, table } => {
            let table = match table {
                Some(path) => load_table(&path)?,
                None => sample_table(),
            };
            info!(rows = table.row_count(), columns = table.column_count(), "de-identifying table");

            let deidentified = service.deidentify_table(&project_id, &transient_key, table).await?;
            format_deidentified_table(&deidentified)
        }
        Command::InspectImage { project_id, image_path, info_types } => {
            let info_types = parse_info_types(info_types.as_deref());
            let findings =
                service.inspect_image_file(&project_id, &image_path, info_types).await?;
            Ok(format_findings(&findings))
        }
    }
}

/// Read a table from a JSON file in the service's wire shape:
/// `{"headers": [{"name": ..}], "rows": [{"values": [{"stringValue": ..}]}]}`.
///
/// # Errors
/// Returns `DlpError::InvalidInput` if the file cannot be read, is not a
/// table, or has rows whose width differs from the header count.
pub fn load_table(path: &Path) -> Result<Table> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        DlpError::InvalidInput(format!("failed to read table file {}: {e}", path.display()))
    })?;

    let parsed: Table = serde_json::from_str(&contents).map_err(|e| {
        DlpError::InvalidInput(format!("invalid table JSON in {}: {e}", path.display()))
    })?;

    Table::new(parsed.headers, parsed.rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::Builder;

    use super::*;

    fn table_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_wire_shaped_table() {
        let file = table_file(
            r#"{
                "headers": [{"name": "name"}, {"name": "contact"}],
                "rows": [
                    {"values": [{"stringValue": "Ada"}, {"stringValue": "ada@example.org"}]},
                    {"values": [{"stringValue": "Alan"}, {"stringValue": "555-0100"}]}
                ]
            }"#,
        );

        let table = load_table(file.path()).unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1].values[1].as_str(), Some("555-0100"));
    }

    #[test]
    fn rejects_ragged_table() {
        let file = table_file(
            r#"{"headers": [{"name": "a"}, {"name": "b"}], "rows": [{"values": [{"stringValue": "x"}]}]}"#,
        );

        assert!(matches!(load_table(file.path()), Err(DlpError::InvalidInput(_))));
    }

    #[test]
    fn rejects_invalid_json_and_missing_files() {
        let file = table_file("[1, 2, 3]");
        assert!(matches!(load_table(file.path()), Err(DlpError::InvalidInput(msg)) if msg.contains("invalid table JSON")));

        let missing = load_table(Path::new("/nonexistent/table.json"));
        assert!(matches!(missing, Err(DlpError::InvalidInput(msg)) if msg.contains("failed to read")));
    }
}
