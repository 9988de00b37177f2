use crate::domain::model::{Defect, Record};
use crate::domain::ports::DefectLog;
use crate::domain::schema::{json_type_name, FieldType};
use crate::utils::error::Result;

/// Check one record against a field schema, emitting one defect per
/// offending field: missing when absent, invalid type when present with
/// a type the schema does not accept. Defects never abort the run; a
/// record with any defect is simply invalid.
pub fn verify_record(
    record: &Record,
    schema: &[(&str, FieldType)],
    label: &str,
    defect_log: &dyn DefectLog,
) -> Result<bool> {
    let mut valid = true;
    let record_id = record.id_label();

    for (field, expected) in schema {
        match record.data.get(*field) {
            None => {
                defect_log.record(&Defect::MissingField {
                    label: label.to_string(),
                    record_id: record_id.clone(),
                    field: (*field).to_string(),
                })?;
                valid = false;
            }
            Some(value) if !expected.matches(value) => {
                defect_log.record(&Defect::InvalidType {
                    label: label.to_string(),
                    record_id: record_id.clone(),
                    field: (*field).to_string(),
                    actual: json_type_name(value).to_string(),
                    expected: expected.to_string(),
                })?;
                valid = false;
            }
            Some(_) => {}
        }
    }

    Ok(valid)
}

/// Split records into (valid, invalid), preserving the original relative
/// order within each half.
pub fn partition_records(
    records: Vec<Record>,
    schema: &[(&str, FieldType)],
    label: &str,
    defect_log: &dyn DefectLog,
) -> Result<(Vec<Record>, Vec<Record>)> {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for record in records {
        if verify_record(&record, schema, label, defect_log)? {
            valid.push(record);
        } else {
            invalid.push(record);
        }
    }

    tracing::debug!(
        "{}: {} valid, {} invalid",
        label,
        valid.len(),
        invalid.len()
    );
    Ok((valid, invalid))
}
