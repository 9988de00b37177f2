use crate::domain::model::{Company, Defect, Record};
use crate::domain::ports::DefectLog;
use crate::utils::error::Result;
use std::collections::HashMap;

/// Remove every company whose id is shared with another schema-valid
/// company. All members of a duplicate group are reclassified as invalid,
/// including the first one seen; each group is logged and appended
/// together, groups in first-seen order. Survivors come back sorted
/// ascending by id, which fixes the report order.
pub fn dedup_companies(
    companies: Vec<(Company, Record)>,
    invalid_companies: &mut Vec<Record>,
    defect_log: &dyn DefectLog,
) -> Result<Vec<Company>> {
    let mut groups: HashMap<i64, Vec<(Company, Record)>> = HashMap::new();
    let mut id_order: Vec<i64> = Vec::new();
    for entry in companies {
        let group = groups.entry(entry.0.id).or_default();
        if group.is_empty() {
            id_order.push(entry.0.id);
        }
        group.push(entry);
    }

    let mut valid = Vec::with_capacity(id_order.len());
    for id in id_order {
        let Some(group) = groups.remove(&id) else {
            continue;
        };
        if group.len() > 1 {
            for (company, record) in group {
                defect_log.record(&Defect::DuplicateId {
                    name: company.name.clone(),
                    id: company.id,
                })?;
                invalid_companies.push(record);
            }
        } else if let Some((company, _)) = group.into_iter().next() {
            valid.push(company);
        }
    }

    valid.sort_by_key(|company| company.id);
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryDefectLog;
    use serde_json::{json, Value};

    fn company(id: i64, name: &str) -> (Company, Record) {
        let value = json!({"id": id, "name": name, "top_up": 10, "email_status": true});
        let data = match value {
            Value::Object(data) => data,
            _ => unreachable!(),
        };
        let record = Record { data };
        (record.bind().unwrap(), record)
    }

    #[test]
    fn test_all_members_of_duplicate_group_removed() {
        let log = MemoryDefectLog::new();
        let mut invalid = Vec::new();
        let companies = vec![company(7, "First"), company(3, "Keep"), company(7, "Second")];

        let valid = dedup_companies(companies, &mut invalid, &log).unwrap();

        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].id, 3);
        assert_eq!(invalid.len(), 2);
        assert_eq!(log.defects().len(), 2);
        assert!(log
            .defects()
            .iter()
            .all(|d| matches!(d, Defect::DuplicateId { id: 7, .. })));
    }

    #[test]
    fn test_duplicates_appended_after_existing_invalids() {
        let log = MemoryDefectLog::new();
        let (_, schema_invalid) = company(99, "BadFormat");
        let mut invalid = vec![schema_invalid];

        dedup_companies(vec![company(7, "A"), company(7, "B")], &mut invalid, &log).unwrap();

        let ids: Vec<_> = invalid.iter().map(Record::id_label).collect();
        assert_eq!(ids, ["99", "7", "7"]);
    }

    #[test]
    fn test_duplicate_groups_logged_and_appended_together() {
        let log = MemoryDefectLog::new();
        let mut invalid = Vec::new();
        let companies = vec![
            company(7, "SevenA"),
            company(9, "NineA"),
            company(3, "Keep"),
            company(7, "SevenB"),
            company(9, "NineB"),
        ];

        dedup_companies(companies, &mut invalid, &log).unwrap();

        // Groups come out clustered, in first-seen order: all 7s, then all 9s
        let logged_ids: Vec<i64> = log
            .defects()
            .iter()
            .map(|d| match d {
                Defect::DuplicateId { id, .. } => *id,
                other => panic!("unexpected defect {:?}", other),
            })
            .collect();
        assert_eq!(logged_ids, [7, 7, 9, 9]);

        let invalid_ids: Vec<_> = invalid.iter().map(Record::id_label).collect();
        assert_eq!(invalid_ids, ["7", "7", "9", "9"]);
    }

    #[test]
    fn test_survivors_sorted_ascending_by_id() {
        let log = MemoryDefectLog::new();
        let mut invalid = Vec::new();
        let companies = vec![company(5, "E"), company(2, "B"), company(9, "I")];

        let valid = dedup_companies(companies, &mut invalid, &log).unwrap();

        let ids: Vec<_> = valid.iter().map(|c| c.id).collect();
        assert_eq!(ids, [2, 5, 9]);
        assert!(invalid.is_empty());
        assert!(log.defects().is_empty());
    }
}
