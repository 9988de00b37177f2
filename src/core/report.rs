use crate::domain::model::{CompanySummary, UserTopUp};

pub const OUTPUT_FILE: &str = "output.txt";
pub const INVALID_COMPANIES_FILE: &str = "invalid_companies.json";
pub const INVALID_USERS_FILE: &str = "invalid_users.json";

/// Render the full text report. Each company block opens with a blank
/// line; the file ends with one trailing blank line.
pub fn render_report(summaries: &[CompanySummary]) -> String {
    let mut out = String::new();

    for summary in summaries {
        out.push('\n');
        out.push_str(&format!("\tCompany Id: {}\n", summary.company_id));
        out.push_str(&format!("\tCompany Name: {}\n", summary.company_name));

        out.push_str("\tUsers Emailed:\n");
        for user in &summary.emailed {
            push_user(&mut out, user);
        }

        out.push_str("\tUsers Not Emailed:\n");
        for user in &summary.not_emailed {
            push_user(&mut out, user);
        }

        out.push_str(&format!(
            "\t\tTotal amount of top ups for {}: {}\n",
            summary.company_name, summary.total_top_ups
        ));
    }

    out.push('\n');
    out
}

fn push_user(out: &mut String, user: &UserTopUp) {
    out.push_str(&format!(
        "\t\t{}, {}, {}\n",
        user.last_name, user.first_name, user.email
    ));
    out.push_str(&format!(
        "\t\t  Previous Token Balance, {}\n",
        user.previous_balance
    ));
    out.push_str(&format!("\t\t  New Token Balance {}\n", user.new_balance));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_summary() -> CompanySummary {
        CompanySummary {
            company_id: 1,
            company_name: "Acme".to_string(),
            emailed: vec![UserTopUp {
                first_name: "A".to_string(),
                last_name: "Z".to_string(),
                email: "a.z@example.com".to_string(),
                previous_balance: 5,
                new_balance: 15,
            }],
            not_emailed: vec![],
            total_top_ups: 10,
        }
    }

    #[test]
    fn test_render_single_company_block() {
        let expected = "\n\
                        \tCompany Id: 1\n\
                        \tCompany Name: Acme\n\
                        \tUsers Emailed:\n\
                        \t\tZ, A, a.z@example.com\n\
                        \t\t  Previous Token Balance, 5\n\
                        \t\t  New Token Balance 15\n\
                        \tUsers Not Emailed:\n\
                        \t\tTotal amount of top ups for Acme: 10\n\
                        \n";
        assert_eq!(render_report(&[acme_summary()]), expected);
    }

    #[test]
    fn test_empty_report_is_single_blank_line() {
        assert_eq!(render_report(&[]), "\n");
    }

    #[test]
    fn test_blocks_rendered_in_given_order() {
        let mut second = acme_summary();
        second.company_id = 2;
        second.company_name = "Globex".to_string();

        let report = render_report(&[acme_summary(), second]);
        let acme_at = report.find("Company Name: Acme").unwrap();
        let globex_at = report.find("Company Name: Globex").unwrap();
        assert!(acme_at < globex_at);
    }
}
