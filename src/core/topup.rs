use crate::domain::model::{Company, CompanySummary, User, UserTopUp};
use crate::domain::ports::Mailer;

/// Apply one company's top-up to its eligible users and build the report
/// block. Eligible means: valid user, matching company_id, active. Returns
/// None when the company has no eligible users; such a company is entirely
/// absent from the report.
pub fn process_company(
    company: &Company,
    users: &mut [User],
    mailer: &dyn Mailer,
) -> Option<CompanySummary> {
    let mut eligible: Vec<&mut User> = users
        .iter_mut()
        .filter(|user| user.company_id == company.id && user.active_status)
        .collect();

    if eligible.is_empty() {
        return None;
    }

    // Stable sort: ties on last_name keep input order
    eligible.sort_by(|a, b| a.last_name.cmp(&b.last_name));

    let mut emailed = Vec::new();
    let mut not_emailed = Vec::new();

    for user in eligible.iter_mut() {
        let previous_balance = user.tokens;
        user.tokens += company.top_up;

        let summary = UserTopUp {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            previous_balance,
            new_balance: user.tokens,
        };

        if user.email_status && company.email_status {
            mailer.send_top_up_email(user);
            emailed.push(summary);
        } else {
            not_emailed.push(summary);
        }
    }

    // Constant per-company amount, so the total is a product rather than a
    // sum of deltas
    let total_top_ups = company.top_up * (emailed.len() + not_emailed.len()) as i64;

    Some(CompanySummary {
        company_id: company.id,
        company_name: company.name.clone(),
        emailed,
        not_emailed,
        total_top_ups,
    })
}

/// Run top-ups for every company, in the (ascending-id) order given.
pub fn process_top_ups(
    companies: &[Company],
    users: &mut [User],
    mailer: &dyn Mailer,
) -> Vec<CompanySummary> {
    companies
        .iter()
        .filter_map(|company| process_company(company, users, mailer))
        .collect()
}
