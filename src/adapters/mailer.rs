use crate::domain::model::User;
use crate::domain::ports::Mailer;

/// Stub mailer. The report only needs the emailed / not-emailed split;
/// no mail leaves the building.
// TODO: swap in a real mail provider if top-up notifications ever ship.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMailer;

impl Mailer for NoopMailer {
    fn send_top_up_email(&self, user: &User) {
        tracing::debug!("would email {} about their top-up", user.email);
    }
}
