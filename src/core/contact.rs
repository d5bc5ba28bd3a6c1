/// EmailJS identifiers used for the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailService {
    pub service_id: &'static str,
    pub template_id: &'static str,
}

pub const CONTACT_SERVICE: EmailService = EmailService {
    service_id: "service_7rx1fvj",
    template_id: "template_t3ihrt8",
};

pub const SEND_OK_MESSAGE: &str = "Message sent successfully!";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SubmitOutcome::Sent => SEND_OK_MESSAGE,
            SubmitOutcome::Failed => SEND_FAILED_MESSAGE,
        }
    }
}

/// Something that can show the user a one-line result.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// The submitted form, as far as settlement is concerned.
pub trait FormFields {
    fn reset(&mut self);
}

/// Report the result of a send: exactly one notification, and the form is
/// cleared only on success.
pub fn settle<E, F, N>(result: Result<(), E>, form: &mut F, notifier: &mut N) -> SubmitOutcome
where
    F: FormFields + ?Sized,
    N: Notifier + ?Sized,
{
    let outcome = match result {
        Ok(()) => SubmitOutcome::Sent,
        Err(_) => SubmitOutcome::Failed,
    };
    notifier.notify(outcome.message());
    if outcome == SubmitOutcome::Sent {
        form.reset();
    }
    outcome
}
