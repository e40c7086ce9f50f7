use std::io::{Read, Write};

use anyhow::Result;
use clap::Args;
use folio_contact::{
    DELIVERED_MESSAGE, DELIVERED_TITLE, Field, FormController, HttpSubmitter, SubmissionState,
};

#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    /// Your full name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email address to reply to
    #[arg(long, default_value = "")]
    pub email: String,

    /// What you would like to discuss
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Message body, `-` reads it from stdin
    #[arg(long, default_value = "")]
    pub message: String,
}

impl SubmitArgs {
    fn message(&self) -> Result<String> {
        if self.message != "-" {
            return Ok(self.message.to_owned());
        }

        let mut message = String::new();
        std::io::stdin().read_to_string(&mut message)?;

        Ok(message)
    }
}

/// Send one contact message and report the outcome to `out`
///
/// Returns the final submission state; the caller decides how to exit.
#[tracing::instrument(skip_all)]
pub async fn submit(
    config: crate::config::Config,
    args: SubmitArgs,
    out: &mut impl Write,
) -> Result<SubmissionState> {
    let endpoint = config.endpoint().map_err(|e| anyhow::anyhow!(e))?;
    let mut form = FormController::new(HttpSubmitter::new(endpoint));

    form.update_field(Field::Name, args.name.to_owned());
    form.update_field(Field::Email, args.email.to_owned());
    form.update_field(Field::Subject, args.subject.to_owned());
    form.update_field(Field::Message, args.message()?);

    if form.submit().await.is_ok() {
        writeln!(out, "{DELIVERED_TITLE}")?;
        writeln!(out, "{DELIVERED_MESSAGE}")?;
    } else if let Some(notice) = form.notice() {
        writeln!(out, "{}", notice.title)?;
        writeln!(out, "{}", notice.message)?;
    }

    Ok(form.state().to_owned())
}
