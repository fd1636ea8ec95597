use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    entities::contact::OutgoingMail,
    errors::MailError,
    services::mailer::Mailer,
    settings::MailSettings,
};

/// SMTP delivery through lettre's pooled async transport.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// `secure` selects implicit TLS (usually port 465); otherwise the
    /// connection is upgraded with STARTTLS.
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let builder = if settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.server)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)?
        };

        let password = settings.password();
        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(settings.user.clone(), password.to_string()))
            .build();

        tracing::info!(
            "SMTP transport configured for {}:{} (implicit TLS: {})",
            settings.server,
            settings.port,
            settings.secure
        );

        Ok(SmtpMailer { transport })
    }

    fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
        let from: Mailbox = mail.from.parse()?;
        let to: Mailbox = mail.to.parse()?;
        let reply_to: Mailbox = mail.reply_to.parse()?;

        let message = Message::builder()
            .from(from)
            .reply_to(reply_to)
            .to(to)
            .subject(mail.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                mail.text_body.clone(),
                mail.html_body.clone(),
            ))?;

        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = Self::build_message(mail)?;
        let response = self.transport.send(message).await?;
        tracing::debug!("SMTP accepted message: {:?}", response.code());
        Ok(())
    }
}
