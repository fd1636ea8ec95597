use std::sync::Arc;

use async_trait::async_trait;

use crate::{entities::contact::OutgoingMail, errors::MailError};

/// Outbound mail capability used by the contact pipeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

#[async_trait]
impl<T> Mailer for Arc<T>
where
    T: Mailer + ?Sized,
{
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        (**self).send(mail).await
    }
}
