use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, routes, services};
pub use infrastructure::{limiter, mail, utils, web};

use errors::MailError;
use limiter::cooldown::CooldownStore;
use mail::smtp::SmtpMailer;
use services::mailer::Mailer;
use use_cases::{contact::ContactHandler, portfolio::PortfolioHandler};

pub struct AppState {
    pub contact_handler: AppContactHandler,
    pub portfolio_handler: PortfolioHandler,
    pub trust_x_forwarded_for: bool,
}

pub type AppContactHandler = ContactHandler<Arc<dyn Mailer>, CooldownStore>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Result<Self, MailError> {
        let mailer = SmtpMailer::new(&config.mail)?;
        Ok(Self::with_mailer(config, Arc::new(mailer)))
    }

    pub fn with_mailer(config: &settings::AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        let cooldowns = CooldownStore::new(
            config.contact_cooldown(),
            config.contact_cooldown(),
            config.rate_limit_max_entries,
        );

        let contact_handler = ContactHandler::new(
            mailer,
            cooldowns,
            config.mail.from.clone(),
            config.mail.to.clone(),
            config.mail_send_timeout(),
        );

        AppState {
            contact_handler,
            portfolio_handler: PortfolioHandler::default(),
            trust_x_forwarded_for: config.trust_x_forwarded_for,
        }
    }

    pub fn cooldowns(&self) -> &CooldownStore {
        &self.contact_handler.limiter
    }
}
