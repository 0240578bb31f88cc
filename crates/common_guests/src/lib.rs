mod graph;
mod mail;
mod settings;

pub use graph::{AccessToken, CreatedInvitation, GraphClient, GraphError, InvitationRequest};
pub use mail::{MailError, SendGridMailer};
pub use settings::*;
