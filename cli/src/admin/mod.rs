pub(crate) mod delete;
pub(crate) mod publish;
pub(crate) mod show;

use clap::{Args, Subcommand};
use loader::AdminGate;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum AdminCommands {
    /// Publish activities as unprotected and protected blobs
    Publish {
        #[command(flatten)]
        config: publish::Config,
    },
    /// Delete both published blobs
    Delete {
        #[command(flatten)]
        config: delete::Config,
    },
    /// Print the unprotected dataset for editing
    Show {
        #[command(flatten)]
        config: show::Config,
    },
}

#[derive(Args)]
pub(crate) struct Credentials {
    /// Shared admin secret the token is checked against
    #[arg(long, env = "VEIL_ADMIN_SECRET", hide_env_values = true)]
    secret: String,

    /// Bearer token presented by the caller
    #[arg(long, env = "VEIL_ADMIN_TOKEN", hide_env_values = true)]
    token: String,
}

impl Credentials {
    pub(crate) fn gate(&self) -> AdminGate {
        AdminGate::new(self.secret.as_str())
    }

    /// The token as an `Authorization` header value.
    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(crate) fn authorize(&self) -> Result<()> {
        self.gate().require(Some(self.authorization().as_str()))?;
        Ok(())
    }
}
