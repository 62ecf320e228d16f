pub(crate) mod checksum;
pub(crate) mod inspect;
pub(crate) mod protect;
pub(crate) mod unprotect;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum DataCommands {
    /// Wrap plain JSON in a protected envelope
    Protect {
        #[command(flatten)]
        config: protect::Config,
    },
    /// Open a protected envelope and print the plain JSON
    Unprotect {
        #[command(flatten)]
        config: unprotect::Config,
    },
    /// Show version, checksums and sizes of an envelope
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
    /// Compute the checksum of a text
    Checksum {
        #[command(flatten)]
        config: checksum::Config,
    },
}
