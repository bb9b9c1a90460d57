use crate::types::{ExportFormat, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "seedlog")]
#[command(about = "Record and export random seeds used in generation workflows", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to the system data dir or SEEDLOG_PATH)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append one seed record to a session log
    Record {
        #[arg(long)]
        seed: u64,

        /// Identifier of whatever produced the seed (node id, sampler name)
        #[arg(long)]
        label: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Session id; generated from the current time when omitted
        #[arg(long)]
        session: Option<String>,

        /// Pass the seed through without writing anything
        #[arg(long)]
        disabled: bool,
    },

    /// Export session records to a single artifact
    Export {
        /// Session id to export; all sessions when omitted
        #[arg(long)]
        session: Option<String>,

        #[arg(long, default_value = "json")]
        format: ExportFormat,
    },

    /// List known sessions
    Sessions {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}
