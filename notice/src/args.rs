use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Simple Notification command line client
#[derive(Debug, Parser)]
#[command(name = "notice", about = "Manage notification destinations, groups and routings")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "notice.toml", env = "NOTICE_CONFIG")]
    pub config: PathBuf,

    /// Override the API root URL
    #[arg(long, env = "NOTICE_ROOT_URL")]
    pub root_url: Option<url::Url>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Notification destinations
    #[command(subcommand)]
    Destination(DestinationCommand),
    /// Notification groups
    #[command(subcommand)]
    Group(GroupCommand),
    /// Routing rules
    #[command(subcommand)]
    Routing(RoutingCommand),
    /// Delivered notifications
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Debug, Subcommand)]
pub enum DestinationCommand {
    /// List destinations
    List,
    /// Show one destination
    Show { id: String },
    /// Show the delivery status of a destination
    Status { id: String },
    /// Delete a destination
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum GroupCommand {
    /// List groups
    List,
    /// Show one group
    Show { id: String },
    /// Post a message to a group
    Send {
        id: String,
        /// Message text
        #[arg(short, long)]
        message: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum RoutingCommand {
    /// List routings
    List,
    /// Show one routing
    Show { id: String },
    /// List message sources routings can match on
    Sources,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List delivered notifications
    List,
    /// Show one delivered notification
    Show { request_id: String },
}
