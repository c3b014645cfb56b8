#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::{Args, Command, DestinationCommand, GroupCommand, HistoryCommand, RoutingCommand};
use clap::Parser;
use notice_client::transport::default_user_agent;
use notice_client::{
    ApiClient, Credentials, DestinationApi, DestinationOp, GroupApi, GroupOp, HistoryApi, HistoryOp, RoutingApi,
    RoutingOp, SendNotificationMessageRequest, TransportOptions,
};
use notice_config::Config;
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(root_url) = args.root_url {
        config.api.root_url = root_url;
    }

    notice_telemetry::init(config.telemetry.as_ref(), "warn")?;

    tracing::debug!(
        config_path = %args.config.display(),
        root_url = %config.api.root_url,
        "loaded configuration"
    );

    let client = build_client(&config)?;
    run(client, args.command).await
}

fn build_client(config: &Config) -> anyhow::Result<ApiClient> {
    let options = TransportOptions {
        credentials: Some(Credentials {
            access_token: config.api.access_token.clone(),
            access_token_secret: config.api.access_token_secret.clone(),
        }),
        user_agent: config.api.user_agent.clone().unwrap_or_else(default_user_agent),
        timeout: config.api.timeout()?,
    };

    Ok(ApiClient::new(config.api.root_url.as_str(), &options)?)
}

async fn run(client: ApiClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Destination(cmd) => {
            let op = DestinationOp::new(client);
            match cmd {
                DestinationCommand::List => print(&op.list().await?),
                DestinationCommand::Show { id } => print(&op.read(&id).await?),
                DestinationCommand::Status { id } => print(&op.status(&id).await?),
                DestinationCommand::Delete { id } => {
                    op.delete(&id).await?;
                    tracing::info!(%id, "destination deleted");
                    Ok(())
                }
            }
        }
        Command::Group(cmd) => {
            let op = GroupOp::new(client);
            match cmd {
                GroupCommand::List => print(&op.list().await?),
                GroupCommand::Show { id } => print(&op.read(&id).await?),
                GroupCommand::Send { id, message } => {
                    let request = SendNotificationMessageRequest { message };
                    print(&op.send_message(&id, &request).await?)
                }
            }
        }
        Command::Routing(cmd) => {
            let op = RoutingOp::new(client);
            match cmd {
                RoutingCommand::List => print(&op.list().await?),
                RoutingCommand::Show { id } => print(&op.read(&id).await?),
                RoutingCommand::Sources => print(&op.list_sources().await?),
            }
        }
        Command::History(cmd) => {
            let op = HistoryOp::new(client);
            match cmd {
                HistoryCommand::List => print(&op.list().await?),
                HistoryCommand::Show { request_id } => print(&op.read(&request_id).await?),
            }
        }
    }
}

/// Write a value to stdout as pretty JSON
fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
