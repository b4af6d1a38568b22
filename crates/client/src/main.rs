//! rollbook-client CLI entry point.

use clap::Parser;
use rollbook_client::cli::learners::LearnersAction;
use rollbook_client::cli::{Cli, Commands};
use rollbook_client::client::RollbookClient;
use rollbook_client::output::{render_health, render_learner, render_learners, render_summary};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RollbookClient::new(&cli.base_url);

    match cli.command {
        Commands::Learners(learners_cmd) => match learners_cmd.action {
            LearnersAction::List => {
                let learners = client.list_learners().await?;
                println!("{}", render_learners(&learners, cli.format));
            }
            LearnersAction::Create(fields) => {
                let learner = client.create_learner(&fields.into()).await?;
                println!("{}", render_learner(&learner, cli.format));
            }
            LearnersAction::Get { id } => {
                let learner = client.get_learner(id).await?;
                println!("{}", render_learner(&learner, cli.format));
            }
            LearnersAction::Update { id, fields } => {
                let learner = client.update_learner(id, &fields.into()).await?;
                println!("{}", render_learner(&learner, cli.format));
            }
            LearnersAction::Delete { id } => {
                client.delete_learner(id).await?;
                if !cli.quiet {
                    println!("Deleted learner {}", id);
                }
            }
            LearnersAction::Summary { id } => {
                let summary = client.get_learner_summary(id).await?;
                println!("{}", render_summary(summary, cli.format));
            }
        },
        Commands::Health => {
            let report = client.health().await?;
            println!("{}", render_health(&report, cli.format));
        }
    }

    Ok(())
}
