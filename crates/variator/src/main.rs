//! Variator binary: explore how a model answers paraphrases of one question.

use anyhow::Context;
use tracing::info;
use variator::{
    OpenAICompletionClient, VariationPipeline, VariatorConfig, format_variations, init_tracing,
    render_table,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = VariatorConfig::load().context("loading configuration")?;
    init_tracing(*config.log_format()).context("initializing tracing")?;
    info!(question = %config.question(), model = %config.model(), "Starting variator");

    let client = OpenAICompletionClient::new(
        OpenAICompletionClient::api_key_from_env(),
        config.model(),
        config.base_url(),
    )
        .with_defaults(config.generation().clone());

    let report = VariationPipeline::new(client)
        .with_defaults(config.generation().clone())
        .with_variation_count(*config.variation_count())
        .run(config.question())
        .await
        .context("running variation pipeline")?;

    println!("{}", format_variations(report.variations()));
    println!("Similarity table:");
    println!("{}", render_table(report.results()));
    Ok(())
}
