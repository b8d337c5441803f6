use cardsmith_anki::AnkiConnectClient;
use cardsmith_llm::OllamaGenerator;

pub async fn check(anki: &AnkiConnectClient, generator: &OllamaGenerator) -> anyhow::Result<()> {
    let version = anki.check_connection().await?;
    tracing::info!("AnkiConnect is available (API version {})", version);

    generator.check_health().await?;

    Ok(())
}
