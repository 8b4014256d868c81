// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MEETING STYLER - CLI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Binário fino: recebe um caminho de arquivo ou texto bruto, opcional-
// mente uma lista de estilos, e imprime o resultado agregado em JSON.
//
// Uso:
//   meeting-styler-cli <arquivo-ou-texto> [estilo,estilo,...]
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};

use meeting_styler::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env é opcional; ambiente real tem precedência
    let _ = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: meeting-styler-cli <file-or-text> [style,style,...]");
        eprintln!("Styles: didactic, client, developers, management (default: all)");
        std::process::exit(2);
    }

    let config = load_app_config().context("failed to load configuration")?;

    let input = &args[0];
    let path = Path::new(input);

    let text = if path.is_file() {
        let extractor = DocumentExtractor::new(config.cache_enabled)
            .with_max_size_mb(config.max_file_size_mb);

        let info = DocumentExtractor::file_info(path);
        log::info!(
            "📄 Arquivo: {} ({} MB, suportado: {})",
            info.filename,
            info.size_mb,
            info.is_supported
        );

        extractor
            .extract(path)
            .with_context(|| format!("failed to extract text from {}", path.display()))?
            .text
    } else {
        input.clone()
    };

    let client = Arc::new(OpenAiClient::new(config.api_key.clone()).with_model(&config.model));
    let orchestrator = StyleOrchestrator::new(client).with_tuning(config.tuning);

    let result = match args.get(1) {
        Some(style_list) => {
            let names: Vec<String> = style_list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if names.is_empty() {
                bail!("empty style list");
            }
            orchestrator.process_named(&text, &names).await?
        }
        None => orchestrator.process_all(&text).await?,
    };

    let stats = orchestrator.stats();
    log::info!(
        "📊 Geração concluída: {}/{} sucesso (taxa: {:.0}%)",
        stats.successful_requests,
        stats.total_requests,
        stats.success_rate * 100.0
    );

    let output = serde_json::Value::Object(result.to_flat_map());
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
