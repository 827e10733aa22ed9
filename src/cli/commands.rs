//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::{TranslationClient, DEFAULT_DISPLAY_LANGUAGE};
use crate::core::models::TranslationRequest;

/// Commands for the translation demo
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single text
    Translate {
        /// Text to translate
        text: String,

        /// Target language (default: es)
        #[arg(short, long, default_value = "es")]
        target_lang: String,

        /// Source language (auto-detect if not specified)
        #[arg(long)]
        source_lang: Option<String>,
    },

    /// Translate several texts in one request
    Batch {
        /// Texts to translate
        #[arg(required = true)]
        texts: Vec<String>,

        /// Target language (default: es)
        #[arg(short, long, default_value = "es")]
        target_lang: String,
    },

    /// Detect the language of a text
    Detect {
        /// Text to inspect
        text: String,
    },

    /// List supported languages
    Languages {
        /// Language the names are displayed in (default: en)
        #[arg(short, long, default_value = DEFAULT_DISPLAY_LANGUAGE)]
        display_lang: String,
    },
}

/// Dispatch a parsed command against the client
pub async fn run(client: &TranslationClient, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Translate {
            text,
            target_lang,
            source_lang,
        } => handle_translate(client, text, target_lang, source_lang).await,
        Commands::Batch { texts, target_lang } => handle_batch(client, texts, target_lang).await,
        Commands::Detect { text } => handle_detect(client, text).await,
        Commands::Languages { display_lang } => handle_languages(client, display_lang).await,
    }
}

/// Handle single translation command
pub async fn handle_translate(
    client: &TranslationClient,
    text: String,
    target_lang: String,
    source_lang: Option<String>,
) -> anyhow::Result<()> {
    info!("Translating into {}", target_lang);

    let mut request = TranslationRequest::new(text, target_lang);
    if let Some(lang) = source_lang {
        request = request.with_source_lang(lang);
    }

    let result = client.translate_request(&request).await?;

    println!("{}", result.translated_text);
    println!("   Source language: {}", result.detected_source_language);

    Ok(())
}

/// Handle batch translation command
pub async fn handle_batch(
    client: &TranslationClient,
    texts: Vec<String>,
    target_lang: String,
) -> anyhow::Result<()> {
    info!("Translating {} texts into {}", texts.len(), target_lang);

    let results = client.translate_batch(&texts, &target_lang).await?;

    for (i, (original, result)) in texts.iter().zip(&results).enumerate() {
        println!(
            "{}. [{}] {} -> {}",
            i + 1,
            result.detected_source_language,
            original,
            result.translated_text
        );
    }

    Ok(())
}

/// Handle language detection command
pub async fn handle_detect(client: &TranslationClient, text: String) -> anyhow::Result<()> {
    let result = client.detect_language(&text).await?;
    println!("{}", result.detected_source_language);
    Ok(())
}

/// Handle language listing command
pub async fn handle_languages(
    client: &TranslationClient,
    display_lang: String,
) -> anyhow::Result<()> {
    let languages = client.list_supported_languages(&display_lang).await?;

    for language in &languages {
        println!("{:<10} {}", language.code, language.display_name);
    }
    println!("\n{} languages", languages.len());

    Ok(())
}
