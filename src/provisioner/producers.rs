use std::path::Path;

use crate::{
    core::{
        config::{ProvisionerConfig, NORMALIZED_JPEG_QUALITY, PLACEHOLDER_JPEG_QUALITY},
        errors::{AppError, AppResult},
        staging::write_staged,
        types::{CatalogEntry, EntrySource, PLACEHOLDER_SOURCE},
    },
    providers::commons::CommonsClient,
    render::{
        encode,
        normalize::normalize_bytes,
        placeholder::{parse_hex_color, render_card, CardFonts},
        OutputFormat,
    },
};

use super::ImageProducer;

fn unsupported(producer: &str, source: &EntrySource) -> AppError {
    AppError::InvalidInput(format!("{producer} cannot handle {} entries", source.kind()))
}

/// Draws placeholder cards locally.
pub struct Synthesizer {
    fonts: CardFonts,
    width: u32,
    height: u32,
}

impl Synthesizer {
    pub fn new(fonts: CardFonts, width: u32, height: u32) -> Self {
        Self { fonts, width, height }
    }
}

impl ImageProducer for Synthesizer {
    async fn produce(&self, entry: &CatalogEntry, dest: &Path) -> AppResult<String> {
        let EntrySource::Placeholder { color, glyph } = &entry.source else {
            return Err(unsupported("synthesizer", &entry.source));
        };
        let format = OutputFormat::for_filename(&entry.id)?;
        let background = parse_hex_color(color)?;
        let card = render_card(&entry.id, background, glyph, &self.fonts, self.width, self.height);
        let bytes = encode(&card, format, PLACEHOLDER_JPEG_QUALITY)?;
        write_staged(dest, &bytes).await?;
        Ok(PLACEHOLDER_SOURCE.to_string())
    }
}

/// Fetches remote images, either verbatim or normalized to the card box.
pub struct RemoteFetcher {
    client: CommonsClient,
    max_width: u32,
    max_height: u32,
}

impl RemoteFetcher {
    pub fn new(client: CommonsClient, max_width: u32, max_height: u32) -> Self {
        Self {
            client,
            max_width,
            max_height,
        }
    }
}

impl ImageProducer for RemoteFetcher {
    async fn produce(&self, entry: &CatalogEntry, dest: &Path) -> AppResult<String> {
        match &entry.source {
            EntrySource::Download { url, source } => {
                self.client.download_to(url, dest).await?;
                Ok(source.clone())
            }
            EntrySource::Commons { page } => {
                let format = OutputFormat::for_filename(&entry.id)?;
                let url = self.client.download_url_for_page(page)?;
                let body = self.client.fetch_bytes(&url).await?;
                let img = normalize_bytes(&body, self.max_width, self.max_height)?;
                let bytes = encode(&img, format, NORMALIZED_JPEG_QUALITY)?;
                write_staged(dest, &bytes).await?;
                Ok(page.clone())
            }
            other => Err(unsupported("remote fetcher", other)),
        }
    }
}

/// Routes each entry to the synthesizer or the remote fetcher by its kind.
pub struct AssetProducer {
    synthesizer: Synthesizer,
    fetcher: RemoteFetcher,
}

impl AssetProducer {
    pub fn new(synthesizer: Synthesizer, fetcher: RemoteFetcher) -> Self {
        Self {
            synthesizer,
            fetcher,
        }
    }

    pub fn from_config(config: &ProvisionerConfig) -> AppResult<Self> {
        let fonts = CardFonts::load(config.font_path.as_deref());
        let client = CommonsClient::new(&config.user_agent, config.request_timeout)?
            .with_file_path_base(config.commons_file_path_base.clone());
        Ok(Self::new(
            Synthesizer::new(fonts, config.card_width, config.card_height),
            RemoteFetcher::new(client, config.card_width, config.card_height),
        ))
    }
}

impl ImageProducer for AssetProducer {
    async fn produce(&self, entry: &CatalogEntry, dest: &Path) -> AppResult<String> {
        if entry.source.is_remote() {
            self.fetcher.produce(entry, dest).await
        } else {
            self.synthesizer.produce(entry, dest).await
        }
    }
}
