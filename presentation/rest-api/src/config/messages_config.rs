use anyhow::Context;
use business::domain::item::messages::MessageSource;

/// Loads validation messages: the built-in catalog, overlaid with the
/// `key=value` file at `path` when one is configured.
pub fn load_messages(path: Option<&str>) -> anyhow::Result<MessageSource> {
    let defaults = MessageSource::default();
    let Some(path) = path else {
        return Ok(defaults);
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read error messages from {path}"))?;
    let overrides = MessageSource::from_properties(&content);
    tracing::info!("loaded {} error messages from {}", overrides.len(), path);
    Ok(defaults.merge(overrides))
}
