use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

/// Which CSV headers feed which channel. Matching is by normalized
/// substring, so the patterns survive the plant historian's verbose
/// multi-line column titles.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChannelsConfig {
    #[serde(default)]
    pub columns: ColumnPatterns,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ColumnPatterns {
    pub timestamp: Vec<String>,
    pub steam: Vec<String>,
    pub power: Vec<String>,
    pub temp_comb: Vec<String>,
    pub temp_flue: Vec<String>,
    pub idf: Vec<String>,
    pub rgf: Vec<String>,
    pub soot: Vec<String>,
}

impl Default for ColumnPatterns {
    fn default() -> Self {
        Self {
            timestamp: vec!["date".to_string()],
            steam: vec!["steam".to_string()],
            power: vec!["export power".to_string()],
            temp_comb: vec!["post combustion".to_string()],
            temp_flue: vec!["inlet bag".to_string()],
            idf: vec!["idf".to_string()],
            rgf: vec!["rgf".to_string()],
            soot: vec!["soot".to_string()],
        }
    }
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_channels_config() -> anyhow::Result<ChannelsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/channels"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_defaults_cover_every_channel() {
        let patterns = ColumnPatterns::default();
        assert_eq!(patterns.power, vec!["export power"]);
        assert!(!patterns.timestamp.is_empty());
        assert!(!patterns.soot.is_empty());
    }

    #[test]
    fn test_partial_channels_file_keeps_defaults() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[columns]\npower = [\"generator output\"]\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: ChannelsConfig = settings.try_deserialize().unwrap();

        assert_eq!(cfg.columns.power, vec!["generator output"]);
        // Unlisted channels fall back to the built-in patterns
        assert_eq!(cfg.columns.steam, vec!["steam"]);
    }
}
