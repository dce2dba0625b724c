use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn format_name(&self) -> &'static str;
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

fn describe_yaml_error(err: serde_yaml_ng::Error) -> String {
    match err.location() {
        Some(location) => format!(
            "{} (line {}, column {})",
            err,
            location.line(),
            location.column()
        ),
        None => err.to_string(),
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn format_name(&self) -> &'static str {
        "YAML"
    }

    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(describe_yaml_error)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(describe_yaml_error)
    }
}
