use std::io::Write;
use std::path::Path;

use semtab_core::config::{
    Config, PublishFormat, DEFAULT_AVRO_DIR, DEFAULT_DATA_DIR, DEFAULT_PUBLISH_DIR,
};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.publish.data_dir, DEFAULT_DATA_DIR);
    assert_eq!(config.publish.publish_dir, DEFAULT_PUBLISH_DIR);
    assert_eq!(config.publish.avro_dir, DEFAULT_AVRO_DIR);
}

#[test]
fn test_config_to_toml() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("[publish]"));
    assert!(toml_str.contains("data_dir"));
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[publish]
data_dir = ".custom-semtab"
avro_dir = "avro-out"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.publish.data_dir, ".custom-semtab");
    assert_eq!(config.publish.avro_dir, "avro-out");
    // Unset keys keep their defaults
    assert_eq!(config.publish.publish_dir, DEFAULT_PUBLISH_DIR);
}

#[test]
fn test_publish_dir_resolution() {
    let config = Config::default();

    let avro = config.publish_dir(PublishFormat::Avro);
    assert_eq!(avro, Path::new(".semtab").join("publish").join("AVRO"));

    let rdf = config.publish_dir(PublishFormat::Rdf);
    assert!(rdf.ends_with("RDF"));
}

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("semtab.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[publish]").unwrap();
    writeln!(file, "data_dir = \"/var/lib/semtab\"").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.publish.data_dir, "/var/lib/semtab");
    assert_eq!(
        config.publish_dir(PublishFormat::Json),
        Path::new("/var/lib/semtab").join("publish").join("JSON")
    );
}
