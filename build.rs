use std::fs;

/// Keys of the `[site]` table; every one must be a string.
const SITE_KEYS: [&str; 5] = [
    "static_dir",
    "content_dir",
    "output_dir",
    "template",
    "base_path",
];

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    let Some(site) = table.get("site").and_then(toml::Value::as_table) else {
        panic!("default_config.toml is missing the [site] table");
    };

    for (key, value) in site {
        if !SITE_KEYS.contains(&key.as_str()) {
            panic!("default_config.toml: unknown key site.{}", key);
        }
        if !value.is_str() {
            panic!("default_config.toml: site.{} must be a string", key);
        }
    }
}
