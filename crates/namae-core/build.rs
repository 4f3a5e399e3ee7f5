const SETTINGS_PATH: &str = "src/default_settings.toml";
const REQUIRED_TABLES: [&str; 3] = ["lexicon", "batch", "report"];

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS_PATH}");

    let content = include_str!("src/default_settings.toml");
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("{SETTINGS_PATH} contains invalid TOML: {e}"),
    };
    for table in REQUIRED_TABLES {
        if !value.get(table).is_some_and(toml::Value::is_table) {
            panic!("{SETTINGS_PATH} is missing the [{table}] table");
        }
    }
}
