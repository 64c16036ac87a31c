use std::fs;

use super::die;

pub fn settings_export() {
    print!("{}", vith_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        vith_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!("OK: unmapped.policy={:?}", s.unmapped.policy());
}

/// Install a custom settings file before the first transliteration.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(vith_core::settings::init_custom(content), "Error: {}");
}
