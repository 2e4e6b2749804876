//! Known environment names
//!
//! An environment bundles predefined globals and, for the `es*` family, a
//! language level. Only the names are modelled here; the globals themselves
//! belong to the linting engine.

/// Every environment name accepted under `env`
pub const KNOWN_ENVIRONMENTS: &[&str] = &[
    "amd",
    "applescript",
    "atomtest",
    "browser",
    "commonjs",
    "embertest",
    "es2016",
    "es2017",
    "es2018",
    "es2019",
    "es2020",
    "es2021",
    "es2022",
    "es2023",
    "es2024",
    "es6",
    "greasemonkey",
    "jasmine",
    "jest",
    "jquery",
    "meteor",
    "mocha",
    "mongo",
    "nashorn",
    "node",
    "phantomjs",
    "prototypejs",
    "protractor",
    "qunit",
    "serviceworker",
    "shared-node-browser",
    "shelljs",
    "webextensions",
    "worker",
];

pub fn is_known(name: &str) -> bool {
    KNOWN_ENVIRONMENTS.binary_search(&name).is_ok()
}

/// Language level (`ecmaVersion`) an environment switches on, if any
pub fn ecma_version(name: &str) -> Option<u32> {
    match name {
        "es6" => Some(6),
        _ => {
            let year: u32 = name.strip_prefix("es")?.parse().ok()?;
            if (2016..=2024).contains(&year) {
                // es2016 is edition 7
                Some(year - 2009)
            } else {
                None
            }
        }
    }
}
