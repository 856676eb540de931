// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Catalogue file embedded in the binary.
const CATALOGUE: &str = "en-US.ftl";

const LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundle: FluentBundle<FluentResource>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n").field("locale", &LOCALE).finish()
    }
}

impl I18n {
    /// Loads the embedded catalogue.
    ///
    /// Syntax errors are logged and the entries that did parse stay usable.
    pub fn new() -> Self {
        let mut bundle = FluentBundle::new(vec![LOCALE]);
        // Keep strings free of bidi isolation marks; the catalogue has no placeables.
        bundle.set_use_isolating(false);

        let source = Asset::get(CATALOGUE)
            .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
            .unwrap_or_else(|| {
                tracing::warn!(catalogue = CATALOGUE, "message catalogue is not embedded");
                String::new()
            });

        let resource = FluentResource::try_new(source).unwrap_or_else(|(resource, errors)| {
            tracing::warn!(?errors, "message catalogue has syntax errors");
            resource
        });

        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(?errors, "message catalogue has duplicate entries");
        }

        Self { bundle }
    }

    /// Resolves `key`, or returns `MISSING: <key>` so gaps are visible.
    pub fn tr(&self, key: &str) -> String {
        if let Some(msg) = self.bundle.get_message(key) {
            if let Some(pattern) = msg.value() {
                let mut errors = vec![];
                let value = self.bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}
