//! Artifact content generation
//!
//! The catalog is the pure half of the scaffolder: every operation is a
//! total, deterministic function of the project name and the feature flags.
//! No I/O, no randomness, no clock: that is what makes the output
//! snapshot-testable.

// Fixed-content operations keep the instance-method shape of the rest of
// the catalog even though they never touch the renderer.
#![allow(clippy::unused_self)]

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::error::ScaffoldError;
use crate::FeatureFlags;

pub mod files;
pub use files::*;

/// Package manifest written as `package.json`
///
/// Field order is serialization order, matching the layout a front-end
/// developer expects (`name` first, `scripts` last).
#[derive(Serialize)]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'static str,
    #[serde(rename = "type")]
    module_type: &'static str,
    scripts: Scripts,
}

/// `scripts` map of the package manifest
///
/// `dev`/`build`/`preview` are always present; the rest appear only when
/// the corresponding feature flag is set.
#[derive(Serialize)]
struct Scripts {
    dev: &'static str,
    build: &'static str,
    preview: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    lint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    test: Option<&'static str>,
}

/// Artifact content catalog
pub struct TemplateCatalog {
    handlebars: Handlebars<'static>,
}

impl TemplateCatalog {
    /// Create a new catalog
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Render `package.json` for `name` under the given flags
    ///
    /// The name is passed through verbatim; no sanitization happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Encode`] if JSON serialization fails.
    pub fn package_manifest(
        &self,
        name: &str,
        flags: &FeatureFlags,
    ) -> Result<String, ScaffoldError> {
        let manifest = PackageManifest {
            name,
            version: "1.0.0",
            module_type: "module",
            scripts: Scripts {
                dev: "vite",
                build: "vite build",
                preview: "vite preview",
                lint: flags.lint.then_some("oxlint"),
                format: flags.format.then_some("prettier --write ."),
                test: flags.test.then_some("vitest"),
            },
        };

        serde_json::to_string_pretty(&manifest).map_err(|source| ScaffoldError::Encode {
            artifact: "package.json",
            source,
        })
    }

    /// Render `index.html` for the given flags
    ///
    /// Two independent axes: Tailwind adds the class attributes (the
    /// non-Tailwind variant carries no `class` attribute at all), TypeScript
    /// adds the module script line. All four combinations are byte-stable.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Template`] if rendering fails.
    pub fn index_html(&self, flags: &FeatureFlags) -> Result<String, ScaffoldError> {
        let context = json!({
            "body_class": if flags.tailwind { TAILWIND_BODY_CLASS } else { "" },
            "h1_class": if flags.tailwind { TAILWIND_H1_CLASS } else { "" },
            "p_class": if flags.tailwind { TAILWIND_P_CLASS } else { "" },
            "script": if flags.typescript { TYPESCRIPT_SCRIPT_TAG } else { "" },
        });

        self.handlebars
            .render_template(INDEX_HTML, &context)
            .map_err(|source| ScaffoldError::Template {
                artifact: "index.html",
                source,
            })
    }

    /// Content of `styles.css`: empty without Tailwind, the single import
    /// directive with it
    #[must_use]
    pub fn stylesheet(&self, flags: &FeatureFlags) -> &'static str {
        if flags.tailwind {
            TAILWIND_STYLESHEET
        } else {
            ""
        }
    }

    /// Content of `vite.config.js` (emitted only when Tailwind is enabled)
    #[must_use]
    pub const fn vite_config(&self) -> &'static str {
        VITE_CONFIG
    }

    /// Render `tsconfig.json` (emitted only when TypeScript is enabled)
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Encode`] if JSON serialization fails.
    pub fn ts_config(&self) -> Result<String, ScaffoldError> {
        let config = json!({
            "compilerOptions": {
                "target": "ES2020",
                "useDefineForClassFields": true,
                "module": "ESNext",
                "lib": ["ES2020", "DOM", "DOM.Iterable"],
                "skipLibCheck": true,
                "moduleResolution": "bundler",
                "allowImportingTsExtensions": true,
                "resolveJsonModule": true,
                "isolatedModules": true,
                "noEmit": true,
                "strict": true,
                "noUnusedLocals": true,
                "noUnusedParameters": true,
                "noFallthroughCasesInSwitch": true
            },
            "include": ["scripts"]
        });

        serde_json::to_string_pretty(&config).map_err(|source| ScaffoldError::Encode {
            artifact: "tsconfig.json",
            source,
        })
    }

    /// Content of the TypeScript entry script `scripts/main.ts`
    #[must_use]
    pub const fn entry_script(&self) -> &'static str {
        ENTRY_SCRIPT
    }

    /// Render `.oxlintrc.json` (emitted only when linting is enabled)
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Encode`] if JSON serialization fails.
    pub fn lint_config(&self) -> Result<String, ScaffoldError> {
        let config = json!({
            "$schema": "./node_modules/oxlint/configuration_schema.json",
            "categories": {
                "correctness": "error"
            }
        });

        serde_json::to_string_pretty(&config).map_err(|source| ScaffoldError::Encode {
            artifact: ".oxlintrc.json",
            source,
        })
    }

    /// Render `.prettierrc` (emitted only when formatting is enabled)
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Encode`] if JSON serialization fails.
    pub fn format_config(&self) -> Result<String, ScaffoldError> {
        let config = json!({
            "semi": false,
            "singleQuote": true
        });

        serde_json::to_string_pretty(&config).map_err(|source| ScaffoldError::Encode {
            artifact: ".prettierrc",
            source,
        })
    }

    /// Content of `.prettierignore`
    #[must_use]
    pub const fn format_ignore(&self) -> &'static str {
        PRETTIER_IGNORE
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}
