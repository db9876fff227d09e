//! Declaration-extension derivation (spec §6):
//! `.js → .d.ts`, `.mjs → .d.mts`, `.cjs → .d.cts`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclExtension {
    Dts,
    Dmts,
    Dcts,
}

impl DeclExtension {
    /// Derive the declaration extension from a bundler output's JS extension.
    ///
    /// Falls back to `.d.ts` for any extension the bundler didn't produce
    /// from one of the three recognised JS forms.
    pub fn from_js_extension(js_extension: &str) -> Self {
        match js_extension.trim_start_matches('.') {
            "mjs" => DeclExtension::Dmts,
            "cjs" => DeclExtension::Dcts,
            _ => DeclExtension::Dts,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DeclExtension::Dts => ".d.ts",
            DeclExtension::Dmts => ".d.mts",
            DeclExtension::Dcts => ".d.cts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions() {
        assert_eq!(DeclExtension::from_js_extension("js").as_str(), ".d.ts");
        assert_eq!(DeclExtension::from_js_extension(".mjs").as_str(), ".d.mts");
        assert_eq!(DeclExtension::from_js_extension("cjs").as_str(), ".d.cts");
    }

    #[test]
    fn unknown_extension_defaults_to_dts() {
        assert_eq!(DeclExtension::from_js_extension("jsx").as_str(), ".d.ts");
    }
}
