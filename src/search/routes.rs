//! Public URL synthesis for indexed documents.

use std::collections::BTreeMap;

/// Source extensions that are published as `.html`.
const SOURCE_EXTENSIONS: &[&str] = &[".md", ".ipynb"];

/// Per-site routing exceptions: extra path segments inserted after the
/// site slug. Sites without an entry are served directly under `/{slug}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoutes {
    prefixes: BTreeMap<String, String>,
}

impl Default for SiteRoutes {
    fn default() -> Self {
        // The tket docs are nested one level deeper than the other products.
        Self::empty().with_prefix("tket", "user-guide")
    }
}

impl SiteRoutes {
    /// A table with no exceptions.
    pub fn empty() -> Self {
        Self {
            prefixes: BTreeMap::new(),
        }
    }

    /// Add or replace the extra segment for `site`.
    pub fn with_prefix(mut self, site: &str, segment: &str) -> Self {
        self.insert(site, segment);
        self
    }

    pub fn insert(&mut self, site: &str, segment: &str) {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            self.prefixes.remove(site);
        } else {
            self.prefixes.insert(site.to_string(), format!("{segment}/"));
        }
    }

    /// Parse `slug=segment` pairs separated by commas, e.g.
    /// `tket=user-guide,guppy=api`. Returns the pairs that could not be
    /// parsed; everything else is applied.
    pub fn extend_from_pairs(&mut self, pairs: &str) -> Vec<String> {
        let mut rejected = Vec::new();
        for pair in pairs.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((site, segment)) if !site.trim().is_empty() => {
                    self.insert(site.trim(), segment.trim());
                }
                _ => rejected.push(pair.to_string()),
            }
        }
        rejected
    }

    /// `/{site}/` plus any routing exception segment.
    pub fn base(&self, site: &str) -> String {
        match self.prefixes.get(site) {
            Some(segment) => format!("/{site}/{segment}"),
            None => format!("/{site}/"),
        }
    }

    /// Build the public URL of a document, optionally pointing at an anchor.
    pub fn document_url(&self, site: &str, path: &str, anchor: Option<&str>) -> String {
        let mut url = self.base(site);
        url.push_str(&published_path(path));
        if let Some(anchor) = anchor.filter(|a| !a.is_empty()) {
            url.push('#');
            url.push_str(anchor);
        }
        url
    }
}

/// Strip leading separators and rewrite a trailing source extension.
fn published_path(path: &str) -> String {
    let path = path.trim_start_matches('/');
    for ext in SOURCE_EXTENSIONS {
        if let Some(stem) = path.strip_suffix(ext) {
            return format!("{stem}.html");
        }
    }
    path.to_string()
}
