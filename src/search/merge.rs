use std::collections::HashSet;

use crate::models::{Hit, TermRow, TitleRow};
use crate::search::routes::SiteRoutes;

/// Combine the title and term row sets into one ordered hit list.
///
/// Pipeline:
/// 1. Every title row, in the order the index returned it, becomes a hit
///    linking to its anchor (if any) with no context.
/// 2. Every term row, in index order, becomes a hit linking to the top of
///    its document, carrying the term's context snippet.
/// 3. A hit whose `(site, url)` was already produced is dropped, so a title
///    hit always wins over a term hit for the same destination.
///
/// Title hits are never interleaved with term hits and the two rank scales
/// are never compared.
pub fn merge_streams(routes: &SiteRoutes, titles: &[TitleRow], terms: &[TermRow]) -> Vec<Hit> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut hits = Vec::with_capacity(titles.len() + terms.len());

    for row in titles {
        let url = routes.document_url(&row.site, &row.path, row.anchor.as_deref());
        if !seen.insert((row.site.clone(), url.clone())) {
            continue;
        }
        hits.push(Hit {
            title: row.title.clone(),
            url,
            site: row.site.clone(),
            context: None,
            rank: row.rank,
        });
    }

    for row in terms {
        let url = routes.document_url(&row.site, &row.path, None);
        if !seen.insert((row.site.clone(), url.clone())) {
            continue;
        }
        hits.push(Hit {
            // Untitled documents are labelled by their path.
            title: row
                .document_title
                .clone()
                .unwrap_or_else(|| row.path.clone()),
            url,
            site: row.site.clone(),
            context: row.context.clone(),
            rank: row.rank,
        });
    }

    hits
}
