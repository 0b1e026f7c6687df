//! Diff computation between the star list and the bookmark collection.
//!
//! Pure function of its two inputs. Both sides are keyed by normalized URL
//! (last write wins on collisions within a side); membership in one map but
//! not the other decides creation or deletion. No ordering is guaranteed in
//! the output.

use std::collections::HashMap;

use crate::github::Star;
use crate::normalize::normalize;
use crate::raindrop::Raindrop;

/// The create/delete sets for one sync run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diff {
    /// Stars with no matching bookmark.
    pub to_create: Vec<Star>,
    /// Bookmark ids with no matching star.
    pub to_delete: Vec<i64>,
}

impl Diff {
    /// True when the two datasets already mirror each other.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_delete.is_empty()
    }
}

/// Compute the minimal create/delete sets that make the bookmark collection
/// mirror the star list under normalized-URL identity.
#[must_use]
pub fn diff(stars: &[Star], raindrops: &[Raindrop]) -> Diff {
    let stars_by_url: HashMap<String, &Star> = stars
        .iter()
        .map(|star| (normalize(&star.url), star))
        .collect();
    let raindrops_by_url: HashMap<String, &Raindrop> = raindrops
        .iter()
        .map(|rd| (normalize(&rd.link), rd))
        .collect();

    let to_create = stars_by_url
        .iter()
        .filter(|(url, _)| !raindrops_by_url.contains_key(*url))
        .map(|(_, star)| (*star).clone())
        .collect();

    let to_delete = raindrops_by_url
        .iter()
        .filter(|(url, _)| !stars_by_url.contains_key(*url))
        .map(|(_, rd)| rd.id)
        .collect();

    Diff {
        to_create,
        to_delete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn star(url: &str) -> Star {
        Star {
            url: url.to_string(),
            full_name: "o/r".to_string(),
            description: String::new(),
            language: None,
            topics: Vec::new(),
            starred_at: Utc::now(),
        }
    }

    fn raindrop(id: i64, link: &str) -> Raindrop {
        Raindrop {
            id,
            link: link.to_string(),
            title: String::new(),
        }
    }

    #[test]
    fn star_without_bookmark_is_created() {
        let d = diff(&[star("https://a.com/")], &[]);
        assert_eq!(d.to_create.len(), 1);
        assert_eq!(d.to_create[0].url, "https://a.com/");
        assert!(d.to_delete.is_empty());
    }

    #[test]
    fn bookmark_without_star_is_deleted() {
        let d = diff(&[], &[raindrop(5, "https://b.com")]);
        assert!(d.to_create.is_empty());
        assert_eq!(d.to_delete, vec![5]);
    }

    #[test]
    fn matched_items_appear_on_neither_side() {
        let stars = vec![star("HTTPS://A.COM/x/"), star("https://b.com")];
        let raindrops = vec![raindrop(1, "https://a.com/x"), raindrop(2, "https://c.com")];

        let d = diff(&stars, &raindrops);

        // a.com/x matches despite case and trailing slash; b is new, c is gone.
        assert_eq!(d.to_create.len(), 1);
        assert_eq!(d.to_create[0].url, "https://b.com");
        assert_eq!(d.to_delete, vec![2]);
    }

    #[test]
    fn completeness_and_disjointness_over_mixed_sets() {
        let stars: Vec<Star> = (0..10)
            .map(|n| star(&format!("https://github.com/o/r{n}")))
            .collect();
        // Bookmarks for r5..r14: r5..r9 match, r10..r14 are stale.
        let raindrops: Vec<Raindrop> = (5..15)
            .map(|n| raindrop(n, &format!("https://github.com/o/r{n}")))
            .collect();

        let d = diff(&stars, &raindrops);

        let created: std::collections::HashSet<String> = d
            .to_create
            .iter()
            .map(|s| crate::normalize::normalize(&s.url))
            .collect();
        let deleted: std::collections::HashSet<i64> = d.to_delete.iter().copied().collect();

        // to_create plus the matched subset reconstructs the star list.
        assert_eq!(d.to_create.len(), 5);
        for n in 0..5 {
            assert!(created.contains(&format!("https://github.com/o/r{n}")));
        }
        // to_delete plus the matched subset reconstructs the bookmark list.
        assert_eq!(deleted, (10..15).collect());
        // Nothing matched lands in either set.
        for n in 5..10 {
            assert!(!created.contains(&format!("https://github.com/o/r{n}")));
            assert!(!deleted.contains(&n));
        }
    }

    #[test]
    fn rerunning_after_applying_the_diff_converges_to_empty() {
        let stars = vec![star("https://a.com"), star("https://b.com/")];
        let raindrops = vec![raindrop(1, "https://b.com"), raindrop(2, "https://c.com")];

        let first = diff(&stars, &raindrops);
        assert!(!first.is_empty());

        // Simulate applying the diff to the target collection.
        let mut next_id = 100;
        let mut post_sync: Vec<Raindrop> = raindrops
            .into_iter()
            .filter(|rd| !first.to_delete.contains(&rd.id))
            .collect();
        for created in &first.to_create {
            post_sync.push(raindrop(next_id, &created.url));
            next_id += 1;
        }

        let second = diff(&stars, &post_sync);
        assert!(second.is_empty(), "second diff was {second:?}");
    }

    #[test]
    fn duplicate_normalized_urls_collapse_last_write_wins() {
        let stars = vec![star("https://a.com"), star("HTTPS://A.COM/")];
        let d = diff(&stars, &[]);
        // Both stars normalize to the same key, so only one create survives.
        assert_eq!(d.to_create.len(), 1);
    }

    #[test]
    fn empty_inputs_produce_an_empty_diff() {
        assert!(diff(&[], &[]).is_empty());
    }
}
