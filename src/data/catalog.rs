//! Catalog Generator
//!
//! Produces one fictitious content item per title. Every field is an
//! independent uniform draw over its domain.

use chrono::{DateTime, Duration, Months, Utc};
use rand::Rng;

use super::types::{ContentItem, ContentKind};

/// Title pool used when no custom titles are configured
pub const DEFAULT_TITLES: [&str; 26] = [
    "Stranger Things",
    "The Crown",
    "Bridgerton",
    "Money Heist",
    "Squid Game",
    "The Witcher",
    "Ozark",
    "Dark",
    "Narcos",
    "House of Cards",
    "Orange Is the New Black",
    "Black Mirror",
    "The Umbrella Academy",
    "Lupin",
    "Emily in Paris",
    "The Queen's Gambit",
    "Mindhunter",
    "Russian Doll",
    "Cobra Kai",
    "You",
    "Elite",
    "Sex Education",
    "The Good Place",
    "Breaking Bad",
    "Better Call Saul",
    "Peaky Blinders",
];

/// Genre labels drawn for catalog entries
pub const CATALOG_GENRES: [&str; 12] = [
    "Drama",
    "Comedy",
    "Action",
    "Thriller",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Documentary",
    "Crime",
    "Fantasy",
    "Mystery",
    "Adventure",
];

const COUNTRIES: [&str; 10] = [
    "US",
    "UK",
    "Spain",
    "Germany",
    "France",
    "South Korea",
    "Japan",
    "India",
    "Brazil",
    "Canada",
];

const MATURITY_RATINGS: [&str; 6] = ["TV-MA", "TV-14", "TV-PG", "R", "PG-13", "PG"];

/// Probability that an entry is a series rather than a movie
const SERIES_PROBABILITY: f64 = 0.4;

/// How far back `added_date` may reach
const ADDED_WINDOW_MONTHS: u32 = 48;

/// Generate one catalog entry per title, in title order
pub fn generate_catalog<S, R>(titles: &[S], now: DateTime<Utc>, rng: &mut R) -> Vec<ContentItem>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| generate_item(index, title.as_ref(), now, rng))
        .collect()
}

fn generate_item<R: Rng + ?Sized>(
    index: usize,
    title: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ContentItem {
    let kind = if rng.gen_bool(SERIES_PROBABILITY) {
        ContentKind::Series
    } else {
        ContentKind::Movie
    };

    let genres = vec![
        pick(rng, &CATALOG_GENRES).to_string(),
        pick(rng, &CATALOG_GENRES).to_string(),
    ];

    // Drawn independently of `kind`, so a movie can list seasons
    let duration = if rng.gen_bool(SERIES_PROBABILITY) {
        format!("{} Seasons", rng.gen_range(1..=5))
    } else {
        format!("{} min", rng.gen_range(90..=209))
    };

    let description = format!(
        "An engaging {} series that captivates audiences worldwide.",
        pick(rng, &CATALOG_GENRES).to_lowercase()
    );

    ContentItem {
        id: format!("show-{}", index + 1),
        title: title.to_string(),
        kind,
        genres,
        release_year: rng.gen_range(2015..=2023),
        maturity_rating: pick(rng, &MATURITY_RATINGS).to_string(),
        duration,
        country: pick(rng, &COUNTRIES).to_string(),
        description,
        view_count: rng.gen_range(1_000_000..=51_000_000),
        completion_rate: rng.gen_range(60..=100),
        user_rating: rng.gen_range(70..=100),
        added_date: random_added_date(now, rng),
    }
}

/// Uniform instant within the trailing window ending at `now`
fn random_added_date<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> DateTime<Utc> {
    let earliest = now
        .checked_sub_months(Months::new(ADDED_WINDOW_MONTHS))
        .unwrap_or_else(|| now - Duration::days(4 * 365));
    let span = (now - earliest).num_seconds().max(0);
    earliest + Duration::seconds(rng.gen_range(0..=span))
}

/// Uniform pick from a non-empty constant pool
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_title_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = generate_catalog(&["X"], Utc::now(), &mut rng);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "show-1");
        assert_eq!(catalog[0].title, "X");
    }

    #[test]
    fn test_one_item_per_title_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = generate_catalog(&DEFAULT_TITLES, Utc::now(), &mut rng);

        assert_eq!(catalog.len(), DEFAULT_TITLES.len());
        for (index, (item, title)) in catalog.iter().zip(DEFAULT_TITLES.iter()).enumerate() {
            assert_eq!(item.title, *title);
            assert_eq!(item.id, format!("show-{}", index + 1));
        }
    }

    #[test]
    fn test_field_bounds_over_many_seeds() {
        let now = Utc::now();
        let earliest = now.checked_sub_months(Months::new(ADDED_WINDOW_MONTHS)).unwrap();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let catalog = generate_catalog(&DEFAULT_TITLES, now, &mut rng);

            assert_eq!(catalog.len(), DEFAULT_TITLES.len());
            for item in &catalog {
                assert!((2015..=2023).contains(&item.release_year));
                assert!((60..=100).contains(&item.completion_rate));
                assert!((70..=100).contains(&item.user_rating));
                assert!((1_000_000..=51_000_000).contains(&item.view_count));
                assert_eq!(item.genres.len(), 2);
                assert!(item
                    .genres
                    .iter()
                    .all(|g| CATALOG_GENRES.contains(&g.as_str())));
                assert!(item.added_date >= earliest && item.added_date <= now);
                assert!(item.duration.ends_with("Seasons") || item.duration.ends_with("min"));
            }
        }
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let now = Utc::now();
        let a = generate_catalog(&DEFAULT_TITLES, now, &mut StdRng::seed_from_u64(42));
        let b = generate_catalog(&DEFAULT_TITLES, now, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_both_kinds_appear() {
        let mut rng = StdRng::seed_from_u64(3);
        let titles: Vec<String> = (0..500).map(|i| format!("Title {}", i)).collect();
        let catalog = generate_catalog(titles.as_slice(), Utc::now(), &mut rng);

        let series = catalog.iter().filter(|i| i.kind == ContentKind::Series).count();
        // 40% expected; wide tolerance
        assert!(series > 120 && series < 280, "series count {}", series);
    }
}
