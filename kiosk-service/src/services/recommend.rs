//! Keyword-overlap recommendation scoring.
//!
//! Every catalog entry that is not excluded gets a score:
//! +2 for each input word (longer than two characters) found in the entry
//! text, +1 for each keyword literal found in both the input and the entry.
//! When too few entries score, random unscored entries fill the list up.

use crate::models::book::Book;
use crate::utils::text::scoring_words;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, trace};

pub const WORD_HIT_SCORE: u32 = 2;
pub const KEYWORD_HIT_SCORE: u32 = 1;
/// Below this many scored entries the list is backfilled at random.
pub const MIN_SCORED: usize = 3;
pub const MAX_RECOMMENDATIONS: usize = 5;

pub const KEYWORD_BUCKETS: &[(&str, &[&str])] = &[
    ("klasik", &["klasik", "eski", "tarihi"]),
    ("roman", &["roman", "hikaye", "kurgu"]),
    ("bilim", &["bilim", "fizik", "matematik", "teknoloji"]),
    ("tarih", &["tarih", "geçmiş", "osmanlı"]),
    ("macera", &["macera", "aksiyon", "heyecan"]),
    ("felsefe", &["felsefe", "düşünce", "hayat", "anlam"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredBook {
    pub book: Book,
    pub score: u32,
}

/// `input` must be lower-cased; `words` are its scoring words.
pub fn score_book(book: &Book, input: &str, words: &[&str]) -> u32 {
    let text = book.scoring_text();

    let word_hits = words.iter().filter(|word| text.contains(**word)).count() as u32;

    let mut keyword_hits = 0;
    for (bucket, literals) in KEYWORD_BUCKETS {
        for literal in literals.iter() {
            if input.contains(literal) && text.contains(literal) {
                trace!("Book {} hit keyword {:?} in bucket {:?}", book.id, literal, bucket);
                keyword_hits += 1;
            }
        }
    }

    word_hits * WORD_HIT_SCORE + keyword_hits * KEYWORD_HIT_SCORE
}

/// Ranks `catalog` against the user's free text, highest score first.
///
/// At most [`MAX_RECOMMENDATIONS`] entries are returned and none of them is in
/// `exclude`. Ties keep catalog order; backfilled entries carry score 0.
pub fn recommend<R: Rng + ?Sized>(
    catalog: &[Book],
    user_input: &str,
    exclude: &HashSet<u32>,
    rng: &mut R,
) -> Vec<ScoredBook> {
    let input = user_input.to_lowercase();
    let words = scoring_words(&input);

    let mut scored: Vec<ScoredBook> = catalog
        .iter()
        .filter(|book| !exclude.contains(&book.id))
        .filter_map(|book| {
            let score = score_book(book, &input, &words);
            (score > 0).then(|| ScoredBook {
                book: book.clone(),
                score,
            })
        })
        .collect();

    if scored.len() < MIN_SCORED {
        let chosen: HashSet<u32> = scored.iter().map(|s| s.book.id).collect();
        let mut pool: Vec<&Book> = catalog
            .iter()
            .filter(|book| !exclude.contains(&book.id) && !chosen.contains(&book.id))
            .collect();

        debug!(
            "Only {} scored books, backfilling from {} candidates",
            scored.len(),
            pool.len()
        );

        while scored.len() < MAX_RECOMMENDATIONS && !pool.is_empty() {
            let index = rng.gen_range(0..pool.len());
            let book = pool.swap_remove(index);
            scored.push(ScoredBook {
                book: book.clone(),
                score: 0,
            });
        }
    }

    // stable: equal scores stay in insertion order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}
