//! Latent semantic analysis summarizer
//!
//! Builds a term × sentence matrix `A` from stemmed, stop-word-filtered
//! tokens, normalizes every sentence column to `0.4 + 0.6 * f / max_f`,
//! and ranks sentence `j` by `sqrt(Σ_i σ_i² v_ij²)` over the leading
//! `d = max(3, ⌊k · ratio⌋)` singular values. The singular values and
//! right singular vectors come from the eigen-decomposition of `AᵀA`.
//!
//! `AᵀA` is dense in the number of sentences and each Jacobi sweep is
//! cubic in it, so texts over the sentence or byte limit are refused with
//! [`FallbackReason::TooLong`].

use std::collections::HashMap;

use super::{FallbackReason, StageOutcome};
use crate::config::defaults::MAX_STATISTICAL_SENTENCES;
use crate::language::LanguageProfile;
use crate::text::word_tokens;

const SMOOTHING: f64 = 0.4;
const MIN_DIMENSIONS: usize = 3;

/// Texts longer than this many bytes are refused before splitting
pub const MAX_TEXT_BYTES: usize = 64 * 1024;

const MAX_SWEEPS: usize = 64;
const OFF_DIAGONAL_EPSILON: f64 = 1e-22;

#[derive(Debug, Clone, Copy)]
pub struct LsaSummarizer {
    sentences_count: usize,
    reduction_ratio: f64,
    max_sentences: usize,
}

impl LsaSummarizer {
    pub fn new(sentences_count: usize, reduction_ratio: f64) -> Self {
        Self {
            sentences_count,
            reduction_ratio,
            max_sentences: MAX_STATISTICAL_SENTENCES,
        }
    }

    /// Refuse texts with more than `max_sentences` sentences
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Extract the highest-ranked sentences, in document order
    pub fn summarize(&self, text: &str, profile: &LanguageProfile) -> StageOutcome {
        if text.len() > MAX_TEXT_BYTES {
            return StageOutcome::NeedsFallback(FallbackReason::TooLong);
        }

        let sentences = profile.sentences(text);
        if sentences.len() > self.max_sentences {
            return StageOutcome::NeedsFallback(FallbackReason::TooLong);
        }
        let matrix = match TermMatrix::build(&sentences, profile) {
            Some(matrix) => matrix,
            None => return StageOutcome::NeedsFallback(FallbackReason::NoContent),
        };

        let ranks = matrix.sentence_ranks(self.reduction_ratio);

        let mut order: Vec<usize> = (0..sentences.len()).collect();
        // stable: equal ranks keep document order
        order.sort_by(|&a, &b| ranks[b].total_cmp(&ranks[a]));
        let mut chosen: Vec<usize> = order.into_iter().take(self.sentences_count).collect();
        chosen.sort_unstable();

        let summary = chosen
            .iter()
            .map(|&i| sentences[i])
            .collect::<Vec<_>>()
            .join(" ");

        if summary.trim().is_empty() {
            StageOutcome::NeedsFallback(FallbackReason::Blank)
        } else {
            StageOutcome::Summary(summary)
        }
    }
}

/// Normalized term frequencies, one column per sentence
#[derive(Debug)]
struct TermMatrix {
    /// `rows[term][sentence]`
    rows: Vec<Vec<f64>>,
    sentences: usize,
}

impl TermMatrix {
    /// `None` when no sentence contains a content word
    fn build(sentences: &[&str], profile: &LanguageProfile) -> Option<Self> {
        let mut dictionary: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<Vec<f64>> = Vec::new();

        for (col, sentence) in sentences.iter().enumerate() {
            for token in word_tokens(sentence) {
                let word = token.to_lowercase();
                if profile.is_stopword(&word) {
                    continue;
                }
                let term = profile.stem(&word);
                let row = *dictionary.entry(term).or_insert_with(|| {
                    rows.push(vec![0.0; sentences.len()]);
                    rows.len() - 1
                });
                rows[row][col] += 1.0;
            }
        }

        if rows.is_empty() {
            return None;
        }

        let mut matrix = Self {
            rows,
            sentences: sentences.len(),
        };
        matrix.normalize();
        Some(matrix)
    }

    fn normalize(&mut self) {
        for col in 0..self.sentences {
            let max = self
                .rows
                .iter()
                .map(|row| row[col])
                .fold(0.0_f64, f64::max);
            if max == 0.0 {
                continue;
            }
            for row in &mut self.rows {
                row[col] = SMOOTHING + (1.0 - SMOOTHING) * row[col] / max;
            }
        }
    }

    /// `AᵀA`, a sentences × sentences symmetric matrix
    fn gram(&self) -> Vec<Vec<f64>> {
        let n = self.sentences;
        let mut gram = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let dot: f64 = self.rows.iter().map(|row| row[i] * row[j]).sum();
                gram[i][j] = dot;
                gram[j][i] = dot;
            }
        }
        gram
    }

    fn sentence_ranks(&self, reduction_ratio: f64) -> Vec<f64> {
        let n = self.sentences;
        let (eigenvalues, vectors) = symmetric_eigen(self.gram());

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| eigenvalues[b].total_cmp(&eigenvalues[a]));

        let singular_values = self.rows.len().min(n);
        let dimensions = MIN_DIMENSIONS
            .max((singular_values as f64 * reduction_ratio) as usize)
            .min(singular_values);

        (0..n)
            .map(|sentence| {
                order
                    .iter()
                    .take(dimensions)
                    .map(|&k| eigenvalues[k].max(0.0) * vectors[sentence][k].powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}

/// Eigen-decomposition of a symmetric matrix by cyclic Jacobi rotations.
///
/// Returns the eigenvalues and a matrix whose column `k` is the
/// eigenvector of eigenvalue `k`.
fn symmetric_eigen(mut a: Vec<Vec<f64>>) -> (Vec<f64>, Vec<Vec<f64>>) {
    let n = a.len();
    let mut v: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    for _ in 0..MAX_SWEEPS {
        let off: f64 = (0..n)
            .flat_map(|p| (p + 1..n).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum();
        if off < OFF_DIAGONAL_EPSILON {
            break;
        }

        for p in 0..n {
            for q in p + 1..n {
                if a[p][q] == 0.0 {
                    continue;
                }

                let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
                let t = if theta.abs() > 1e150 {
                    0.5 / theta
                } else {
                    theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt())
                };
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (akp, akq) = (row[p], row[q]);
                    row[p] = c * akp - s * akq;
                    row[q] = s * akp + c * akq;
                }
                for k in 0..n {
                    let (apk, aqk) = (a[p][k], a[q][k]);
                    a[p][k] = c * apk - s * aqk;
                    a[q][k] = s * apk + c * aqk;
                }
                for row in v.iter_mut() {
                    let (vkp, vkq) = (row[p], row[q]);
                    row[p] = c * vkp - s * vkq;
                    row[q] = s * vkp + c * vkq;
                }
            }
        }
    }

    let eigenvalues = (0..n).map(|i| a[i][i]).collect();
    (eigenvalues, v)
}
