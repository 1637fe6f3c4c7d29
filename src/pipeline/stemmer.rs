// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Porter stemmer, in the flavour Lunr indexes are built with.
//!
//! Martin Porter's 1980 algorithm with three departures that must be kept,
//! because the vocabulary in the index was stemmed this way:
//!
//! - step 1c turns a final `y` into `i` only after a consonant that isn't the
//!   first letter (`try → tri`, but `by`, `lay` and `say` stay put)
//! - step 2 maps `bli → ble` instead of `abli → able`
//! - step 2 maps `logi → log`
//!
//! The working state is a char buffer plus two cursors: `k` is the last
//! character still in the word, `j` is the end of the stem once a suffix
//! has been recognized. Both can go to -1, hence `isize`.

/// Stem one lowercase word. Words of one or two characters come back as is.
pub fn stem(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 {
        return word.to_string();
    }

    let mut stemmer = Stemmer::new(chars);
    stemmer.run();
    stemmer.into_string()
}

struct Stemmer {
    b: Vec<char>,
    k: isize,
    j: isize,
}

impl Stemmer {
    fn new(b: Vec<char>) -> Self {
        let k = b.len() as isize - 1;
        Self { b, k, j: 0 }
    }

    fn into_string(self) -> String {
        let end = (self.k + 1).max(0) as usize;
        self.b[..end.min(self.b.len())].iter().collect()
    }

    fn at(&self, i: isize) -> Option<char> {
        usize::try_from(i).ok().and_then(|i| self.b.get(i).copied())
    }

    fn run(&mut self) {
        if self.k <= 1 {
            return;
        }

        self.step1ab();
        if self.k > 0 {
            self.step1c();
            self.step2();
            self.step3();
            self.step4();
            self.step5();
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Is `b[i]` a consonant? `y` is one at the start or after a vowel.
    fn cons(&self, i: isize) -> bool {
        match self.at(i) {
            Some('a' | 'e' | 'i' | 'o' | 'u') => false,
            Some('y') => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of vowel→consonant sequences in `b[0..=j]`.
    ///
    /// ```text
    /// <c><v>       → 0
    /// <c>vc<v>     → 1
    /// <c>vcvc<v>   → 2
    /// ```
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i: isize = 0;

        // Skip leading consonants
        loop {
            if i > self.j {
                return n;
            }
            if !self.cons(i) {
                break;
            }
            i += 1;
        }
        i += 1;

        loop {
            // Vowel run
            loop {
                if i > self.j {
                    return n;
                }
                if self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;

            // Consonant run
            loop {
                if i > self.j {
                    return n;
                }
                if !self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.cons(i))
    }

    /// `b[i-1]` and `b[i]` are the same consonant.
    fn double_consonant(&self, i: isize) -> bool {
        if i < 1 {
            return false;
        }
        self.at(i) == self.at(i - 1) && self.cons(i)
    }

    /// Consonant-vowel-consonant ending at `i`, the last one not `w`, `x` or `y`.
    /// Short words shaped like this get their `e` back (`hop(e)`, `crim(e)`).
    fn cvc(&self, i: isize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.at(i), Some('w' | 'x' | 'y'))
    }

    /// Does `b[0..=k]` end with `suffix`? On a hit, `j` moves to just
    /// before the suffix.
    fn ends(&mut self, suffix: &str) -> bool {
        let suffix: Vec<char> = suffix.chars().collect();
        let len = suffix.len() as isize;
        if suffix.last().copied() != self.at(self.k) || len > self.k + 1 {
            return false;
        }

        let start = (self.k - len + 1) as usize;
        if self.b[start..start + suffix.len()] != suffix[..] {
            return false;
        }
        self.j = self.k - len;
        true
    }

    /// Replace `b[j+1..=k]` with `s`.
    fn set_to(&mut self, s: &str) {
        let keep = (self.j + 1).max(0) as usize;
        self.b.truncate(keep);
        self.b.extend(s.chars());
        self.k = self.j + s.chars().count() as isize;
    }

    /// `set_to` gated on a non-empty measure.
    fn replace(&mut self, s: &str) {
        if self.m() > 0 {
            self.set_to(s);
        }
    }

    // =========================================================================
    // Steps
    // =========================================================================

    /// Plurals, `-ed` and `-ing`.
    ///
    /// ```text
    /// caresses → caress   ponies → poni   cats → cat
    /// agreed → agree      matting → mat   mating → mate
    /// ```
    fn step1ab(&mut self) {
        if self.at(self.k) == Some('s') {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.at(self.k - 1) != Some('s') {
                self.k -= 1;
            }
        }

        if self.ends("eed") {
            if self.m() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.k) {
                self.k -= 1;
                if matches!(self.at(self.k), Some('l' | 's' | 'z')) {
                    self.k += 1;
                }
            } else if self.m() == 1 && self.cvc(self.k) {
                self.set_to("e");
            }
        }
    }

    fn step1c(&mut self) {
        if self.ends("y") && self.j > 0 && self.cons(self.j) {
            if let Ok(k) = usize::try_from(self.k) {
                self.b[k] = 'i';
            }
        }
    }

    /// Double suffixes to single ones, keyed on the penultimate letter.
    fn step2(&mut self) {
        let table: &[(&str, &str)] = match self.at(self.k - 1) {
            Some('a') => &[("ational", "ate"), ("tional", "tion")],
            Some('c') => &[("enci", "ence"), ("anci", "ance")],
            Some('e') => &[("izer", "ize")],
            Some('l') => &[
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
            ],
            Some('o') => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            Some('s') => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            Some('t') => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            Some('g') => &[("logi", "log")],
            _ => &[],
        };
        self.apply_each(table);
    }

    /// `-ic-`, `-full`, `-ness` and friends, keyed on the last letter.
    fn step3(&mut self) {
        let table: &[(&str, &str)] = match self.at(self.k) {
            Some('e') => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            Some('i') => &[("iciti", "ic")],
            Some('l') => &[("ical", "ic"), ("ful", "")],
            Some('s') => &[("ness", "")],
            _ => &[],
        };
        self.apply_each(table);
    }

    /// Every row is tried in order, each against the word as the previous
    /// rows left it.
    fn apply_each(&mut self, table: &[(&str, &str)]) {
        for &(suffix, replacement) in table {
            if self.ends(suffix) {
                self.replace(replacement);
            }
        }
    }

    /// Drop `-ant`, `-ence` etc. in context `<c>vcvc<v>`.
    fn step4(&mut self) {
        let matched = match self.at(self.k - 1) {
            Some('a') => self.ends("al"),
            Some('c') => self.ends("ance") || self.ends("ence"),
            Some('e') => self.ends("er"),
            Some('i') => self.ends("ic"),
            Some('l') => self.ends("able") || self.ends("ible"),
            Some('n') => {
                self.ends("ant") || self.ends("ement") || self.ends("ment") || self.ends("ent")
            }
            Some('o') => {
                if self.ends("ion") {
                    self.j >= 0 && matches!(self.at(self.j), Some('s' | 't'))
                } else {
                    self.ends("ou")
                }
            }
            Some('s') => self.ends("ism"),
            Some('t') => self.ends("ate") || self.ends("iti"),
            Some('u') => self.ends("ous"),
            Some('v') => self.ends("ive"),
            Some('z') => self.ends("ize"),
            _ => false,
        };

        if matched && self.m() > 1 {
            self.k = self.j;
        }
    }

    /// Final `-e`, and `-ll` → `-l`, for long enough stems.
    fn step5(&mut self) {
        self.j = self.k;

        if self.at(self.k) == Some('e') {
            let measure = self.m();
            if measure > 1 || (measure == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }

        if self.at(self.k) == Some('l') && self.double_consonant(self.k) && self.m() > 1 {
            self.k -= 1;
        }
    }
}

/// Pipeline entry point: lowercase, then stem.
pub fn stemmer(token: &str) -> Vec<String> {
    vec![stem(&token.to_lowercase())]
}
