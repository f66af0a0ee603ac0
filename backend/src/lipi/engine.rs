use std::collections::HashMap;

use lazy_static::lazy_static;

use super::schemes::{SchemeTable, Spellings, VOWEL_A};
use super::Scheme;

/// A scheme-independent unit of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Letter {
    /// A vowel sound, whether written independently or as a sign after a
    /// consonant.
    Vowel(u8),
    /// A consonant without its inherent vowel.
    Consonant(u8),
    Mark(u8),
    Avagraha,
    Om,
    Digit(u8),
    Danda,
    DoubleDanda,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Letter(Letter),
    Raw(char),
}

/// Lookup tables derived from a `SchemeTable`, built once per scheme.
pub(crate) struct Codec {
    table: &'static SchemeTable,
    letters: HashMap<&'static str, Vec<Letter>>,
    vowel_marks: HashMap<&'static str, u8>,
    max_token_len: usize,
}

lazy_static! {
    static ref CODECS: HashMap<Scheme, Codec> = Scheme::ALL
        .iter()
        .map(|s| (*s, Codec::new(s.table())))
        .collect();
}

pub(crate) fn codec(scheme: Scheme) -> &'static Codec {
    // Every scheme is inserted above.
    &CODECS[&scheme]
}

impl Codec {
    fn new(table: &'static SchemeTable) -> Self {
        let mut letters: HashMap<&'static str, Vec<Letter>> = HashMap::new();
        let mut add = |spellings: Spellings, letter: Letter| {
            for s in spellings {
                letters.entry(*s).or_insert_with(|| vec![letter]);
            }
        };

        for (i, sp) in table.vowels.iter().enumerate() {
            add(*sp, Letter::Vowel(i as u8));
        }
        for (i, sp) in table.consonants.iter().enumerate() {
            add(*sp, Letter::Consonant(i as u8));
        }
        for (i, sp) in table.marks.iter().enumerate() {
            add(*sp, Letter::Mark(i as u8));
        }
        for (i, sp) in table.digits.iter().enumerate() {
            add(*sp, Letter::Digit(i as u8));
        }
        add(table.avagraha, Letter::Avagraha);
        add(table.danda, Letter::Danda);
        add(table.double_danda, Letter::DoubleDanda);

        // Multi-letter om spellings (e.g. Telugu ఓం) are read back as their letters.
        let single_char_om: Vec<&'static str> = table
            .om
            .iter()
            .copied()
            .filter(|s| s.chars().count() == 1)
            .collect();
        for s in single_char_om {
            letters.entry(s).or_insert_with(|| vec![Letter::Om]);
        }

        for (spelling, indexes) in table.conjuncts {
            let cluster = indexes.iter().map(|i| Letter::Consonant(*i)).collect();
            letters.entry(*spelling).or_insert(cluster);
        }

        let mut vowel_marks = HashMap::new();
        for (i, sp) in table.vowel_marks.iter().enumerate() {
            for s in sp.iter() {
                vowel_marks.insert(*s, i as u8);
            }
        }

        let max_token_len = letters
            .keys()
            .chain(vowel_marks.keys())
            .chain(table.virama.iter())
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(1);

        Codec {
            table,
            letters,
            vowel_marks,
            max_token_len,
        }
    }

    /// Longest token in `map` starting at `pos`, as `(char_len, value)`.
    fn longest_match<'m, V>(
        &self,
        map: &'m HashMap<&'static str, V>,
        chars: &[char],
        pos: usize,
    ) -> Option<(usize, &'m V)> {
        let max = self.max_token_len.min(chars.len() - pos);
        let mut buf = String::with_capacity(max * 4);
        let mut best = None;
        for (n, c) in chars[pos..pos + max].iter().enumerate() {
            buf.push(*c);
            if let Some(v) = map.get(buf.as_str()) {
                best = Some((n + 1, v));
            }
        }
        best
    }

    fn virama_len_at(&self, chars: &[char], pos: usize) -> Option<usize> {
        self.table.virama.iter().find_map(|v| {
            let n = v.chars().count();
            let end = pos + n;
            if end <= chars.len() && chars[pos..end].iter().copied().eq(v.chars()) {
                Some(n)
            } else {
                None
            }
        })
    }

    pub(crate) fn decode(&self, text: &str) -> Vec<Unit> {
        let chars: Vec<char> = text.chars().collect();
        let brahmic = self.table.is_brahmic();
        let mut units = Vec::with_capacity(chars.len());
        let mut pos = 0;

        while pos < chars.len() {
            let Some((len, letters)) = self.longest_match(&self.letters, &chars, pos) else {
                units.push(Unit::Raw(chars[pos]));
                pos += 1;
                continue;
            };
            pos += len;

            let is_consonant = matches!(letters.last(), Some(Letter::Consonant(_)));
            units.extend(letters.iter().map(|l| Unit::Letter(*l)));

            if !(brahmic && is_consonant) || pos >= chars.len() {
                if brahmic && is_consonant {
                    units.push(Unit::Letter(Letter::Vowel(VOWEL_A)));
                }
                continue;
            }

            // A Brahmic consonant carries an inherent vowel unless a vowel
            // sign or virama follows.
            if let Some((n, mark)) = self.longest_match(&self.vowel_marks, &chars, pos) {
                units.push(Unit::Letter(Letter::Vowel(*mark)));
                pos += n;
            } else if let Some(n) = self.virama_len_at(&chars, pos) {
                pos += n;
            } else {
                units.push(Unit::Letter(Letter::Vowel(VOWEL_A)));
            }
        }

        units
    }

    fn first(spellings: Spellings) -> &'static str {
        spellings.first().copied().unwrap_or("")
    }

    fn spell(&self, letter: Letter) -> &'static str {
        let t = self.table;
        match letter {
            Letter::Vowel(i) => Self::first(t.vowels[i as usize]),
            Letter::Consonant(i) => Self::first(t.consonants[i as usize]),
            Letter::Mark(i) => Self::first(t.marks[i as usize]),
            Letter::Avagraha => Self::first(t.avagraha),
            Letter::Om => Self::first(t.om),
            Letter::Digit(i) => Self::first(t.digits[i as usize]),
            Letter::Danda => Self::first(t.danda),
            Letter::DoubleDanda => Self::first(t.double_danda),
        }
    }

    pub(crate) fn encode(&self, units: &[Unit]) -> String {
        let brahmic = self.table.is_brahmic();
        let mut out = String::with_capacity(units.len() * 3);
        let mut i = 0;

        while i < units.len() {
            match units[i] {
                Unit::Raw(c) => out.push(c),
                Unit::Letter(Letter::Consonant(c)) if brahmic => {
                    out.push_str(Self::first(self.table.consonants[c as usize]));
                    match units.get(i + 1) {
                        Some(Unit::Letter(Letter::Vowel(v))) => {
                            if *v != VOWEL_A {
                                out.push_str(Self::first(self.table.vowel_marks[*v as usize]));
                            }
                            i += 1;
                        }
                        _ => out.push_str(Self::first(self.table.virama)),
                    }
                }
                Unit::Letter(l) => out.push_str(self.spell(l)),
            }
            i += 1;
        }

        out
    }
}
