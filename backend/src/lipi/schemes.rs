//! Letter tables for every supported scheme.
//!
//! All tables share one index order: vowels follow the varnamala
//! (a ā i ī u ū ṛ ṝ ḷ ḹ e ai o au), consonants run from the velar stops
//! through h, and marks are anusvara, visarga, candrabindu. The first
//! spelling of each slot is the one written out; later spellings are only
//! accepted when reading.

pub(crate) type Spellings = &'static [&'static str];

pub(crate) struct SchemeTable {
    pub vowels: [Spellings; 14],
    /// Dependent vowel signs, empty for Roman schemes. Slot 0 is the
    /// inherent vowel and never has a sign.
    pub vowel_marks: [Spellings; 14],
    pub consonants: [Spellings; 33],
    pub marks: [Spellings; 3],
    pub virama: Spellings,
    pub avagraha: Spellings,
    pub om: Spellings,
    pub digits: [Spellings; 10],
    pub danda: Spellings,
    pub double_danda: Spellings,
    /// Input-only spellings for consonant clusters, as consonant indices.
    pub conjuncts: &'static [(&'static str, &'static [u8])],
}

impl SchemeTable {
    pub fn is_brahmic(&self) -> bool {
        !self.virama.is_empty()
    }
}

pub(crate) const VOWEL_A: u8 = 0;

pub(crate) static DEVANAGARI: SchemeTable = SchemeTable {
    vowels: [
        &["अ"], &["आ"], &["इ"], &["ई"], &["उ"], &["ऊ"], &["ऋ"],
        &["ॠ"], &["ऌ"], &["ॡ"], &["ए"], &["ऐ"], &["ओ"], &["औ"],
    ],
    vowel_marks: [
        &[], &["ा"], &["ि"], &["ी"], &["ु"], &["ू"], &["ृ"],
        &["ॄ"], &["ॢ"], &["ॣ"], &["े"], &["ै"], &["ो"], &["ौ"],
    ],
    consonants: [
        &["क"], &["ख"], &["ग"], &["घ"], &["ङ"], &["च"], &["छ"],
        &["ज"], &["झ"], &["ञ"], &["ट"], &["ठ"], &["ड"], &["ढ"],
        &["ण"], &["त"], &["थ"], &["द"], &["ध"], &["न"], &["प"],
        &["फ"], &["ब"], &["भ"], &["म"], &["य"], &["र"], &["ल"],
        &["व"], &["श"], &["ष"], &["स"], &["ह"],
    ],
    marks: [
        &["ं"], &["ः"], &["ँ"],
    ],
    virama: &["्"],
    avagraha: &["ऽ"],
    om: &["ॐ"],
    digits: [
        &["०"], &["१"], &["२"], &["३"], &["४"], &["५"], &["६"], &["७"], &["८"], &["९"],
    ],
    danda: &["।"],
    double_danda: &["॥"],
    conjuncts: &[],
};

pub(crate) static TELUGU: SchemeTable = SchemeTable {
    vowels: [
        &["అ"], &["ఆ"], &["ఇ"], &["ఈ"], &["ఉ"], &["ఊ"], &["ఋ"],
        &["ౠ"], &["ఌ"], &["ౡ"], &["ఏ", "ఎ"], &["ఐ"], &["ఓ", "ఒ"], &["ఔ"],
    ],
    vowel_marks: [
        &[], &["ా"], &["ి"], &["ీ"], &["ు"], &["ూ"], &["ృ"],
        &["ౄ"], &["ౢ"], &["ౣ"], &["ే", "ె"], &["ై"], &["ో", "ొ"], &["ౌ"],
    ],
    consonants: [
        &["క"], &["ఖ"], &["గ"], &["ఘ"], &["ఙ"], &["చ"], &["ఛ"],
        &["జ"], &["ఝ"], &["ఞ"], &["ట"], &["ఠ"], &["డ"], &["ఢ"],
        &["ణ"], &["త"], &["థ"], &["ద"], &["ధ"], &["న"], &["ప"],
        &["ఫ"], &["బ"], &["భ"], &["మ"], &["య"], &["ర"], &["ల"],
        &["వ"], &["శ"], &["ష"], &["స"], &["హ"],
    ],
    marks: [
        &["ం"], &["ః"], &["ఁ"],
    ],
    virama: &["్"],
    avagraha: &["ఽ"],
    om: &["ఓం"],
    digits: [
        &["౦"], &["౧"], &["౨"], &["౩"], &["౪"], &["౫"], &["౬"], &["౭"], &["౮"], &["౯"],
    ],
    danda: &["।"],
    double_danda: &["॥"],
    conjuncts: &[],
};

pub(crate) static IAST: SchemeTable = SchemeTable {
    vowels: [
        &["a"], &["ā"], &["i"], &["ī"], &["u"], &["ū"], &["ṛ", "r̥"],
        &["ṝ", "r̥̄"], &["ḷ", "l̥"], &["ḹ", "l̥̄"], &["e"], &["ai"], &["o"], &["au"],
    ],
    vowel_marks: [
        &[], &[], &[], &[], &[], &[], &[],
        &[], &[], &[], &[], &[], &[], &[],
    ],
    consonants: [
        &["k"], &["kh"], &["g"], &["gh"], &["ṅ"], &["c"], &["ch"],
        &["j"], &["jh"], &["ñ"], &["ṭ"], &["ṭh"], &["ḍ"], &["ḍh"],
        &["ṇ"], &["t"], &["th"], &["d"], &["dh"], &["n"], &["p"],
        &["ph"], &["b"], &["bh"], &["m"], &["y"], &["r"], &["l"],
        &["v"], &["ś"], &["ṣ"], &["s"], &["h"],
    ],
    marks: [
        &["ṃ", "ṁ"], &["ḥ"], &["m̐"],
    ],
    virama: &[],
    avagraha: &["'"],
    om: &["oṃ"],
    digits: [
        &["0"], &["1"], &["2"], &["3"], &["4"], &["5"], &["6"], &["7"], &["8"], &["9"],
    ],
    danda: &["|"],
    double_danda: &["||"],
    conjuncts: &[],
};

pub(crate) static ITRANS: SchemeTable = SchemeTable {
    vowels: [
        &["a"], &["A", "aa"], &["i"], &["I", "ii"], &["u"], &["U", "uu"], &["RRi", "R^i"],
        &["RRI", "R^I"], &["LLi", "L^i"], &["LLI", "L^I"], &["e"], &["ai"], &["o"], &["au"],
    ],
    vowel_marks: [
        &[], &[], &[], &[], &[], &[], &[],
        &[], &[], &[], &[], &[], &[], &[],
    ],
    consonants: [
        &["k"], &["kh"], &["g"], &["gh"], &["~N"], &["ch"], &["Ch", "chh"],
        &["j"], &["jh"], &["~n"], &["T"], &["Th"], &["D"], &["Dh"],
        &["N"], &["t"], &["th"], &["d"], &["dh"], &["n"], &["p"],
        &["ph"], &["b"], &["bh"], &["m"], &["y"], &["r"], &["l"],
        &["v", "w"], &["sh"], &["Sh", "shh"], &["s"], &["h"],
    ],
    marks: [
        &["M", ".m"], &["H"], &[".N"],
    ],
    virama: &[],
    avagraha: &[".a"],
    om: &["OM", "AUM"],
    digits: [
        &["0"], &["1"], &["2"], &["3"], &["4"], &["5"], &["6"], &["7"], &["8"], &["9"],
    ],
    danda: &["|"],
    double_danda: &["||"],
    conjuncts: &[("x", &[0, 30]), ("kSh", &[0, 30]), ("GY", &[7, 9]), ("j~n", &[7, 9]), ("dny", &[7, 9])],
};

pub(crate) static HARVARD_KYOTO: SchemeTable = SchemeTable {
    vowels: [
        &["a"], &["A"], &["i"], &["I"], &["u"], &["U"], &["R"],
        &["RR"], &["lR"], &["lRR"], &["e"], &["ai"], &["o"], &["au"],
    ],
    vowel_marks: [
        &[], &[], &[], &[], &[], &[], &[],
        &[], &[], &[], &[], &[], &[], &[],
    ],
    consonants: [
        &["k"], &["kh"], &["g"], &["gh"], &["G"], &["c"], &["ch"],
        &["j"], &["jh"], &["J"], &["T"], &["Th"], &["D"], &["Dh"],
        &["N"], &["t"], &["th"], &["d"], &["dh"], &["n"], &["p"],
        &["ph"], &["b"], &["bh"], &["m"], &["y"], &["r"], &["l"],
        &["v"], &["z"], &["S"], &["s"], &["h"],
    ],
    marks: [
        &["M"], &["H"], &["~"],
    ],
    virama: &[],
    avagraha: &["'"],
    om: &["OM"],
    digits: [
        &["0"], &["1"], &["2"], &["3"], &["4"], &["5"], &["6"], &["7"], &["8"], &["9"],
    ],
    danda: &["|"],
    double_danda: &["||"],
    conjuncts: &[],
};

pub(crate) static SLP1: SchemeTable = SchemeTable {
    vowels: [
        &["a"], &["A"], &["i"], &["I"], &["u"], &["U"], &["f"],
        &["F"], &["x"], &["X"], &["e"], &["E"], &["o"], &["O"],
    ],
    vowel_marks: [
        &[], &[], &[], &[], &[], &[], &[],
        &[], &[], &[], &[], &[], &[], &[],
    ],
    consonants: [
        &["k"], &["K"], &["g"], &["G"], &["N"], &["c"], &["C"],
        &["j"], &["J"], &["Y"], &["w"], &["W"], &["q"], &["Q"],
        &["R"], &["t"], &["T"], &["d"], &["D"], &["n"], &["p"],
        &["P"], &["b"], &["B"], &["m"], &["y"], &["r"], &["l"],
        &["v"], &["S"], &["z"], &["s"], &["h"],
    ],
    marks: [
        &["M"], &["H"], &["~"],
    ],
    virama: &[],
    avagraha: &["'"],
    om: &["oM"],
    digits: [
        &["0"], &["1"], &["2"], &["3"], &["4"], &["5"], &["6"], &["7"], &["8"], &["9"],
    ],
    danda: &["|"],
    double_danda: &["||"],
    conjuncts: &[],
};
