// Test fixtures with a small lexicon and documents with known diagnostics
// WHY: Golden-style testing requires deterministic input/output pairs

/// Lexicon as `(word, tag)` pairs
pub const LEXICON_PAIRS: &[(&str, &str)] = &[
    ("the", "DT"),
    ("a", "DT"),
    ("cat", "NN"),
    ("bat", "NN"),
    ("hat", "NN"),
    ("mat", "NN"),
    ("dogs", "NNS"),
    ("smith", "NNP"),
    ("she", "PRP"),
    ("he", "PRP"),
    ("sat", "VBD"),
    ("sat", "VBN"),
    ("arrived", "VBD"),
    ("runs", "VBZ"),
    ("run", "VB"),
    ("run", "NN"),
    ("on", "IN"),
    ("quickly", "RB"),
    ("dr", "NNP"),
];

/// Same lexicon in the CSV layout the loader expects
pub const LEXICON_CSV: &str = "ID,Word,POS
1,the,DT
2,a,DT
3,cat,NN
4,bat,NN
5,hat,NN
6,mat,NN
7,dogs,NNS
8,Smith,NNP
9,she,PRP
10,he,PRP
11,sat,VBD
12,sat,VBN
13,arrived,VBD
14,runs,VBZ
15,run,VB
16,run,NN
17,on,IN
18,quickly,RB
19,Dr,NNP
20,broken
";

/// Well-formed document: no unknown words, no rule violations
pub const CLEAN_TEXT: &str = "The cat sat on the mat. Dr. Smith arrived quickly.\nShe runs.";

/// Document exercising every rule
pub const MESSY_TEXT: &str = "the kat sat on the mat.Then  he runs\nDogs run,quickly on 42 hats!";

/// Expected sentence diagnostics for MESSY_TEXT
pub const MESSY_EXPECTED: &[&str] = &[
    "Capitalization error at: the kat sat on the mat.Then  he runs",
    "Multiple spaces: the kat sat on the mat.Then  he runs",
    "No ending mark at: the kat sat on the mat.Then  he runs",
    "Punctuation spacing error at: '.T' in 'the kat sat on the mat.Then  he runs'",
    "Punctuation spacing error at: ',q' in 'Dogs run,quickly on 42 hats!'",
];
