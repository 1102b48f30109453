/// Static description of one book: its canonical name and the spellings
/// that stand for it once any leading numeral has been removed.
pub(crate) struct BookData {
    pub name: &'static str,
    /// `Some(n)` for `1 Samuel`, `2 Kings`, `3 John` and friends.
    pub numeral: Option<u8>,
    /// Stems without the numeral. Bare words that are everyday English
    /// (`Is`, `Am`, `So`, `Song`) are left out on purpose.
    pub stems: &'static [&'static str],
    /// How many leading `stems` are whole words rather than abbreviations.
    pub whole_words: usize,
}

const fn book(name: &'static str, stems: &'static [&'static str]) -> BookData {
    BookData {
        name,
        numeral: None,
        stems,
        whole_words: 1,
    }
}

const fn numbered(name: &'static str, n: u8, stems: &'static [&'static str]) -> BookData {
    BookData {
        name,
        numeral: Some(n),
        stems,
        whole_words: 1,
    }
}

impl BookData {
    const fn whole_words(self, whole_words: usize) -> BookData {
        BookData {
            whole_words,
            ..self
        }
    }

    /// Whether `stems[index]` is a shortened spelling.
    pub fn is_abbreviation(&self, index: usize) -> bool {
        index >= self.whole_words
    }
}

const SAMUEL: &[&str] = &["Samuel", "Sam", "Sa", "Sm"];
const KINGS: &[&str] = &["Kings", "Kgs", "Kin", "Ki"];
const CHRONICLES: &[&str] = &["Chronicles", "Chron", "Chr", "Ch"];
const CORINTHIANS: &[&str] = &["Corinthians", "Cor", "Co"];
const THESSALONIANS: &[&str] = &["Thessalonians", "Thess", "Thes", "Th"];
const TIMOTHY: &[&str] = &["Timothy", "Tim", "Ti"];
const PETER: &[&str] = &["Peter", "Pet", "Pe", "Pt"];
const EPISTLE_OF_JOHN: &[&str] = &["John", "Jhn", "Joh", "Jn"];

/// The 66 books in canonical order.
pub(crate) static BOOKS: &[BookData] = &[
    book("Genesis", &["Genesis", "Gen", "Ge", "Gn"]),
    book("Exodus", &["Exodus", "Exod", "Exo", "Ex"]),
    book("Leviticus", &["Leviticus", "Lev", "Le", "Lv"]),
    book("Numbers", &["Numbers", "Numb", "Num", "Nu", "Nm"]),
    book("Deuteronomy", &["Deuteronomy", "Deut", "Deu", "Dt"]),
    book("Joshua", &["Joshua", "Josh", "Jos", "Jsh"]),
    book("Judges", &["Judges", "Judg", "Jdgs", "Jdg"]),
    book("Ruth", &["Ruth", "Rth", "Ru"]),
    numbered("1 Samuel", 1, SAMUEL),
    numbered("2 Samuel", 2, SAMUEL),
    numbered("1 Kings", 1, KINGS),
    numbered("2 Kings", 2, KINGS),
    numbered("1 Chronicles", 1, CHRONICLES),
    numbered("2 Chronicles", 2, CHRONICLES),
    book("Ezra", &["Ezra", "Ezr"]),
    book("Nehemiah", &["Nehemiah", "Neh", "Ne"]),
    book("Esther", &["Esther", "Esth", "Est"]),
    book("Job", &["Job", "Jb"]),
    book("Psalms", &["Psalms", "Psalm", "Pslm", "Psa", "Pss", "Ps"]).whole_words(2),
    book("Proverbs", &["Proverbs", "Prov", "Pro", "Prv", "Pr"]),
    book(
        "Ecclesiastes",
        &["Ecclesiastes", "Qoheleth", "Eccles", "Eccl", "Ecc", "Ec"],
    )
    .whole_words(2),
    book(
        "Song of Solomon",
        &[
            "Song of Solomon",
            "Song of Songs",
            "Canticles",
            "Song of Sol",
            "Cant",
        ],
    )
    .whole_words(3),
    book("Isaiah", &["Isaiah", "Isa"]),
    book("Jeremiah", &["Jeremiah", "Jer", "Je", "Jr"]),
    book("Lamentations", &["Lamentations", "Lam"]),
    book("Ezekiel", &["Ezekiel", "Ezek", "Eze", "Ezk"]),
    book("Daniel", &["Daniel", "Dan", "Da", "Dn"]),
    book("Hosea", &["Hosea", "Hos"]),
    book("Joel", &["Joel", "Jl"]),
    book("Amos", &["Amos"]),
    book("Obadiah", &["Obadiah", "Obad", "Ob"]),
    book("Jonah", &["Jonah", "Jon", "Jnh"]),
    book("Micah", &["Micah", "Mic", "Mc"]),
    book("Nahum", &["Nahum", "Nah"]),
    book("Habakkuk", &["Habakkuk", "Hab", "Hb"]),
    book("Zephaniah", &["Zephaniah", "Zeph", "Zep", "Zp"]),
    book("Haggai", &["Haggai", "Hag", "Hg"]),
    book("Zechariah", &["Zechariah", "Zech", "Zec", "Zc"]),
    book("Malachi", &["Malachi", "Mal", "Ml"]),
    book("Matthew", &["Matthew", "Matt", "Mat", "Mt"]),
    book("Mark", &["Mark", "Mrk", "Mk"]),
    book("Luke", &["Luke", "Luk", "Lk"]),
    book("John", &["John", "Jhn", "Joh", "Jn"]),
    book("Acts", &["Acts", "Ac"]),
    book("Romans", &["Romans", "Rom", "Ro", "Rm"]),
    numbered("1 Corinthians", 1, CORINTHIANS),
    numbered("2 Corinthians", 2, CORINTHIANS),
    book("Galatians", &["Galatians", "Gal", "Ga"]),
    book("Ephesians", &["Ephesians", "Ephes", "Eph"]),
    book("Philippians", &["Philippians", "Phil", "Php"]),
    book("Colossians", &["Colossians", "Col"]),
    numbered("1 Thessalonians", 1, THESSALONIANS),
    numbered("2 Thessalonians", 2, THESSALONIANS),
    numbered("1 Timothy", 1, TIMOTHY),
    numbered("2 Timothy", 2, TIMOTHY),
    book("Titus", &["Titus", "Tit"]),
    book("Philemon", &["Philemon", "Philem", "Phm"]),
    book("Hebrews", &["Hebrews", "Heb"]),
    book("James", &["James", "Jas", "Jm"]),
    numbered("1 Peter", 1, PETER),
    numbered("2 Peter", 2, PETER),
    numbered("1 John", 1, EPISTLE_OF_JOHN),
    numbered("2 John", 2, EPISTLE_OF_JOHN),
    numbered("3 John", 3, EPISTLE_OF_JOHN),
    book("Jude", &["Jude", "Jud", "Jd"]),
    book("Revelation", &["Revelation", "Revelations", "Rev", "Rv"]).whole_words(2),
];

/// Spellings accepted in front of a numbered book's stem, per numeral.
///
/// The flag says whether the prefix may be glued to the stem (`1Cor`,
/// `2ndKings`). Roman numerals and words always need whitespace.
pub(crate) const NUMERAL_PREFIXES: [&[(&str, bool)]; 3] = [
    &[("1", true), ("1st", true), ("I", false), ("First", false)],
    &[("2", true), ("2nd", true), ("II", false), ("Second", false)],
    &[("3", true), ("3rd", true), ("III", false), ("Third", false)],
];
