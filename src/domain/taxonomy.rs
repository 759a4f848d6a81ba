//! Fixed vocabulary of genre and tag names the catalog accepts as filters.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

pub const GENRES: [&str; 18] = [
    "action", "adventure", "comedy", "drama", "ecchi", "fantasy", "horror", "mahou shoujo",
    "mecha", "music", "mystery", "psychological", "romance", "sci-fi", "slice of life",
    "sports", "supernatural", "thriller",
];

pub const TAGS: [&str; 236] = [
    "4-koma", "achronological order", "acting", "advertisement", "afterlife", "age gap",
    "age regression", "agender", "airsoft", "aliens", "alternate universe",
    "american football", "amnesia", "anachronism", "animals", "anthology", "anti-hero",
    "archery", "artificial intelligence", "asexual", "assassins", "astronomy", "athletics",
    "augmented reality", "autobiographical", "aviation", "badminton", "band", "bar",
    "baseball", "basketball", "battle royale", "biographical", "bisexual", "body horror",
    "body swapping", "boxing", "boys' love", "bullying", "calligraphy", "card battle", "cars",
    "centaur", "cgi", "cheerleading", "chibi", "chuunibyou", "circus", "classic literature",
    "college", "coming of age", "conspiracy", "cosmic horror", "cosplay", "crime",
    "crossdressing", "crossover", "cult", "cultivation", "cute girls doing cute things",
    "cyberpunk", "cycling", "dancing", "death game", "delinquents", "demons", "denpa",
    "detective", "dinosaurs", "dissociative identities", "dragons", "drawing", "drugs",
    "dullahan", "dungeon", "dystopian", "economics", "educational", "elf", "ensemble cast",
    "environmental", "episodic", "ero guro", "espionage", "fairy tale", "family life",
    "fashion", "female protagonist", "firefighters", "fishing", "fitness", "flash", "food",
    "football", "foreign", "fugitive", "full cgi", "full color", "gambling", "gangs",
    "gender bending", "ghost", "go", "goblin", "gods", "golf", "gore", "guns", "gyaru",
    "harem", "henshin", "hikikomori", "historical", "ice skating", "idol", "isekai",
    "iyashikei", "josei", "kaiju", "karuta", "kemonomimi", "kids", "lacrosse",
    "language barrier", "lgbtq issues", "lost civilization", "love triangle", "mafia", "magic",
    "mahjong", "maids", "male protagonist", "martial arts", "medicine", "memory manipulation",
    "mermaid", "meta", "military", "monster girl", "mopeds", "motorcycles", "musical",
    "mythology", "nekomimi", "ninja", "no dialogue", "noir", "nudity", "nun", "office lady",
    "oiran", "otaku culture", "outdoor", "parody", "philosophy", "photography", "pirates",
    "poker", "police", "politics", "post-apocalyptic", "primarily adult cast",
    "primarily child cast", "primarily female cast", "primarily male cast", "puppetry",
    "rakugo", "real robot", "rehabilitation", "reincarnation", "revenge", "reverse harem",
    "robots", "rotoscoping", "rugby", "rural", "samurai", "satire", "school", "school club",
    "seinen", "ships", "shogi", "shoujo", "shounen", "shrine maiden", "skeleton", "slapstick",
    "slavery", "software development", "space", "space opera", "steampunk", "stop motion",
    "succubus", "super power", "super robot", "superhero", "surfing", "surreal comedy",
    "survival", "swimming", "swordplay", "table tennis", "tanks", "teacher", "teens' love",
    "tennis", "terrorism", "time manipulation", "time skip", "tokusatsu", "tragedy", "trains",
    "triads", "tsundere", "twins", "urban", "urban fantasy", "vampire", "video games",
    "vikings", "virtual world", "volleyball", "war", "werewolf", "witch", "work", "wrestling",
    "writing", "wuxia", "yakuza", "yandere", "youkai", "yuri", "zombie",
];

static TAXONOMY: LazyLock<Taxonomy> = LazyLock::new(|| Taxonomy {
    genres: GENRES.iter().copied().collect(),
    tags: TAGS.iter().copied().collect(),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Genre,
    Tag,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Genre => "genre",
            Category::Tag => "tag",
        }
    }
}

/// Two disjoint sets of lowercase names. Built once, never mutated.
#[derive(Debug)]
pub struct Taxonomy {
    genres: HashSet<&'static str>,
    tags: HashSet<&'static str>,
}

impl Taxonomy {
    pub fn global() -> &'static Taxonomy {
        &TAXONOMY
    }

    /// Exact whole-token lookup, case-insensitive.
    pub fn classify(&self, token: &str) -> Option<Category> {
        let token = token.to_lowercase();
        if self.genres.contains(token.as_str()) {
            Some(Category::Genre)
        } else if self.tags.contains(token.as_str()) {
            Some(Category::Tag)
        } else {
            None
        }
    }

    pub fn is_genre(&self, token: &str) -> bool {
        self.classify(token) == Some(Category::Genre)
    }

    pub fn is_tag(&self, token: &str) -> bool {
        self.classify(token) == Some(Category::Tag)
    }

    /// Names of one category indexed by first character, both levels sorted.
    pub fn grouped(&self, category: Category) -> BTreeMap<char, Vec<&'static str>> {
        let names = match category {
            Category::Genre => &self.genres,
            Category::Tag => &self.tags,
        };

        let mut groups: BTreeMap<char, Vec<&'static str>> = BTreeMap::new();
        for name in names {
            if let Some(first) = name.chars().next() {
                groups.entry(first).or_default().push(*name);
            }
        }
        for group in groups.values_mut() {
            group.sort_unstable();
        }
        groups
    }
}
