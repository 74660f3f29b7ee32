use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root card definition: everything the four screens show.
///
/// All content (copy, photo paths) is supplied here; the defaults ship
/// a complete sample card so the binary runs out of the box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// Who the card is for; shown in headings.
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default)]
    pub hero: HeroSection,
    #[serde(default)]
    pub message: MessageSection,
    #[serde(default)]
    pub gallery: GallerySection,
    #[serde(default)]
    pub surprise: SurpriseSection,
    #[serde(default)]
    pub timing: Timing,
}

/// A photo reference. Asset bytes are external; the path is what the
/// card displays and hands to the clipboard on export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    pub path: String,
    #[serde(default)]
    pub caption: String,
}

/// First screen: greeting and a small auto-playing slideshow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSection {
    pub headline: String,
    pub greeting: String,
    /// Optional quote or verse under the greeting.
    #[serde(default)]
    pub verse: String,
    pub photos: Vec<Photo>,
}

/// Second screen: the gift that opens into the wish modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSection {
    pub prompt: String,
    /// Rotating wishes; the visible one can be copied to the clipboard.
    pub wishes: Vec<String>,
    pub photos: Vec<Photo>,
}

/// Third screen: the photo grid with a lightbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySection {
    pub photos: Vec<Photo>,
}

/// Last screen: the letter revealed one character at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurpriseSection {
    pub heading: String,
    pub letter: String,
    /// Short chips shown once the letter is revealed.
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub footer: String,
}

/// Timer periods, overridable per card. Values in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timing {
    /// Hero slideshow auto-advance interval.
    #[serde(default = "default_hero_period_ms")]
    pub hero_period_ms: u64,
    /// Photo auto-advance interval (message modal and lightbox).
    #[serde(default = "default_photo_period_ms")]
    pub photo_period_ms: u64,
    /// Wish rotation interval in the message modal.
    #[serde(default = "default_wish_period_ms")]
    pub wish_period_ms: u64,
    /// How long autoplay stays suspended after a manual interaction.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Typewriter reveal interval per character.
    #[serde(default = "default_type_tick_ms")]
    pub type_tick_ms: u64,
}

fn default_recipient() -> String {
    "Abi".to_string()
}

fn default_hero_period_ms() -> u64 {
    4200
}

fn default_photo_period_ms() -> u64 {
    3000
}

fn default_wish_period_ms() -> u64 {
    3800
}

fn default_cooldown_ms() -> u64 {
    6000
}

fn default_type_tick_ms() -> u64 {
    30
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            hero_period_ms: default_hero_period_ms(),
            photo_period_ms: default_photo_period_ms(),
            wish_period_ms: default_wish_period_ms(),
            cooldown_ms: default_cooldown_ms(),
            type_tick_ms: default_type_tick_ms(),
        }
    }
}

impl Timing {
    pub fn hero_period(&self) -> Duration {
        Duration::from_millis(self.hero_period_ms)
    }

    pub fn photo_period(&self) -> Duration {
        Duration::from_millis(self.photo_period_ms)
    }

    pub fn wish_period(&self) -> Duration {
        Duration::from_millis(self.wish_period_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn type_tick(&self) -> Duration {
        Duration::from_millis(self.type_tick_ms)
    }
}

fn sample_photos(range: std::ops::RangeInclusive<usize>) -> Vec<Photo> {
    range
        .map(|i| Photo {
            path: format!("photos/memory-{i:02}.jpg"),
            caption: format!("Memory {i}"),
        })
        .collect()
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            headline: "Happy Birthday".to_string(),
            greeting: "Happy birthday to the one who fills my life with love and joy."
                .to_string(),
            verse: "\"For I know the plans I have for you,\" declares the Lord, \
                    \"plans to prosper you and not to harm you, plans to give you \
                    hope and a future.\""
                .to_string(),
            photos: sample_photos(1..=5),
        }
    }
}

impl Default for MessageSection {
    fn default() -> Self {
        Self {
            prompt: "Open the gift to reveal the birthday wish and photos.".to_string(),
            wishes: vec![
                "You fill our lives with warmth, laughter and color. Happy Birthday!"
                    .to_string(),
                "Wishing you a day full of fun, love and unforgettable memories."
                    .to_string(),
                "May your birthday be as special and wonderful as you are.".to_string(),
                "Cheers to you — may the year ahead sparkle with joy and blessings."
                    .to_string(),
            ],
            photos: sample_photos(6..=11),
        }
    }
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            photos: sample_photos(1..=10),
        }
    }
}

impl Default for SurpriseSection {
    fn default() -> Self {
        Self {
            heading: "This one's just for you".to_string(),
            letter: "Once more, happiest birthday ever. From the day we started \
                     talking to now, you have become one of the closest people in \
                     my life. You never judged, you always listened, and on the \
                     days I wanted to give up on people you gave me hope instead. \
                     I believe with everything in me that you will become the \
                     person you dream of being. This little page is a small \
                     present, but I hope it puts a small smile on your face. Once \
                     again, a very happiest birthday. Love you, my friend. Today \
                     isn't just about cake and photos, it's about celebrating you, \
                     the memories we've made, and all the moments still waiting \
                     for us."
                .to_string(),
            reasons: vec![
                "You always listen without judging.".to_string(),
                "You make boring days feel special.".to_string(),
                "Your smile can fix any mood.".to_string(),
                "You hype everyone like a pro.".to_string(),
                "You're simply irreplaceable.".to_string(),
            ],
            footer: "No matter where life takes us, this little page will always \
                     be one of your birthday stories."
                .to_string(),
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            hero: HeroSection::default(),
            message: MessageSection::default(),
            gallery: GallerySection::default(),
            surprise: SurpriseSection::default(),
            timing: Timing::default(),
        }
    }
}
