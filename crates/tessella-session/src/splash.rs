//! Splash-art metadata and image selection.
//!
//! The catalog holds the champion/skin metadata the presentation layer
//! shows next to the puzzle and picks each round's image at random without
//! replacement, so a session never repeats a splash art until the pool is
//! reset. Fetching the metadata and the image bytes is the caller's
//! concern; the catalog only deals in names and URLs.

use std::fmt::{self, Display};

use rand::{Rng, RngExt as _};

/// Base URL splash-art images are served from.
pub const SPLASH_CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/img/champion/splash";

/// Metadata for one champion and its skins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionInfo {
    /// Stable champion key used in image URLs (not the display name).
    pub key: String,
    /// Display name.
    pub name: String,
    /// Flavor title.
    pub title: String,
    /// Skin names, indexed by skin id.
    pub skins: Vec<String>,
}

/// Reference to one splash art: a champion key plus a 0-based skin id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplashRef {
    /// Champion key.
    pub champion_key: String,
    /// 0-based skin id.
    pub skin_id: usize,
}

impl SplashRef {
    /// Returns the CDN URL of this splash art.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{SPLASH_CDN_BASE}/{}_{}.jpg", self.champion_key, self.skin_id)
    }
}

impl Display for SplashRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.champion_key, self.skin_id)
    }
}

/// Display info for one splash art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashInfo<'a> {
    /// Champion display name.
    pub name: &'a str,
    /// Champion title.
    pub title: &'a str,
    /// Skin name.
    pub skin: &'a str,
}

/// Splash-art pool with draw-without-replacement selection.
///
/// # Examples
///
/// ```
/// use tessella_session::{ChampionInfo, SplashCatalog};
///
/// let ahri = ChampionInfo {
///     key: "Ahri".to_owned(),
///     name: "Ahri".to_owned(),
///     title: "the Nine-Tailed Fox".to_owned(),
///     skins: vec!["default".to_owned(), "Dynasty Ahri".to_owned()],
/// };
/// let mut catalog = SplashCatalog::new(vec![ahri]);
/// assert_eq!(catalog.remaining(), 2);
///
/// let splash = catalog.draw(&mut rand::rng()).unwrap();
/// assert_eq!(catalog.remaining(), 1);
/// assert!(splash.url().ends_with(".jpg"));
///
/// let info = catalog.info(&splash).unwrap();
/// assert_eq!(info.title, "the Nine-Tailed Fox");
/// ```
#[derive(Debug, Clone)]
pub struct SplashCatalog {
    champions: Vec<ChampionInfo>,
    remaining: Vec<SplashRef>,
}

impl SplashCatalog {
    /// Creates a catalog with a full pool of every champion's every skin.
    #[must_use]
    pub fn new(champions: Vec<ChampionInfo>) -> Self {
        let mut catalog = Self {
            champions,
            remaining: Vec::new(),
        };
        catalog.reset();
        catalog
    }

    /// Refills the pool with every splash art.
    pub fn reset(&mut self) {
        self.remaining = self
            .champions
            .iter()
            .flat_map(|champion| {
                (0..champion.skins.len()).map(|skin_id| SplashRef {
                    champion_key: champion.key.clone(),
                    skin_id,
                })
            })
            .collect();
    }

    /// Returns how many splash arts are left in the pool.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Draws a random splash art, removing it from the pool.
    ///
    /// Returns `None` once the pool is exhausted; call
    /// [`reset`](Self::reset) to refill.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SplashRef> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }

    /// Looks up the display info for a splash art.
    #[must_use]
    pub fn info(&self, splash: &SplashRef) -> Option<SplashInfo<'_>> {
        let champion = self
            .champions
            .iter()
            .find(|champion| champion.key == splash.champion_key)?;
        let skin = champion.skins.get(splash.skin_id)?;
        Some(SplashInfo {
            name: &champion.name,
            title: &champion.title,
            skin,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn catalog() -> SplashCatalog {
        SplashCatalog::new(vec![
            ChampionInfo {
                key: "Ahri".to_owned(),
                name: "Ahri".to_owned(),
                title: "the Nine-Tailed Fox".to_owned(),
                skins: vec!["default".to_owned(), "Dynasty Ahri".to_owned()],
            },
            ChampionInfo {
                key: "Riven".to_owned(),
                name: "Riven".to_owned(),
                title: "the Exile".to_owned(),
                skins: vec!["default".to_owned()],
            },
        ])
    }

    #[test]
    fn test_draws_without_replacement() {
        let mut catalog = catalog();
        let mut rng = Pcg64::seed_from_u64(7);

        let mut drawn = Vec::new();
        while let Some(splash) = catalog.draw(&mut rng) {
            drawn.push(splash);
        }
        assert_eq!(drawn.len(), 3);
        assert_eq!(catalog.remaining(), 0);

        drawn.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        drawn.dedup();
        assert_eq!(drawn.len(), 3, "no splash art repeats");

        catalog.reset();
        assert_eq!(catalog.remaining(), 3);
    }

    #[test]
    fn test_info_lookup() {
        let catalog = catalog();
        let splash = SplashRef {
            champion_key: "Ahri".to_owned(),
            skin_id: 1,
        };
        let info = catalog.info(&splash).unwrap();
        assert_eq!(info.name, "Ahri");
        assert_eq!(info.skin, "Dynasty Ahri");

        let missing = SplashRef {
            champion_key: "Teemo".to_owned(),
            skin_id: 0,
        };
        assert_eq!(catalog.info(&missing), None);
    }

    #[test]
    fn test_url_format() {
        let splash = SplashRef {
            champion_key: "Riven".to_owned(),
            skin_id: 0,
        };
        assert_eq!(
            splash.url(),
            "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/Riven_0.jpg"
        );
    }
}
