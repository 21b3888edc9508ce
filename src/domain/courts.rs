//! Catalogue of Swedish courts grouped by court system and instance.

use once_cell::sync::Lazy;

use crate::hierarchy::{Category, Hierarchy};

/// Instance tier inside a court system; lower tiers list first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
enum CourtTier {
    Supreme = 0,
    Appellate = 1,
    FirstInstance = 2,
    SpecialTribunal = 3,
    Board = 4,
}

impl CourtTier {
    fn rank(self) -> u8 {
        self as u8
    }
}

static SWEDISH_COURTS: Lazy<Hierarchy> = Lazy::new(|| {
    use CourtTier::*;

    Hierarchy::new(vec![
        Category::new("Allmänna domstolar")
            .with_tier(Supreme.rank(), &["Högsta domstolen"])
            .with_tier(
                Appellate.rank(),
                &[
                    "Svea hovrätt",
                    "Göta hovrätt",
                    "Hovrätten över Skåne och Blekinge",
                    "Hovrätten för Västra Sverige",
                    "Hovrätten för Nedre Norrland",
                    "Hovrätten för Övre Norrland",
                ],
            )
            .with_tier(
                FirstInstance.rank(),
                &[
                    "Stockholms tingsrätt",
                    "Göteborgs tingsrätt",
                    "Malmö tingsrätt",
                    "Uppsala tingsrätt",
                    "Linköpings tingsrätt",
                    "Västerås tingsrätt",
                    "Örebro tingsrätt",
                    "Jönköpings tingsrätt",
                    "Växjö tingsrätt",
                    "Kalmar tingsrätt",
                    "Karlskrona tingsrätt",
                    "Kristianstads tingsrätt",
                    "Helsingborgs tingsrätt",
                    "Lunds tingsrätt",
                    "Halmstads tingsrätt",
                    "Varbergs tingsrätt",
                    "Borås tingsrätt",
                    "Skövde tingsrätt",
                    "Uddevalla tingsrätt",
                    "Vänersborgs tingsrätt",
                    "Karlstads tingsrätt",
                    "Eskilstuna tingsrätt",
                    "Nyköpings tingsrätt",
                    "Norrköpings tingsrätt",
                    "Visby tingsrätt",
                    "Faluns tingsrätt",
                    "Gävle tingsrätt",
                    "Sandvikens tingsrätt",
                    "Hudiksvalls tingsrätt",
                    "Sundsvalls tingsrätt",
                    "Härnösands tingsrätt",
                    "Östersunds tingsrätt",
                    "Umeå tingsrätt",
                    "Skellefteå tingsrätt",
                    "Luleå tingsrätt",
                    "Haparanda tingsrätt",
                ],
            ),
        Category::new("Förvaltningsdomstolar")
            .with_tier(Supreme.rank(), &["Högsta förvaltningsdomstolen"])
            .with_tier(
                Appellate.rank(),
                &[
                    "Kammarrätten i Stockholm",
                    "Kammarrätten i Göteborg",
                    "Kammarrätten i Sundsvall",
                    "Kammarrätten i Jönköping",
                ],
            )
            .with_tier(
                FirstInstance.rank(),
                &[
                    "Förvaltningsrätten i Stockholm",
                    "Förvaltningsrätten i Uppsala",
                    "Förvaltningsrätten i Linköping",
                    "Förvaltningsrätten i Jönköping",
                    "Förvaltningsrätten i Växjö",
                    "Förvaltningsrätten i Malmö",
                    "Förvaltningsrätten i Göteborg",
                    "Förvaltningsrätten i Karlstad",
                    "Förvaltningsrätten i Falun",
                    "Förvaltningsrätten i Härnösand",
                    "Förvaltningsrätten i Umeå",
                    "Förvaltningsrätten i Luleå",
                ],
            ),
        Category::new("Specialdomstolar")
            // Final instance for labour disputes
            .with_tier(Supreme.rank(), &["Arbetsdomstolen"])
            .with_tier(
                Appellate.rank(),
                &[
                    "Patent- och marknadsöverdomstolen",
                    "Mark- och miljööverdomstolen",
                    "Migrationsöverdomstolen",
                ],
            )
            .with_tier(
                FirstInstance.rank(),
                &[
                    "Patent- och marknadsdomstolen",
                    "Mark- och miljödomstolen vid Nacka tingsrätt",
                    "Mark- och miljödomstolen vid Växjö tingsrätt",
                    "Mark- och miljödomstolen vid Vänersborgs tingsrätt",
                    "Mark- och miljödomstolen vid Östersunds tingsrätt",
                    "Mark- och miljödomstolen vid Umeå tingsrätt",
                    "Migrationsdomstolen i Stockholm",
                    "Migrationsdomstolen i Göteborg",
                    "Migrationsdomstolen i Malmö",
                    "Migrationsdomstolen i Luleå",
                ],
            )
            .with_tier(
                SpecialTribunal.rank(),
                &[
                    "Försvarsunderrättelsedomstolen",
                    "Patentbesvärsrätten",
                    "Sjörättsdomstolen vid Luleå tingsrätt",
                    "Sjörättsdomstolen vid Sundsvalls tingsrätt",
                    "Sjörättsdomstolen vid Stockholms tingsrätt",
                    "Sjörättsdomstolen vid Kalmar tingsrätt",
                    "Sjörättsdomstolen vid Malmö tingsrätt",
                    "Sjörättsdomstolen vid Göteborgs tingsrätt",
                    "Sjörättsdomstolen vid Karlstads tingsrätt",
                ],
            )
            .with_tier(
                Board.rank(),
                &[
                    "Hyres- och arrendenämnden i Stockholm",
                    "Hyres- och arrendenämnden i Göteborg",
                    "Hyres- och arrendenämnden i Malmö",
                    "Hyres- och arrendenämnden i Västerås",
                    "Hyres- och arrendenämnden i Linköping",
                    "Hyres- och arrendenämnden i Jönköping",
                    "Hyres- och arrendenämnden i Sundsvall",
                    "Hyres- och arrendenämnden i Umeå",
                    "Statens ansvarsnämnd",
                    "Rättshjälpsmyndigheten",
                    "Rättshjälpsnämnden",
                ],
            ),
    ])
});

/// The built-in Swedish court catalogue.
pub fn swedish_courts() -> &'static Hierarchy {
    &SWEDISH_COURTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supreme_courts_lead_their_category() {
        let courts = swedish_courts();
        let hd = courts.locate("Högsta domstolen").unwrap();
        let svea = courts.locate("Svea hovrätt").unwrap();
        assert_eq!(hd.category, svea.category);
        assert!(hd.tier < svea.tier);
    }

    #[test]
    fn test_three_court_systems() {
        let names: Vec<&str> = swedish_courts()
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Allmänna domstolar", "Förvaltningsdomstolar", "Specialdomstolar"]
        );
    }

    #[test]
    fn test_boards_sort_last_among_special_courts() {
        let courts = swedish_courts();
        let board = courts.locate("Hyres- och arrendenämnden i Malmö").unwrap();
        assert_eq!(board.tier, CourtTier::Board.rank());
    }

    #[test]
    fn test_every_court_listed_once() {
        let mut all: Vec<&str> = swedish_courts()
            .categories()
            .iter()
            .flat_map(|c| c.entries.iter().map(|(name, _)| name.as_str()))
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
