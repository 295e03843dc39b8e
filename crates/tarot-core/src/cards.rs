//! Card catalog.
//!
//! The 22 major arcana, authored as embedded RON content and validated on
//! load. The catalog is fixed at build time; nothing mutates it afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gradient endpoints for a card face background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardColors {
    pub from: String,
    pub to: String,
}

/// One major-arcana card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotCard {
    pub id: u32,
    /// Display name (Chinese).
    pub name: String,
    /// English name.
    pub name_en: String,
    /// Single glyph shown on the card face.
    pub symbol: String,
    /// Ordinal label ("0", "I", ... "XXI").
    pub numeral: String,
    pub element: String,
    /// Ordered keyword list, used for display and reading substitution.
    pub keywords: Vec<String>,
    pub colors: CardColors,
}

/// Minimum keyword count a card must carry.
pub const MIN_KEYWORDS: usize = 3;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("duplicate card id {0}")]
    DuplicateId(u32),
    #[error("card {id}: empty field '{field}'")]
    EmptyField { id: u32, field: &'static str },
    #[error("card {id}: too few keywords")]
    TooFewKeywords { id: u32 },
}

const EMBEDDED_CARDS: &str = include_str!("../data/cards.ron");

/// The full deck, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    cards: Vec<TarotCard>,
}

impl Catalog {
    /// Parse and validate the compiled-in deck.
    pub fn embedded() -> Result<Catalog, CatalogError> {
        Catalog::from_ron(EMBEDDED_CARDS)
    }

    /// Parse a RON catalog document and run the catalog invariants over it.
    pub fn from_ron(source: &str) -> Result<Catalog, CatalogError> {
        let catalog: Catalog = ron::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn cards(&self) -> &[TarotCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for card in &self.cards {
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
            for (field, value) in [
                ("name", &card.name),
                ("name_en", &card.name_en),
                ("symbol", &card.symbol),
                ("numeral", &card.numeral),
                ("element", &card.element),
                ("colors.from", &card.colors.from),
                ("colors.to", &card.colors.to),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyField { id: card.id, field });
                }
            }
            if card.keywords.len() < MIN_KEYWORDS {
                return Err(CatalogError::TooFewKeywords { id: card.id });
            }
            if card.keywords.iter().any(|kw| kw.trim().is_empty()) {
                return Err(CatalogError::EmptyField {
                    id: card.id,
                    field: "keywords",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_the_major_arcana() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.len(), 22);
    }

    #[test]
    fn embedded_catalog_has_unique_ids_and_full_fields() {
        let catalog = Catalog::embedded().unwrap();
        let ids: HashSet<u32> = catalog.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), catalog.len());
        for card in catalog.cards() {
            assert!(!card.name.is_empty());
            assert!(!card.name_en.is_empty());
            assert!(!card.symbol.is_empty());
            assert!(!card.numeral.is_empty());
            assert!(!card.element.is_empty());
            assert!(card.keywords.len() >= MIN_KEYWORDS, "card {}", card.id);
            assert!(!card.colors.from.is_empty());
            assert!(!card.colors.to.is_empty());
        }
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let source = r##"(
            cards: [
                (id: 1, name: "甲", name_en: "A", symbol: "☀", numeral: "I",
                 element: "火", keywords: ["一", "二", "三"],
                 colors: (from: "#000", to: "#fff")),
                (id: 1, name: "乙", name_en: "B", symbol: "☾", numeral: "II",
                 element: "水", keywords: ["一", "二", "三"],
                 colors: (from: "#000", to: "#fff")),
            ],
        )"##;
        assert!(matches!(
            Catalog::from_ron(source),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn empty_field_is_rejected() {
        let source = r##"(
            cards: [
                (id: 1, name: "", name_en: "A", symbol: "☀", numeral: "I",
                 element: "火", keywords: ["一", "二", "三"],
                 colors: (from: "#000", to: "#fff")),
            ],
        )"##;
        assert!(matches!(
            Catalog::from_ron(source),
            Err(CatalogError::EmptyField { id: 1, field: "name" })
        ));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_ron("(cards: ["),
            Err(CatalogError::Ron(_))
        ));
    }
}
