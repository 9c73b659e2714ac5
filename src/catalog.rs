//! Static restaurant content
//!
//! Bilingual (English/German) restaurant metadata and menu data. The catalog
//! is built once at startup and is read-only for the lifetime of the process.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    De,
}

impl Lang {
    /// Resolve a raw `lang` query/form value.
    ///
    /// Anything other than the two supported codes falls back to English.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("de") => Lang::De,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
        }
    }
}

/// A value with one variant per supported language
#[derive(Debug)]
pub struct Localized<T> {
    pub en: T,
    pub de: T,
}

impl<T> Localized<T> {
    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::En => &self.en,
            Lang::De => &self.de,
        }
    }
}

/// A single dish on the menu
#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<&'static str>,
}

/// Opening hours for one day of the week
#[derive(Debug, Serialize)]
pub struct DayHours {
    pub day: &'static str,
    pub hours: &'static str,
}

/// The complete static content catalog
#[derive(Debug)]
pub struct Catalog {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub tagline: Localized<&'static str>,
    pub description: Localized<&'static str>,
    pub hours: Localized<Vec<DayHours>>,
    pub main_dishes: Localized<Vec<MenuItem>>,
    pub sides: Localized<Vec<MenuItem>>,
}

/// Language-resolved restaurant slice handed to the templates
#[derive(Serialize)]
pub struct RestaurantView<'a> {
    pub name: &'a str,
    pub tagline: &'a str,
    pub description: &'a str,
    pub address: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub hours: &'a [DayHours],
}

/// Language-resolved menu slice handed to the templates
#[derive(Serialize)]
pub struct MenuView<'a> {
    pub main_dishes: &'a [MenuItem],
    pub sides: &'a [MenuItem],
}

impl Catalog {
    pub fn restaurant(&self, lang: Lang) -> RestaurantView<'_> {
        RestaurantView {
            name: self.name,
            tagline: self.tagline.get(lang),
            description: self.description.get(lang),
            address: self.address,
            phone: self.phone,
            email: self.email,
            hours: self.hours.get(lang),
        }
    }

    pub fn menu(&self, lang: Lang) -> MenuView<'_> {
        MenuView {
            main_dishes: self.main_dishes.get(lang),
            sides: self.sides.get(lang),
        }
    }
}

/// Process-wide catalog instance
pub static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    name: "Yí Restaurant",
    address: "Yí Restaurant Cerca de Jorge Ramírez de Arellano, 9 C. Félix Arce Lugos San German, 00683",
    phone: "+34 (787) 413-0224",
    email: "info@yirestaurant.com",
    tagline: Localized {
        en: "Authentic Seafood & Paella Experience",
        de: "Authentische Meeresfrüchte & Paella Erlebnis",
    },
    description: Localized {
        en: "Discover the finest seafood cuisine with our signature paellas, fresh fish, and traditional Spanish flavors in an elegant atmosphere.",
        de: "Entdecken Sie die feinste Meeresfrüchteküche mit unseren charakteristischen Paellas, frischem Fisch und traditionellen spanischen Aromen in eleganter Atmosphäre.",
    },
    hours: Localized {
        en: vec![
            DayHours { day: "Monday", hours: "Closed" },
            DayHours { day: "Tuesday", hours: "6:00 PM - 11:00 PM" },
            DayHours { day: "Wednesday", hours: "6:00 PM - 11:00 PM" },
            DayHours { day: "Thursday", hours: "6:00 PM - 11:00 PM" },
            DayHours { day: "Friday", hours: "6:00 PM - 11:30 PM" },
            DayHours { day: "Saturday", hours: "1:00 PM - 11:30 PM" },
            DayHours { day: "Sunday", hours: "1:00 PM - 10:00 PM" },
        ],
        de: vec![
            DayHours { day: "Montag", hours: "Geschlossen" },
            DayHours { day: "Dienstag", hours: "18:00 - 23:00" },
            DayHours { day: "Mittwoch", hours: "18:00 - 23:00" },
            DayHours { day: "Donnerstag", hours: "18:00 - 23:00" },
            DayHours { day: "Freitag", hours: "18:00 - 23:30" },
            DayHours { day: "Samstag", hours: "13:00 - 23:30" },
            DayHours { day: "Sonntag", hours: "13:00 - 22:00" },
        ],
    },
    main_dishes: Localized {
        en: vec![
            MenuItem {
                name: "Salmon",
                price: 28,
                description: "8oz salmon fillet sautéed with olive oil, Caribbean spices and lemon zest",
                availability: Some("Available"),
            },
            MenuItem {
                name: "Sea Bream",
                price: 28,
                description: "10oz fish fillet sautéed with olive oil and fresh herbs",
                availability: Some("Subject to availability"),
            },
            MenuItem {
                name: "Cod Fillet",
                price: 28,
                description: "8oz cod fillet sautéed with fresh herbs and aromatics",
                availability: Some("Subject to availability"),
            },
            MenuItem {
                name: "Sea Bass (per pound)",
                price: 0,
                description: "Sea bass fillets",
                availability: Some("Subject to availability"),
            },
            MenuItem {
                name: "Louisianna Paella",
                price: 28,
                description: "Haitian paella with chicken, sausage, shrimp, prawns",
                availability: Some("Available"),
            },
        ],
        de: vec![
            MenuItem {
                name: "Lachs",
                price: 28,
                description: "220g Lachsfilet sautiert mit Olivenöl, karibischen Gewürzen und Zitronenschale",
                availability: Some("Verfügbar"),
            },
            MenuItem {
                name: "Goldbrasse",
                price: 28,
                description: "280g Fischfilet sautiert mit Olivenöl und frischen Kräutern",
                availability: Some("Nach Verfügbarkeit"),
            },
            MenuItem {
                name: "Kabeljaufilet",
                price: 28,
                description: "220g Kabeljaufilet sautiert mit frischen Kräutern und Aromaten",
                availability: Some("Nach Verfügbarkeit"),
            },
            MenuItem {
                name: "Seebarsch (pro Pfund)",
                price: 0,
                description: "Seebarschfilets",
                availability: Some("Nach Verfügbarkeit"),
            },
            MenuItem {
                name: "Louisiana Paella",
                price: 28,
                description: "Haitianische Paella mit Hähnchen, Wurst, Garnelen, Langustinen",
                availability: Some("Verfügbar"),
            },
        ],
    },
    sides: Localized {
        en: vec![
            MenuItem { name: "Jasmine Rice", price: 6, description: "With cranberry & almonds", availability: None },
            MenuItem { name: "Djon Djon Rice", price: 6, description: "Haitian rice", availability: None },
            MenuItem { name: "Creamy Vegetables", price: 6, description: "Seasonal vegetables", availability: None },
            MenuItem { name: "Mashed Potatoes", price: 6, description: "Creamy mashed potatoes", availability: None },
            MenuItem { name: "Sautéed Vegetables", price: 7, description: "Fresh seasonal vegetables", availability: None },
            MenuItem { name: "Tostones", price: 5, description: "Fried plantains", availability: None },
            MenuItem { name: "Almonds in Syrup", price: 5, description: "Sweet almond dessert", availability: None },
            MenuItem { name: "French Fries", price: 5, description: "Classic french fries", availability: None },
        ],
        de: vec![
            MenuItem { name: "Jasminreis", price: 6, description: "Mit Cranberry & Mandeln", availability: None },
            MenuItem { name: "Djon Djon Reis", price: 6, description: "Haitianischer Reis", availability: None },
            MenuItem { name: "Cremiges Gemüse", price: 6, description: "Saisonales Gemüse", availability: None },
            MenuItem { name: "Kartoffelpüree", price: 6, description: "Cremiges Kartoffelpüree", availability: None },
            MenuItem { name: "Sautiertes Gemüse", price: 7, description: "Frisches saisonales Gemüse", availability: None },
            MenuItem { name: "Tostones", price: 5, description: "Gebratene Kochbananen", availability: None },
            MenuItem { name: "Mandeln in Sirup", price: 5, description: "Süße Mandelnachspeise", availability: None },
            MenuItem { name: "Pommes Frites", price: 5, description: "Klassische Pommes Frites", availability: None },
        ],
    },
});
