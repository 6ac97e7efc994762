//! The built-in fifty-card pool.
//!
//! First-generation creatures with printed hp/attack values, a primary
//! element, and official artwork references. Cards with no listed element
//! play as Normal.

use super::definition::{CardDefinition, CardId};
use super::registry::CardCatalog;
use crate::element::Element;

const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// (id, name, hp, attack, element, flavor text)
const POOL: &[(u32, &str, i64, i64, Element, &str)] = &[
    (1, "Bulbasaur", 45, 49, Element::Grass, "Seed Pokemon"),
    (3, "Venusaur", 80, 82, Element::Grass, "Seed Pokemon"),
    (4, "Charmander", 39, 52, Element::Fire, "Lizard Pokemon"),
    (6, "Charizard", 78, 84, Element::Fire, "Flame Pokemon"),
    (7, "Squirtle", 44, 48, Element::Water, "Tiny Turtle Pokemon"),
    (9, "Blastoise", 79, 83, Element::Water, "Shellfish Pokemon"),
    (25, "Pikachu", 35, 55, Element::Electric, "Mouse Pokemon"),
    (26, "Raichu", 60, 90, Element::Electric, "Mouse Pokemon"),
    (31, "Nidoqueen", 90, 92, Element::Poison, "Drill Pokemon"),
    (34, "Nidoking", 81, 102, Element::Poison, "Drill Pokemon"),
    (39, "Jigglypuff", 115, 45, Element::Normal, "Balloon Pokemon"),
    (40, "Wigglytuff", 140, 70, Element::Normal, "Balloon Pokemon"),
    (52, "Meowth", 40, 45, Element::Normal, "Scratch Cat Pokemon"),
    (54, "Psyduck", 50, 52, Element::Water, "Duck Pokemon"),
    (55, "Golduck", 80, 82, Element::Water, "Duck Pokemon"),
    (58, "Growlithe", 55, 70, Element::Fire, "Puppy Pokemon"),
    (59, "Arcanine", 90, 110, Element::Fire, "Legendary Pokemon"),
    (62, "Poliwrath", 90, 95, Element::Water, "Tadpole Pokemon"),
    (65, "Alakazam", 55, 50, Element::Psychic, "Psi Pokemon"),
    (68, "Machamp", 90, 130, Element::Fighting, "Superpower Pokemon"),
    (76, "Golem", 80, 120, Element::Rock, "Megaton Pokemon"),
    (79, "Slowpoke", 90, 65, Element::Water, "Dopey Pokemon"),
    (80, "Slowbro", 95, 75, Element::Water, "Hermit Crab Pokemon"),
    (91, "Cloyster", 50, 95, Element::Water, "Bivalve Pokemon"),
    (94, "Gengar", 60, 65, Element::Ghost, "Shadow Pokemon"),
    (95, "Onix", 35, 45, Element::Rock, "Rock Snake Pokemon"),
    (103, "Exeggutor", 95, 95, Element::Grass, "Coconut Pokemon"),
    (106, "Hitmonlee", 50, 120, Element::Fighting, "Kicking Pokemon"),
    (107, "Hitmonchan", 50, 105, Element::Fighting, "Punching Pokemon"),
    (112, "Rhydon", 105, 130, Element::Ground, "Drill Pokemon"),
    (113, "Chansey", 250, 5, Element::Normal, "Egg Pokemon"),
    (123, "Scyther", 70, 110, Element::Bug, "Mantis Pokemon"),
    (127, "Pinsir", 65, 125, Element::Bug, "Stag Beetle Pokemon"),
    (129, "Magikarp", 20, 10, Element::Water, "Fish Pokemon"),
    (130, "Gyarados", 95, 125, Element::Water, "Atrocious Pokemon"),
    (131, "Lapras", 130, 85, Element::Water, "Transport Pokemon"),
    (132, "Ditto", 48, 48, Element::Normal, "Transform Pokemon"),
    (133, "Eevee", 55, 55, Element::Normal, "Evolution Pokemon"),
    (134, "Vaporeon", 130, 65, Element::Water, "Bubble Jet Pokemon"),
    (135, "Jolteon", 65, 65, Element::Electric, "Lightning Pokemon"),
    (136, "Flareon", 65, 130, Element::Fire, "Flame Pokemon"),
    (142, "Aerodactyl", 80, 105, Element::Rock, "Fossil Pokemon"),
    (143, "Snorlax", 160, 110, Element::Normal, "Sleeping Pokemon"),
    (144, "Articuno", 90, 85, Element::Ice, "Freeze Pokemon"),
    (145, "Zapdos", 90, 90, Element::Electric, "Electric Pokemon"),
    (146, "Moltres", 90, 100, Element::Fire, "Flame Pokemon"),
    (147, "Dratini", 41, 64, Element::Dragon, "Dragon Pokemon"),
    (149, "Dragonite", 91, 134, Element::Dragon, "Dragon Pokemon"),
    (150, "Mewtwo", 106, 110, Element::Psychic, "Genetic Pokemon"),
    (151, "Mew", 100, 100, Element::Psychic, "New Species Pokemon"),
];

/// Build the standard catalog.
#[must_use]
pub fn standard_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for &(id, name, hp, attack, element, description) in POOL {
        catalog.register(
            CardDefinition::new(CardId::new(id), name, hp, attack)
                .with_element(element)
                .with_description(description)
                .with_image(format!("{ARTWORK_BASE}/{id}.png")),
        );
    }
    catalog
}
