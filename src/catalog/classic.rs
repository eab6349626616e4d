//! The bundled reference catalog.
//!
//! 151 species, identifiers dense from 1, evolvable exactly when the evolved
//! form sits at the successor identifier. Data only; the engine reads it
//! through ordinary `Catalog` lookups.

use super::record::TypeTag::{
    self, Bug, Dragon, Electric, Fairy, Fighting, Fire, Ghost, Grass, Ground, Ice, Normal, Poison,
    Psychic, Rock, Water,
};
use super::record::{SpeciesId, SpeciesRecord};
use super::table::Catalog;

/// (id, name, type, hp, attack, evolvable)
const CLASSIC: &[(u16, &str, TypeTag, i32, i32, bool)] = &[
    (1, "Bulbasaur", Grass, 45, 49, true),
    (2, "Ivysaur", Grass, 60, 62, true),
    (3, "Venusaur", Grass, 80, 82, false),
    (4, "Charmander", Fire, 39, 52, true),
    (5, "Charmeleon", Fire, 58, 64, true),
    (6, "Charizard", Fire, 78, 84, false),
    (7, "Squirtle", Water, 44, 48, true),
    (8, "Wartortle", Water, 59, 63, true),
    (9, "Blastoise", Water, 79, 83, false),
    (10, "Caterpie", Bug, 45, 30, true),
    (11, "Metapod", Bug, 50, 20, true),
    (12, "Butterfree", Bug, 60, 45, false),
    (13, "Weedle", Bug, 40, 35, true),
    (14, "Kakuna", Bug, 45, 25, true),
    (15, "Beedrill", Bug, 65, 90, false),
    (16, "Pidgey", Normal, 40, 45, true),
    (17, "Pidgeotto", Normal, 63, 60, true),
    (18, "Pidgeot", Normal, 83, 80, false),
    (19, "Rattata", Normal, 30, 56, true),
    (20, "Raticate", Normal, 55, 81, false),
    (21, "Spearow", Normal, 40, 60, true),
    (22, "Fearow", Normal, 65, 90, false),
    (23, "Ekans", Poison, 35, 60, true),
    (24, "Arbok", Poison, 60, 85, false),
    (25, "Pikachu", Electric, 35, 55, true),
    (26, "Raichu", Electric, 60, 90, false),
    (27, "Sandshrew", Ground, 50, 75, true),
    (28, "Sandslash", Ground, 75, 100, false),
    (29, "Nidoran-f", Poison, 55, 47, true),
    (30, "Nidorina", Poison, 70, 62, true),
    (31, "Nidoqueen", Poison, 90, 92, false),
    (32, "Nidoran-m", Poison, 46, 57, true),
    (33, "Nidorino", Poison, 61, 72, true),
    (34, "Nidoking", Poison, 81, 92, false),
    (35, "Clefairy", Fairy, 70, 45, true),
    (36, "Clefable", Fairy, 95, 70, false),
    (37, "Vulpix", Fire, 38, 41, true),
    (38, "Ninetales", Fire, 73, 76, false),
    (39, "Jigglypuff", Normal, 115, 45, true),
    (40, "Wigglytuff", Normal, 140, 70, false),
    (41, "Zubat", Poison, 40, 45, true),
    (42, "Golbat", Poison, 75, 80, false),
    (43, "Oddish", Grass, 45, 50, true),
    (44, "Gloom", Grass, 60, 65, true),
    (45, "Vileplume", Grass, 75, 80, false),
    (46, "Paras", Bug, 35, 70, true),
    (47, "Parasect", Bug, 60, 95, false),
    (48, "Venonat", Bug, 60, 55, true),
    (49, "Venomoth", Bug, 70, 65, false),
    (50, "Diglett", Ground, 10, 55, true),
    (51, "Dugtrio", Ground, 35, 80, false),
    (52, "Meowth", Normal, 40, 45, true),
    (53, "Persian", Normal, 65, 70, false),
    (54, "Psyduck", Water, 50, 52, true),
    (55, "Golduck", Water, 80, 82, false),
    (56, "Mankey", Fighting, 40, 80, true),
    (57, "Primeape", Fighting, 65, 105, false),
    (58, "Growlithe", Fire, 55, 70, true),
    (59, "Arcanine", Fire, 90, 110, false),
    (60, "Poliwag", Water, 40, 50, true),
    (61, "Poliwhirl", Water, 65, 65, true),
    (62, "Poliwrath", Water, 90, 85, false),
    (63, "Abra", Psychic, 25, 20, true),
    (64, "Kadabra", Psychic, 40, 35, true),
    (65, "Alakazam", Psychic, 55, 50, false),
    (66, "Machop", Fighting, 70, 80, true),
    (67, "Machoke", Fighting, 80, 100, true),
    (68, "Machamp", Fighting, 90, 130, false),
    (69, "Bellsprout", Grass, 50, 75, true),
    (70, "Weepinbell", Grass, 65, 90, true),
    (71, "Victreebel", Grass, 80, 105, false),
    (72, "Tentacool", Water, 40, 40, true),
    (73, "Tentacruel", Water, 80, 70, false),
    (74, "Geodude", Rock, 40, 80, true),
    (75, "Graveler", Rock, 55, 95, true),
    (76, "Golem", Rock, 80, 110, false),
    (77, "Ponyta", Fire, 50, 85, true),
    (78, "Rapidash", Fire, 65, 100, false),
    (79, "Slowpoke", Water, 90, 65, true),
    (80, "Slowbro", Water, 95, 75, false),
    (81, "Magnemite", Electric, 25, 35, true),
    (82, "Magneton", Electric, 50, 60, false),
    (83, "Farfetch'd", Normal, 52, 65, false),
    (84, "Doduo", Normal, 35, 85, true),
    (85, "Dodrio", Normal, 60, 110, false),
    (86, "Seel", Water, 65, 45, true),
    (87, "Dewgong", Water, 90, 70, false),
    (88, "Grimer", Poison, 80, 80, true),
    (89, "Muk", Poison, 105, 105, false),
    (90, "Shellder", Water, 30, 65, true),
    (91, "Cloyster", Water, 50, 95, false),
    (92, "Gastly", Ghost, 30, 35, true),
    (93, "Haunter", Ghost, 45, 50, true),
    (94, "Gengar", Ghost, 60, 65, false),
    (95, "Onix", Rock, 35, 45, false),
    (96, "Drowzee", Psychic, 60, 48, true),
    (97, "Hypno", Psychic, 85, 73, false),
    (98, "Krabby", Water, 30, 105, true),
    (99, "Kingler", Water, 55, 130, false),
    (100, "Voltorb", Electric, 40, 30, true),
    (101, "Electrode", Electric, 60, 50, false),
    (102, "Exeggcute", Grass, 60, 40, true),
    (103, "Exeggutor", Grass, 95, 95, false),
    (104, "Cubone", Ground, 50, 50, true),
    (105, "Marowak", Ground, 60, 80, false),
    (106, "Hitmonlee", Fighting, 50, 120, false),
    (107, "Hitmonchan", Fighting, 50, 105, false),
    (108, "Lickitung", Normal, 90, 55, false),
    (109, "Koffing", Poison, 40, 65, true),
    (110, "Weezing", Poison, 65, 90, false),
    (111, "Rhyhorn", Ground, 80, 85, true),
    (112, "Rhydon", Ground, 105, 130, false),
    (113, "Chansey", Normal, 250, 5, false),
    (114, "Tangela", Grass, 65, 55, false),
    (115, "Kangaskhan", Normal, 105, 95, false),
    (116, "Horsea", Water, 30, 40, true),
    (117, "Seadra", Water, 55, 65, false),
    (118, "Goldeen", Water, 45, 67, true),
    (119, "Seaking", Water, 80, 92, false),
    (120, "Staryu", Water, 30, 45, true),
    (121, "Starmie", Water, 60, 75, false),
    (122, "Mr. Mime", Psychic, 40, 45, false),
    (123, "Scyther", Bug, 70, 110, false),
    (124, "Jynx", Ice, 65, 50, false),
    (125, "Electabuzz", Electric, 65, 83, false),
    (126, "Magmar", Fire, 65, 95, false),
    (127, "Pinsir", Bug, 65, 125, false),
    (128, "Tauros", Normal, 75, 100, false),
    (129, "Magikarp", Water, 20, 10, true),
    (130, "Gyarados", Water, 95, 125, false),
    (131, "Lapras", Water, 130, 85, false),
    (132, "Ditto", Normal, 48, 48, false),
    (133, "Eevee", Normal, 55, 55, true),
    (134, "Vaporeon", Water, 130, 65, false),
    (135, "Jolteon", Electric, 65, 65, false),
    (136, "Flareon", Fire, 65, 130, false),
    (137, "Porygon", Normal, 65, 60, false),
    (138, "Omanyte", Rock, 35, 40, true),
    (139, "Omastar", Rock, 70, 60, false),
    (140, "Kabuto", Rock, 30, 80, true),
    (141, "Kabutops", Rock, 60, 115, false),
    (142, "Aerodactyl", Rock, 80, 105, false),
    (143, "Snorlax", Normal, 160, 110, false),
    (144, "Articuno", Ice, 90, 85, false),
    (145, "Zapdos", Electric, 90, 90, false),
    (146, "Moltres", Fire, 90, 100, false),
    (147, "Dratini", Dragon, 41, 64, true),
    (148, "Dragonair", Dragon, 61, 84, true),
    (149, "Dragonite", Dragon, 91, 134, false),
    (150, "Mewtwo", Psychic, 106, 110, false),
    (151, "Mew", Psychic, 100, 100, false),
];

impl Catalog {
    /// Identifiers conventionally offered as starting companions.
    pub const STARTERS: [SpeciesId; 3] = [SpeciesId::new(1), SpeciesId::new(4), SpeciesId::new(7)];

    /// Build the bundled 151-species reference catalog.
    #[must_use]
    pub fn classic() -> Self {
        let mut catalog = Self::new();
        for &(id, name, kind, hp, attack, evolvable) in CLASSIC {
            catalog.register(SpeciesRecord::new(
                SpeciesId::new(id),
                name,
                kind,
                hp,
                attack,
                evolvable,
            ));
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_size() {
        let catalog = Catalog::classic();
        assert_eq!(catalog.len(), 151);
    }

    #[test]
    fn test_classic_ids_are_dense() {
        let catalog = Catalog::classic();
        for id in 1..=151u16 {
            assert!(catalog.contains(SpeciesId::new(id)), "missing id {id}");
        }
    }

    #[test]
    fn test_classic_spot_checks() {
        let catalog = Catalog::classic();

        let pikachu = catalog.get(SpeciesId::new(25)).unwrap();
        assert_eq!(pikachu.name, "Pikachu");
        assert_eq!(pikachu.kind, TypeTag::Electric);
        assert!(pikachu.evolvable);

        let mew = catalog.get(SpeciesId::new(151)).unwrap();
        assert_eq!(mew.name, "Mew");
        assert!(!mew.evolvable);
    }

    #[test]
    fn test_starters_exist() {
        let catalog = Catalog::classic();
        for id in Catalog::STARTERS {
            let starter = catalog.get(id).unwrap();
            assert!(starter.evolvable, "{} should evolve", starter.name);
        }
    }

    #[test]
    fn test_every_evolvable_species_has_a_successor_row() {
        let catalog = Catalog::classic();
        for record in catalog.iter() {
            if record.evolvable {
                assert!(
                    catalog.contains(record.id.successor()),
                    "{} evolves but {} is missing",
                    record.name,
                    record.id.successor()
                );
            }
        }
    }
}
