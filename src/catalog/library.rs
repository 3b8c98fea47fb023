//! Compiled-in game library
//!
//! Five independent seed tables. They are deliberately NOT normalized into a
//! single record list: each table is maintained on its own and some names
//! appear in one table without appearing in the others. Lookups fall back to
//! defaults for the gaps.

use crate::models::{Difficulty, Genre, Platform, Popularity};

pub(crate) const GENRE_GAMES: &[(Genre, &[&str])] = &[
    (
        Genre::Rpg,
        &[
            "The Witcher 3",
            "Skyrim",
            "Final Fantasy XV",
            "Persona 5",
            "Divinity: Original Sin 2",
        ],
    ),
    (
        Genre::Action,
        &[
            "Grand Theft Auto V",
            "Assassin's Creed Valhalla",
            "Call of Duty: Modern Warfare",
            "Cyberpunk 2077",
        ],
    ),
    (
        Genre::Adventure,
        &[
            "The Legend of Zelda: Breath of the Wild",
            "Uncharted 4",
            "Tomb Raider",
            "Life is Strange",
        ],
    ),
    (
        Genre::Strategy,
        &[
            "Civilization VI",
            "Total War: Warhammer III",
            "Age of Empires IV",
            "Crusader Kings III",
        ],
    ),
    (
        Genre::Simulation,
        &[
            "The Sims 4",
            "Cities: Skylines",
            "Euro Truck Simulator 2",
            "Farming Simulator 22",
        ],
    ),
    (
        Genre::Puzzle,
        &["Portal 2", "Tetris Effect", "The Witness", "Baba is You"],
    ),
    (
        Genre::Indie,
        &["Hollow Knight", "Celeste", "Stardew Valley", "Among Us", "Cuphead"],
    ),
    (
        Genre::Horror,
        &[
            "Resident Evil Village",
            "Silent Hill",
            "Outlast",
            "Amnesia: The Dark Descent",
        ],
    ),
    (
        Genre::Racing,
        &[
            "Forza Horizon 5",
            "Gran Turismo 7",
            "Mario Kart 8",
            "Need for Speed Heat",
        ],
    ),
    (
        Genre::Sports,
        &["FIFA 23", "NBA 2K23", "Rocket League", "Tony Hawk's Pro Skater 1+2"],
    ),
];

pub(crate) const AGE_RATINGS: &[(&str, u8)] = &[
    ("The Witcher 3", 18),
    ("Skyrim", 17),
    ("Final Fantasy XV", 13),
    ("Persona 5", 17),
    ("Divinity: Original Sin 2", 17),
    ("Grand Theft Auto V", 18),
    ("Assassin's Creed Valhalla", 17),
    ("Call of Duty: Modern Warfare", 17),
    ("Cyberpunk 2077", 18),
    ("The Legend of Zelda: Breath of the Wild", 10),
    ("Uncharted 4", 13),
    ("Tomb Raider", 17),
    ("Life is Strange", 13),
    ("Civilization VI", 10),
    ("Total War: Warhammer III", 16),
    ("Age of Empires IV", 10),
    ("Crusader Kings III", 16),
    ("The Sims 4", 12),
    ("Cities: Skylines", 10),
    ("Euro Truck Simulator 2", 3),
    ("Farming Simulator 22", 3),
    ("Portal 2", 10),
    ("Tetris Effect", 3),
    ("The Witness", 10),
    ("Baba is You", 3),
    ("Hollow Knight", 10),
    ("Celeste", 10),
    ("Stardew Valley", 10),
    ("Among Us", 10),
    ("Cuphead", 10),
    ("Resident Evil Village", 18),
    ("Silent Hill", 17),
    ("Outlast", 18),
    ("Amnesia: The Dark Descent", 17),
    ("Forza Horizon 5", 3),
    ("Gran Turismo 7", 3),
    ("Mario Kart 8", 3),
    ("Need for Speed Heat", 13),
    ("FIFA 23", 3),
    ("NBA 2K23", 3),
    ("Rocket League", 3),
    ("Tony Hawk's Pro Skater 1+2", 10),
];

// "Dark Souls" has no genre entry; the difficulty table carries it anyway.
pub(crate) const DIFFICULTY_TIERS: &[(Difficulty, &[&str])] = &[
    (
        Difficulty::Easy,
        &[
            "The Sims 4",
            "Cities: Skylines",
            "Stardew Valley",
            "Mario Kart 8",
            "FIFA 23",
            "Rocket League",
        ],
    ),
    (
        Difficulty::Medium,
        &[
            "Skyrim",
            "The Legend of Zelda: Breath of the Wild",
            "Uncharted 4",
            "Civilization VI",
            "Hollow Knight",
        ],
    ),
    (
        Difficulty::Hard,
        &[
            "The Witcher 3",
            "Dark Souls",
            "Cuphead",
            "Celeste",
            "Total War: Warhammer III",
        ],
    ),
];

// "Minecraft" likewise exists only here.
pub(crate) const POPULARITY_TIERS: &[(Popularity, &[&str])] = &[
    (
        Popularity::VeryPopular,
        &[
            "The Witcher 3",
            "Grand Theft Auto V",
            "Minecraft",
            "Among Us",
            "Rocket League",
        ],
    ),
    (
        Popularity::Popular,
        &[
            "Skyrim",
            "The Legend of Zelda: Breath of the Wild",
            "Stardew Valley",
            "Hollow Knight",
        ],
    ),
    (
        Popularity::Niche,
        &[
            "Divinity: Original Sin 2",
            "Crusader Kings III",
            "The Witness",
            "Baba is You",
        ],
    ),
];

pub(crate) const PLATFORM_GAMES: &[(Platform, &[&str])] = &[
    (
        Platform::Pc,
        &[
            "The Witcher 3",
            "Skyrim",
            "Civilization VI",
            "Cities: Skylines",
            "Portal 2",
            "Hollow Knight",
        ],
    ),
    (
        Platform::PlayStation,
        &[
            "The Witcher 3",
            "Skyrim",
            "Uncharted 4",
            "Gran Turismo 7",
            "Persona 5",
        ],
    ),
    (
        Platform::Xbox,
        &[
            "The Witcher 3",
            "Skyrim",
            "Forza Horizon 5",
            "Halo Infinite",
            "Gears 5",
        ],
    ),
    (
        Platform::Nintendo,
        &[
            "The Legend of Zelda: Breath of the Wild",
            "Mario Kart 8",
            "Super Mario Odyssey",
        ],
    ),
    (
        Platform::Mobile,
        &["Among Us", "Candy Crush Saga", "Clash of Clans", "Pokemon GO"],
    ),
];
