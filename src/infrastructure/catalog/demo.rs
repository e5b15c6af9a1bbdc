//! Built-in demo roster used when no character payload is supplied.

use crate::domain::entities::{CharacterRef, Thumbnail};

const DEMO_ROSTER: &[(u64, &str, &str, &str)] = &[
    (
        1_009_610,
        "Spider-Man",
        "Bitten by a radioactive spider, high school student Peter Parker gained the speed, strength and powers of a spider.",
        "https://i.annihil.us/u/prod/marvel/i/mg/3/50/526548a343e4b",
    ),
    (
        1_009_220,
        "Captain America",
        "Vowing to serve his country any way he could, young Steve Rogers took the super soldier serum to become America's one-man army.",
        "https://i.annihil.us/u/prod/marvel/i/mg/3/50/537ba56d31087",
    ),
    (
        1_009_368,
        "Iron Man",
        "Wounded, captured and forced to build a weapon by his enemies, billionaire industrialist Tony Stark instead created an advanced suit of armor.",
        "https://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55",
    ),
    (
        1_009_664,
        "Thor",
        "As the Norse God of thunder and lightning, Thor wields one of the greatest weapons ever made, the enchanted hammer Mjolnir.",
        "https://i.annihil.us/u/prod/marvel/i/mg/d/d0/5269657a74350",
    ),
    (
        1_009_351,
        "Hulk",
        "Caught in a gamma bomb explosion while trying to save the life of a teenager, Dr. Bruce Banner was transformed into the Hulk.",
        "https://i.annihil.us/u/prod/marvel/i/mg/5/a0/538615ca33ab0",
    ),
    (
        1_009_189,
        "Black Widow",
        "Despite super spy Natasha Romanoff's checkered past, she's become one of S.H.I.E.L.D.'s most deadly assassins.",
        "https://i.annihil.us/u/prod/marvel/i/mg/f/30/50fecad1f395b",
    ),
];

/// Returns the demo roster.
#[must_use]
pub fn demo_characters() -> Vec<CharacterRef> {
    DEMO_ROSTER
        .iter()
        .map(|(id, name, description, path)| {
            CharacterRef::new(*id, *name, *description, Thumbnail::new(*path, "jpg"))
        })
        .collect()
}

/// Looks up a demo character by ID.
#[must_use]
pub fn find_demo_character(id: u64) -> Option<CharacterRef> {
    demo_characters().into_iter().find(|c| c.id == id)
}
