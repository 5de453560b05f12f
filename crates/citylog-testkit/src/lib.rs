// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::path::PathBuf;

const WORLD_CITIES: [(&str, &str); 40] = [
    ("Accra", "Ghana"),
    ("Amsterdam", "Netherlands"),
    ("Athens", "Greece"),
    ("Atlanta", "USA"),
    ("Bangkok", "Thailand"),
    ("Barcelona", "Spain"),
    ("Berlin", "Germany"),
    ("Bogotá", "Colombia"),
    ("Buenos Aires", "Argentina"),
    ("Cairo", "Egypt"),
    ("Cape Town", "South Africa"),
    ("Copenhagen", "Denmark"),
    ("Dublin", "Ireland"),
    ("Edinburgh", "United Kingdom"),
    ("Hanoi", "Vietnam"),
    ("Helsinki", "Finland"),
    ("Istanbul", "Türkiye"),
    ("Kyoto", "Japan"),
    ("Lima", "Peru"),
    ("Lisbon", "Portugal"),
    ("Marrakesh", "Morocco"),
    ("Melbourne", "Australia"),
    ("Mexico City", "Mexico"),
    ("Montreal", "Canada"),
    ("Mumbai", "India"),
    ("Nairobi", "Kenya"),
    ("Oslo", "Norway"),
    ("Paris", "France"),
    ("Prague", "Czechia"),
    ("Quito", "Ecuador"),
    ("Reykjavík", "Iceland"),
    ("Rome", "Italy"),
    ("Santiago", "Chile"),
    ("Seoul", "South Korea"),
    ("Singapore", "Singapore"),
    ("Tallinn", "Estonia"),
    ("Tokyo", "Japan"),
    ("Vienna", "Austria"),
    ("Wellington", "New Zealand"),
    ("Zagreb", "Croatia"),
];

const DEMO_SEED: u64 = 2026;
const DEMO_COUNT: usize = 12;

/// Plain city/country pair; callers turn it into their own record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitySeed {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

#[derive(Debug, Clone)]
pub struct CityFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl CityFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn city(&mut self) -> CitySeed {
        let (name, country) = WORLD_CITIES[self.rng.int_n(WORLD_CITIES.len())];
        CitySeed {
            name: name.to_owned(),
            country: country.to_owned(),
        }
    }

    /// `count` picks with replacement, so repeats are possible.
    pub fn cities(&mut self, count: usize) -> Vec<CitySeed> {
        (0..count).map(|_| self.city()).collect()
    }

    /// A city whose name starts with `initial`, or a made-up one when the
    /// catalog has none.
    pub fn city_starting_with(&mut self, initial: char) -> CitySeed {
        let matches = WORLD_CITIES
            .iter()
            .filter(|(name, _)| name.starts_with(initial))
            .collect::<Vec<_>>();
        if matches.is_empty() {
            return CitySeed {
                name: format!("{initial}ville"),
                country: "Nowhere".to_owned(),
            };
        }
        let (name, country) = matches[self.rng.int_n(matches.len())];
        CitySeed {
            name: (*name).to_owned(),
            country: (*country).to_owned(),
        }
    }
}

/// The fixed batch `--demo` starts with.
pub fn demo_cities() -> Vec<CitySeed> {
    CityFaker::new(DEMO_SEED).cities(DEMO_COUNT)
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::{CityFaker, WORLD_CITIES, demo_cities, temp_config_path};
    use std::collections::BTreeSet;

    #[test]
    fn new_deterministic_seed() {
        let mut left = CityFaker::new(42);
        let mut right = CityFaker::new(42);
        assert_eq!(left.cities(10), right.cities(10));
    }

    #[test]
    fn zero_seed_is_normalized() {
        assert_eq!(CityFaker::new(0).seed(), 1);
        assert_eq!(CityFaker::new(0).cities(5), CityFaker::new(1).cities(5));
    }

    #[test]
    fn generated_cities_come_from_catalog() {
        let mut faker = CityFaker::new(3);
        for seed in faker.cities(50) {
            assert!(
                WORLD_CITIES
                    .iter()
                    .any(|(name, country)| *name == seed.name && *country == seed.country),
                "unexpected {seed:?}",
            );
        }
    }

    #[test]
    fn variety_across_seeds() {
        let names = (1_u64..=20)
            .map(|seed| CityFaker::new(seed).city().name)
            .collect::<BTreeSet<_>>();
        assert!(names.len() > 3);
    }

    #[test]
    fn city_starting_with_matches_initial() {
        let mut faker = CityFaker::new(9);
        assert!(faker.city_starting_with('B').name.starts_with('B'));
        assert_eq!(faker.city_starting_with('X').name, "Xville");
    }

    #[test]
    fn demo_batch_is_stable() {
        let demo = demo_cities();
        assert_eq!(demo.len(), 12);
        assert_eq!(demo, demo_cities());
        assert!(demo.iter().all(|seed| !seed.name.is_empty()));
    }

    #[test]
    fn temp_config_path_lives_in_temp_dir() -> anyhow::Result<()> {
        let (dir, path) = temp_config_path()?;
        assert!(path.starts_with(dir.path()));
        assert!(!path.exists());
        Ok(())
    }
}
