// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::borrow::Cow;

use crate::City;

/// Presentation order for the city list.
///
/// Unsorted borrows the stored order as-is. Sorted returns a stable copy
/// ordered by each name's first `char`; empty names come first.
pub fn project(cities: &[City], sort_enabled: bool) -> Cow<'_, [City]> {
    if !sort_enabled {
        return Cow::Borrowed(cities);
    }

    let mut sorted = cities.to_vec();
    sorted.sort_by_key(City::initial);
    Cow::Owned(sorted)
}

#[cfg(test)]
mod tests {
    use super::project;
    use crate::City;
    use citylog_testkit::CityFaker;
    use std::borrow::Cow;

    fn cities(pairs: &[(&str, &str)]) -> Vec<City> {
        pairs
            .iter()
            .map(|(name, country)| City::new(*name, *country))
            .collect()
    }

    #[test]
    fn unsorted_borrows_store_order() {
        let store = cities(&[("Paris", "France"), ("Atlanta", "USA")]);
        let projected = project(&store, false);
        assert!(matches!(projected, Cow::Borrowed(_)));
        assert_eq!(projected.as_ref(), store.as_slice());
    }

    #[test]
    fn sorted_orders_by_initial() {
        let store = cities(&[("Paris", "France"), ("Atlanta", "USA")]);
        let projected = project(&store, true);
        assert_eq!(
            projected.as_ref(),
            cities(&[("Atlanta", "USA"), ("Paris", "France")]).as_slice(),
        );
        assert_eq!(store[0].name(), "Paris");
    }

    #[test]
    fn equal_initials_keep_insertion_order() {
        let store = cities(&[
            ("Munich", "Germany"),
            ("Berlin", "Germany"),
            ("Madrid", "Spain"),
            ("Milan", "Italy"),
            ("Bern", "Switzerland"),
        ]);
        let names = project(&store, true)
            .iter()
            .map(|city| city.name().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Berlin", "Bern", "Munich", "Madrid", "Milan"]);
    }

    #[test]
    fn stable_within_each_initial_for_generated_cities() {
        let mut faker = CityFaker::new(21);
        let store = ['M', 'B', 'M', 'L', 'B', 'M', 'L', 'B']
            .into_iter()
            .map(|initial| faker.city_starting_with(initial))
            .map(|seed| City::new(seed.name, seed.country))
            .collect::<Vec<_>>();

        let expected = ['B', 'L', 'M']
            .into_iter()
            .flat_map(|initial| {
                store
                    .iter()
                    .filter(move |city| city.initial() == Some(initial))
                    .cloned()
            })
            .collect::<Vec<_>>();

        assert_eq!(project(&store, true).as_ref(), expected.as_slice());
    }

    #[test]
    fn only_the_first_char_is_compared() {
        let store = cities(&[("Ab", "x"), ("Aa", "y")]);
        let names = project(&store, true)
            .iter()
            .map(|city| city.name().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Ab", "Aa"]);
    }

    #[test]
    fn empty_names_sort_first() {
        let store = cities(&[("Quito", "Ecuador"), ("", "Unknown"), ("Accra", "Ghana")]);
        let projected = project(&store, true);
        assert_eq!(projected[0].name(), "");
        assert_eq!(projected[1].name(), "Accra");
        assert_eq!(projected[2].name(), "Quito");
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let store = cities(&[("amsterdam", "Netherlands"), ("Zagreb", "Croatia")]);
        let projected = project(&store, true);
        assert_eq!(projected[0].name(), "Zagreb");
    }

    #[test]
    fn sorting_is_pure_and_repeatable() {
        let mut faker = CityFaker::new(7);
        let store = faker
            .cities(40)
            .into_iter()
            .map(|seed| City::new(seed.name, seed.country))
            .collect::<Vec<_>>();
        let before = store.clone();

        let first = project(&store, true).into_owned();
        let second = project(&store, true).into_owned();

        assert_eq!(first, second);
        assert_eq!(store, before);
        assert_eq!(project(&store, false).as_ref(), before.as_slice());
        assert!(
            first
                .windows(2)
                .all(|pair| pair[0].initial() <= pair[1].initial())
        );
    }
}
