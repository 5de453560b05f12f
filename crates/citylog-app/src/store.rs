// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

use crate::City;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

pub type Subscriber = Box<dyn FnMut(&[City])>;

/// Insertion-ordered, append-only list of cities for one screen session.
///
/// Subscribers are called synchronously after every append, in the order they
/// subscribed, with the full post-append snapshot.
#[derive(Default)]
pub struct CityStore {
    cities: Vec<City>,
    version: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl CityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, city: City) {
        tracing::debug!(name = city.name(), country = city.country(), "city appended");
        self.cities.push(city);
        self.version = self.version.saturating_add(1);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.cities);
        }
    }

    pub fn snapshot(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of appends so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.saturating_add(1);
        self.subscribers.push((id, subscriber));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }
}

impl fmt::Debug for CityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityStore")
            .field("cities", &self.cities)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Extend<City> for CityStore {
    fn extend<T: IntoIterator<Item = City>>(&mut self, iter: T) {
        for city in iter {
            self.append(city);
        }
    }
}
