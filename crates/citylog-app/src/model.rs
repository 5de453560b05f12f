// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

/// A visited city. Two cities with the same name and country are equal, and
/// the store keeps both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct City {
    name: String,
    country: String,
}

impl City {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// First `char` of the name; `None` for an empty name.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    City,
    Country,
}

impl DialogField {
    pub const ALL: [Self; 2] = [Self::City, Self::Country];

    pub const fn label(self) -> &'static str {
        match self {
            Self::City => "City name",
            Self::Country => "Country name",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::City => Self::Country,
            Self::Country => Self::City,
        }
    }

    pub const fn required_message(self) -> &'static str {
        match self {
            Self::City => "city name is required",
            Self::Country => "country name is required",
        }
    }
}
