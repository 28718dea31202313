//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Catalogue of cities personas are placed in

use personasim_common::{Coordinates, Location};

/// A catalogued city.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub city: &'static str,
    pub country: &'static str,
    pub continent: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    const fn new(
        city: &'static str,
        country: &'static str,
        continent: &'static str,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            city,
            country,
            continent,
            lat,
            lon,
        }
    }

    pub fn to_location(&self) -> Location {
        Location {
            city: self.city.to_string(),
            country: self.country.to_string(),
            continent: self.continent.to_string(),
            coordinates: Coordinates::new(self.lat, self.lon),
        }
    }
}

pub const NORTH_AMERICA: &str = "North America";
pub const SOUTH_AMERICA: &str = "South America";
pub const EUROPE: &str = "Europe";
pub const AFRICA: &str = "Africa";
pub const ASIA: &str = "Asia";
pub const OCEANIA: &str = "Oceania";

pub static CITIES: &[City] = &[
    // North America
    City::new("New York", "United States", NORTH_AMERICA, 40.7128, -74.0060),
    City::new("San Francisco", "United States", NORTH_AMERICA, 37.7749, -122.4194),
    City::new("Chicago", "United States", NORTH_AMERICA, 41.8781, -87.6298),
    City::new("Austin", "United States", NORTH_AMERICA, 30.2672, -97.7431),
    City::new("Toronto", "Canada", NORTH_AMERICA, 43.6532, -79.3832),
    City::new("Vancouver", "Canada", NORTH_AMERICA, 49.2827, -123.1207),
    City::new("Mexico City", "Mexico", NORTH_AMERICA, 19.4326, -99.1332),
    // South America
    City::new("São Paulo", "Brazil", SOUTH_AMERICA, -23.5505, -46.6333),
    City::new("Rio de Janeiro", "Brazil", SOUTH_AMERICA, -22.9068, -43.1729),
    City::new("Buenos Aires", "Argentina", SOUTH_AMERICA, -34.6037, -58.3816),
    City::new("Santiago", "Chile", SOUTH_AMERICA, -33.4489, -70.6693),
    City::new("Bogotá", "Colombia", SOUTH_AMERICA, 4.7110, -74.0721),
    City::new("Lima", "Peru", SOUTH_AMERICA, -12.0464, -77.0428),
    // Europe
    City::new("London", "United Kingdom", EUROPE, 51.5074, -0.1278),
    City::new("Berlin", "Germany", EUROPE, 52.5200, 13.4050),
    City::new("Paris", "France", EUROPE, 48.8566, 2.3522),
    City::new("Amsterdam", "Netherlands", EUROPE, 52.3676, 4.9041),
    City::new("Stockholm", "Sweden", EUROPE, 59.3293, 18.0686),
    City::new("Madrid", "Spain", EUROPE, 40.4168, -3.7038),
    City::new("Milan", "Italy", EUROPE, 45.4642, 9.1900),
    City::new("Warsaw", "Poland", EUROPE, 52.2297, 21.0122),
    City::new("Dublin", "Ireland", EUROPE, 53.3498, -6.2603),
    City::new("Zurich", "Switzerland", EUROPE, 47.3769, 8.5417),
    // Africa
    City::new("Lagos", "Nigeria", AFRICA, 6.5244, 3.3792),
    City::new("Nairobi", "Kenya", AFRICA, -1.2921, 36.8219),
    City::new("Cape Town", "South Africa", AFRICA, -33.9249, 18.4241),
    City::new("Johannesburg", "South Africa", AFRICA, -26.2041, 28.0473),
    City::new("Cairo", "Egypt", AFRICA, 30.0444, 31.2357),
    City::new("Casablanca", "Morocco", AFRICA, 33.5731, -7.5898),
    City::new("Accra", "Ghana", AFRICA, 5.6037, -0.1870),
    // Asia
    City::new("Tokyo", "Japan", ASIA, 35.6762, 139.6503),
    City::new("Seoul", "South Korea", ASIA, 37.5665, 126.9780),
    City::new("Shanghai", "China", ASIA, 31.2304, 121.4737),
    City::new("Shenzhen", "China", ASIA, 22.5431, 114.0579),
    City::new("Singapore", "Singapore", ASIA, 1.3521, 103.8198),
    City::new("Bangalore", "India", ASIA, 12.9716, 77.5946),
    City::new("Mumbai", "India", ASIA, 19.0760, 72.8777),
    City::new("Jakarta", "Indonesia", ASIA, -6.2088, 106.8456),
    City::new("Ho Chi Minh City", "Vietnam", ASIA, 10.8231, 106.6297),
    City::new("Dubai", "United Arab Emirates", ASIA, 25.2048, 55.2708),
    City::new("Tel Aviv", "Israel", ASIA, 32.0853, 34.7818),
    // Oceania
    City::new("Sydney", "Australia", OCEANIA, -33.8688, 151.2093),
    City::new("Melbourne", "Australia", OCEANIA, -37.8136, 144.9631),
    City::new("Auckland", "New Zealand", OCEANIA, -36.8485, 174.7633),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_covers_every_continent() {
        let continents: HashSet<&str> = CITIES.iter().map(|c| c.continent).collect();
        for continent in [NORTH_AMERICA, SOUTH_AMERICA, EUROPE, AFRICA, ASIA, OCEANIA] {
            assert!(continents.contains(continent), "missing {}", continent);
        }
    }

    #[test]
    fn test_catalogue_coordinates_are_valid() {
        for city in CITIES {
            assert!((-90.0..=90.0).contains(&city.lat), "{}", city.city);
            assert!((-180.0..=180.0).contains(&city.lon), "{}", city.city);
        }
    }

    #[test]
    fn test_catalogue_cities_are_unique() {
        let names: HashSet<(&str, &str)> = CITIES.iter().map(|c| (c.city, c.country)).collect();
        assert_eq!(names.len(), CITIES.len());
    }
}
