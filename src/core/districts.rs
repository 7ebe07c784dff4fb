use std::collections::HashMap;

/// Static neighbour table used when exact coordinates are not comparable
const DEFAULT_ADJACENCY: &[(&str, &[&str])] = &[
    ("Dhaka", &["Gazipur", "Narayanganj", "Manikganj", "Munshiganj"]),
    ("Gazipur", &["Dhaka", "Mymensingh", "Tangail"]),
    ("Chittagong", &["Cox's Bazar", "Comilla", "Feni"]),
    ("Sylhet", &["Moulvibazar", "Sunamganj", "Habiganj"]),
];

/// District-to-neighbours lookup
///
/// Only a handful of districts are mapped. Anything else has no neighbours.
/// Lookups are exact, case-sensitive string matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictAdjacency {
    neighbors: HashMap<String, Vec<String>>,
}

impl DistrictAdjacency {
    pub fn new(neighbors: HashMap<String, Vec<String>>) -> Self {
        Self { neighbors }
    }

    /// Neighbours of `district`, empty when the district is not mapped
    pub fn neighbors(&self, district: &str) -> &[String] {
        self.neighbors
            .get(district)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `worker_district` is listed as a neighbour of `job_district`
    ///
    /// The table is not symmetric, so argument order matters.
    #[inline]
    pub fn is_adjacent(&self, job_district: &str, worker_district: &str) -> bool {
        self.neighbors(job_district)
            .iter()
            .any(|d| d == worker_district)
    }
}

impl Default for DistrictAdjacency {
    fn default() -> Self {
        let neighbors = DEFAULT_ADJACENCY
            .iter()
            .map(|(district, near)| {
                (
                    district.to_string(),
                    near.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();

        Self { neighbors }
    }
}
