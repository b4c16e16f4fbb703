//! Archetype classification.
//!
//! A manager's season is reduced to six behavioral rates, each normalized
//! against a fixed reference range, and matched to the nearest of ten
//! hand-picked centroids. The table below is the whole model; there is no
//! training or update path.

use serde::{Deserialize, Serialize};

/// Number of behavioral dimensions.
pub const FEATURE_COUNT: usize = 6;

pub struct ReferenceTable {
    pub centroids: [[f64; FEATURE_COUNT]; 10],
    pub min: [f64; FEATURE_COUNT],
    pub max: [f64; FEATURE_COUNT],
}

pub const REFERENCE: ReferenceTable = ReferenceTable {
    centroids: [
        [0.748, 0.313, 0.061, 0.224, 0.548, 0.664],
        [0.778, 0.305, 0.040, 0.205, 0.250, 0.660],
        [0.307, 0.065, 0.001, 0.554, 0.219, 0.424],
        [0.205, 0.047, 0.009, 0.615, 0.989, 0.558],
        [0.695, 0.576, 0.406, 0.276, 0.568, 0.745],
        [0.588, 0.175, 0.015, 0.354, 0.452, 0.638],
        [0.706, 0.155, 0.022, 0.200, 0.018, 0.247],
        [0.450, 0.450, 0.300, 0.400, 0.500, 0.500],
        [0.550, 0.250, 0.100, 0.300, 0.300, 0.400],
        [0.650, 0.350, 0.200, 0.200, 0.400, 0.600],
    ],
    min: [7.002, 0.0, 0.0, 0.011, 0.0, 0.0],
    max: [24.761, 3.438, 2.438, 0.728, 1.0, 0.198],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Indexed in parallel with `REFERENCE.centroids`.
pub const ARCHETYPES: [Archetype; 10] = [
    Archetype {
        name: "The Template Grinder",
        description: "You stick to the meta but aren't afraid of hits. A balanced, aggressive approach to staying with the pack.",
        color: "#3B82F6",
    },
    Archetype {
        name: "The Template Purist",
        description: "You trust the crowd implicitly. Low risk, high ownership. You let the template do the heavy lifting.",
        color: "#10B981",
    },
    Archetype {
        name: "The Hipster",
        description: "You actively avoid popular players. Your team is a collection of differentials that nobody else owns.",
        color: "#8B5CF6",
    },
    Archetype {
        name: "The Maverick",
        description: "The wildest of the wild. You captain differentials and ignore ownership completely. High risk, high adrenaline.",
        color: "#EC4899",
    },
    Archetype {
        name: "The Tinkerer",
        description: "You treat players like stocks. High churn, frequent hits, and a squad that changes every week.",
        color: "#EF4444",
    },
    Archetype {
        name: "The Casual",
        description: "A relaxed approach. You make moves, but you don't obsess over every price change or effective ownership stat.",
        color: "#64748B",
    },
    Archetype {
        name: "The Safe Hands",
        description: "Extremely risk-averse. You almost never take hits and always captain the most popular choice.",
        color: "#059669",
    },
    Archetype {
        name: "The Strategist",
        description: "A balanced manager who mixes template picks with calculated differentials.",
        color: "#D946EF",
    },
    Archetype {
        name: "The Scout",
        description: "You have an eye for talent before it becomes popular, often jumping on bandwagons early.",
        color: "#F59E0B",
    },
    Archetype {
        name: "The Manager",
        description: "A solid, middle-of-the-road style. You play the game well without leaning too hard into any extreme.",
        color: "#6B7280",
    },
];

/// Un-normalized season rates, in feature-vector order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMetrics {
    pub template: f64,
    pub churn: f64,
    pub hits: f64,
    pub differential_share: f64,
    pub captaincy_risk: f64,
    pub bench_share: f64,
}

impl RawMetrics {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.template,
            self.churn,
            self.hits,
            self.differential_share,
            self.captaincy_risk,
            self.bench_share,
        ]
    }
}

/// Normalized metrics, every component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_raw(raw: &RawMetrics, table: &ReferenceTable) -> Self {
        let values = raw.to_array();
        let mut out = [0.0; FEATURE_COUNT];
        for (i, v) in values.iter().enumerate() {
            out[i] = normalize(*v, table.min[i], table.max[i]);
        }
        Self(out)
    }

    pub fn get(&self, idx: usize) -> f64 {
        self.0[idx]
    }

    /// Radar-chart points around (140, 140), radius 100, dimension `i` at
    /// `i` radians.
    pub fn fingerprint(&self) -> [[f64; 2]; FEATURE_COUNT] {
        let mut points = [[0.0; 2]; FEATURE_COUNT];
        for (i, v) in self.0.iter().enumerate() {
            let angle = i as f64;
            points[i] = [140.0 + 100.0 * v * angle.cos(), 140.0 + 100.0 * v * angle.sin()];
        }
        points
    }
}

/// Min/max scaling clamped to `[0, 1]`. A degenerate range maps to 0.5.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

pub fn euclidean(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Index of the closest centroid; the first one wins on exact ties.
pub fn nearest_centroid(vector: &FeatureVector, centroids: &[[f64; FEATURE_COUNT]]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let d = euclidean(&vector.0, centroid);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub index: usize,
    pub archetype: Archetype,
    pub vector: FeatureVector,
}

pub fn classify(raw: &RawMetrics) -> Classification {
    let vector = FeatureVector::from_raw(raw, &REFERENCE);
    let index = nearest_centroid(&vector, &REFERENCE.centroids);
    let archetype = ARCHETYPES
        .get(index)
        .copied()
        .unwrap_or(ARCHETYPES[ARCHETYPES.len() - 1]);
    Classification {
        index,
        archetype,
        vector,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_out_of_range_values() {
        assert_eq!(normalize(-50.0, 0.0, 1.0), 0.0);
        assert_eq!(normalize(1e9, 0.0, 1.0), 1.0);
        assert!((normalize(0.25, 0.0, 1.0) - 0.25).abs() < 1e-12);
        assert_eq!(normalize(3.0, 2.0, 2.0), 0.5);
    }

    #[test]
    fn every_dimension_is_in_unit_range() {
        let extremes = [f64::MIN, -1.0, 0.0, 0.5, 3.0, 100.0, f64::MAX];
        for &x in &extremes {
            let raw = RawMetrics {
                template: x,
                churn: x,
                hits: x,
                differential_share: x,
                captaincy_risk: x,
                bench_share: x,
            };
            let v = FeatureVector::from_raw(&raw, &REFERENCE);
            for i in 0..FEATURE_COUNT {
                assert!((0.0..=1.0).contains(&v.get(i)), "dim {i} for {x}: {}", v.get(i));
            }
        }
    }

    #[test]
    fn centroid_maps_to_its_own_archetype() {
        for (i, c) in REFERENCE.centroids.iter().enumerate() {
            assert_eq!(nearest_centroid(&FeatureVector(*c), &REFERENCE.centroids), i);
        }
    }

    #[test]
    fn ties_go_to_first_centroid() {
        let centroids = [[0.0; FEATURE_COUNT], [1.0; FEATURE_COUNT], [0.0; FEATURE_COUNT]];
        let v = FeatureVector([0.5; FEATURE_COUNT]);
        assert_eq!(nearest_centroid(&v, &centroids), 0);
    }

    #[test]
    fn classification_is_deterministic() {
        let raw = RawMetrics {
            template: 18.0,
            churn: 1.2,
            hits: 0.3,
            differential_share: 0.2,
            captaincy_risk: 0.1,
            bench_share: 0.08,
        };
        let first = classify(&raw);
        for _ in 0..10 {
            assert_eq!(classify(&raw), first);
        }
    }

    #[test]
    fn template_purist_profile() {
        // Raw rates that normalize to centroid 1.
        let raw = RawMetrics {
            template: 7.002 + 0.778 * (24.761 - 7.002),
            churn: 0.305 * 3.438,
            hits: 0.040 * 2.438,
            differential_share: 0.011 + 0.205 * (0.728 - 0.011),
            captaincy_risk: 0.250,
            bench_share: 0.660 * 0.198,
        };
        let c = classify(&raw);
        assert_eq!(c.index, 1);
        assert_eq!(c.archetype.name, "The Template Purist");
    }

    #[test]
    fn fingerprint_steps_one_radian() {
        let v = FeatureVector([1.0, 1.0, 0.0, 0.0, 0.0, 0.5]);
        let pts = v.fingerprint();
        assert!((pts[0][0] - 240.0).abs() < 1e-9);
        assert!((pts[0][1] - 140.0).abs() < 1e-9);
        assert!((pts[1][0] - (140.0 + 100.0 * 1f64.cos())).abs() < 1e-9);
        assert!((pts[1][1] - (140.0 + 100.0 * 1f64.sin())).abs() < 1e-9);
        assert_eq!(pts[2], [140.0, 140.0]);
        assert!((pts[5][0] - (140.0 + 50.0 * 5f64.cos())).abs() < 1e-9);
    }
}
